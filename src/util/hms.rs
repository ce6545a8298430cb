/*!
Conversions between hour/minute/second components and a total number of
seconds, along with the arithmetic performed on those totals.

Both `Time` and `TimePeriod` do all of their arithmetic here. They differ
only in the ceiling they apply to sums: a `Time` saturates at `24:00:00`
while a `TimePeriod` is limited only by what fits in an `i64`.
*/

use crate::{
    error::{arithmetic::Error as E, Error},
    util::b::{self, SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
};

/// Returns `hours * 3600 + minutes * 60 + seconds`.
///
/// Callers must ensure the components are in bounds. In particular, `hours`
/// must not exceed `PeriodHours::MAX`, otherwise this may overflow.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn to_seconds(hours: i64, minutes: i8, seconds: i8) -> i64 {
    (hours * SECONDS_PER_HOUR)
        + (i64::from(minutes) * SECONDS_PER_MINUTE)
        + i64::from(seconds)
}

/// Splits a non-negative total number of seconds into hours, minutes and
/// seconds. Minutes and seconds are always in the range `0..=59`. Hours
/// absorb everything else.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn from_seconds(total: i64) -> (i64, i8, i8) {
    debug_assert!(total >= 0, "total seconds must be non-negative");
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;
    // OK because remainders of 3600 and 60 divided by 60 are always < 60.
    (hours, minutes as i8, seconds as i8)
}

/// Adds two non-negative totals, clamping the sum to `max`.
///
/// The addition itself never overflows since it saturates at `i64::MAX`
/// first.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn saturating_add(lhs: i64, rhs: i64, max: i64) -> i64 {
    let sum = lhs.saturating_add(rhs);
    if sum > max {
        debug!(
            "sum of {lhs} seconds and {rhs} seconds exceeds {max} seconds, \
             saturating"
        );
        return max;
    }
    sum
}

/// Adds two non-negative totals, returning an error if the sum exceeds the
/// largest total number of seconds a time period can hold.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn checked_add(lhs: i64, rhs: i64) -> Result<i64, Error> {
    Ok(b::PeriodSeconds::check(lhs.saturating_add(rhs))?)
}

/// Subtracts `rhs` from `lhs`, returning an underflow error instead of a
/// negative result.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn checked_sub(lhs: i64, rhs: i64) -> Result<i64, Error> {
    if lhs < rhs {
        trace!("rejecting subtraction of {rhs} seconds from {lhs} seconds");
        return Err(Error::from(E::Underflow {
            minuend: lhs,
            subtrahend: rhs,
        }));
    }
    Ok(lhs - rhs)
}

#[cfg(test)]
mod tests {
    use crate::util::b::Bounds;

    use super::*;

    #[test]
    fn split_and_join() {
        assert_eq!(to_seconds(0, 0, 0), 0);
        assert_eq!(to_seconds(13, 59, 55), 50_395);
        assert_eq!(to_seconds(24, 0, 0), 86_400);
        assert_eq!(from_seconds(0), (0, 0, 0));
        assert_eq!(from_seconds(55_505), (15, 25, 5));
        assert_eq!(from_seconds(86_400), (24, 0, 0));
        assert_eq!(from_seconds(90_905), (25, 15, 5));
    }

    #[test]
    fn split_max_period() {
        let max = b::PeriodSeconds::MAX;
        assert_eq!(from_seconds(max), (b::PeriodHours::MAX, 59, 59));
        assert_eq!(to_seconds(b::PeriodHours::MAX, 59, 59), max);
    }

    #[test]
    fn saturating() {
        assert_eq!(saturating_add(1, 2, 10), 3);
        assert_eq!(saturating_add(5, 5, 10), 10);
        assert_eq!(saturating_add(5, 6, 10), 10);
        assert_eq!(saturating_add(i64::MAX, i64::MAX, 10), 10);
    }

    #[test]
    fn checked() {
        assert_eq!(checked_add(1, 2).unwrap(), 3);
        let max = b::PeriodSeconds::MAX;
        assert_eq!(checked_add(max, 0).unwrap(), max);
        assert!(checked_add(max, 1).unwrap_err().is_range());
        assert!(checked_add(max, max).unwrap_err().is_range());

        assert_eq!(checked_sub(5, 5).unwrap(), 0);
        assert_eq!(checked_sub(6, 5).unwrap(), 1);
        assert!(checked_sub(4, 5).unwrap_err().is_underflow());
    }

    quickcheck::quickcheck! {
        fn prop_split_then_join(total: u32) -> bool {
            let total = i64::from(total);
            let (h, m, s) = from_seconds(total);
            to_seconds(h, m, s) == total
        }

        fn prop_saturating_add_never_exceeds_max(lhs: u32, rhs: u32) -> bool {
            let (lhs, rhs) = (i64::from(lhs), i64::from(rhs));
            saturating_add(lhs, rhs, b::SECONDS_PER_DAY) <= b::SECONDS_PER_DAY
        }
    }
}
