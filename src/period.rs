use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{
    error::{arithmetic::Error as E, Error, ErrorContext},
    util::{
        b::{self, Bounds},
        hms,
    },
};

/// A non-negative span of time measured in hours, minutes and seconds.
///
/// Unlike a [`Time`](crate::Time), a `TimePeriod` isn't limited to a single
/// day. Its hours component can be as big as `2562047788015214`, which is the
/// biggest value for which the total number of seconds in the period (with
/// `59` minutes and `59` seconds) still fits into an `i64`. The minutes and
/// seconds components are always in the range `0..=59`.
///
/// A `TimePeriod` can never be negative.
///
/// # Parsing and printing
///
/// The `Display` trait implementation prints `H:MM:SS`. The hours are
/// written without any padding, while minutes and seconds are padded to two
/// digits. The `FromStr` trait implementation accepts the same format, along
/// with zero padded hours:
///
/// ```
/// use timelib::TimePeriod;
///
/// let period: TimePeriod = "163:20:01".parse()?;
/// assert_eq!(period.hours(), 163);
/// assert_eq!(period.to_string(), "163:20:01");
///
/// assert_eq!(TimePeriod::new(1, 1, 1)?.to_string(), "1:01:01");
/// assert_eq!(TimePeriod::ZERO.to_string(), "0:00:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Arithmetic
///
/// Time periods can be added to and subtracted from one another. There is no
/// saturation at `24` hours: a sum of time periods is exact. Subtraction
/// fails if the result would be negative.
///
/// ```
/// use timelib::TimePeriod;
///
/// let p1 = TimePeriod::new(25, 12, 2)?;
/// let p2 = TimePeriod::new(1, 15, 10)?;
/// assert_eq!(p1 + p2, TimePeriod::new(26, 27, 12)?);
/// assert_eq!(p1 - p2, TimePeriod::new(23, 56, 52)?);
/// assert!(p2.checked_sub(p1).unwrap_err().is_underflow());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct TimePeriod {
    hours: i64,
    minutes: i8,
    seconds: i8,
}

impl TimePeriod {
    /// A time period of zero length.
    pub const ZERO: TimePeriod = TimePeriod::constant(0, 0, 0);

    /// The longest representable time period.
    pub const MAX: TimePeriod =
        TimePeriod::constant(b::PeriodHours::MAX, 59, 59);

    /// Creates a new time period from its component hours, minutes and
    /// seconds.
    ///
    /// # Errors
    ///
    /// This returns an error unless *all* of the following conditions are
    /// true:
    ///
    /// * `0 <= hours <= 2562047788015214`
    /// * `0 <= minutes <= 59`
    /// * `0 <= seconds <= 59`
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::TimePeriod;
    ///
    /// let period = TimePeriod::new(48, 30, 0)?;
    /// assert_eq!(period.total_seconds(), 174_600);
    ///
    /// assert!(TimePeriod::new(0, 60, 0).is_err());
    /// assert!(TimePeriod::new(-1, 0, 0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(
        hours: i64,
        minutes: i8,
        seconds: i8,
    ) -> Result<TimePeriod, Error> {
        let hours = b::PeriodHours::check(hours)?;
        let minutes = b::Minute::check(minutes)?;
        let seconds = b::Second::check(seconds)?;
        Ok(TimePeriod::new_unchecked(hours, minutes, seconds))
    }

    /// Creates a new time period in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics if the given values do not satisfy the same conditions
    /// checked by [`TimePeriod::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::TimePeriod;
    ///
    /// const SHIFT: TimePeriod = TimePeriod::constant(8, 30, 0);
    /// assert_eq!(SHIFT.to_string(), "8:30:00");
    /// ```
    #[inline]
    pub const fn constant(hours: i64, minutes: i8, seconds: i8) -> TimePeriod {
        if !b::PeriodHours::contains(hours) {
            panic!("invalid time period hours");
        }
        if !b::Minute::contains(minutes) {
            panic!("invalid time period minutes");
        }
        if !b::Second::contains(seconds) {
            panic!("invalid time period seconds");
        }
        TimePeriod { hours, minutes, seconds }
    }

    /// Creates a new time period from a total number of seconds.
    ///
    /// # Errors
    ///
    /// This returns an error if the number given is negative or bigger than
    /// the total number of seconds in [`TimePeriod::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::TimePeriod;
    ///
    /// let period = TimePeriod::from_seconds(90_061)?;
    /// assert_eq!(period.to_string(), "25:01:01");
    /// assert!(TimePeriod::from_seconds(-1).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_seconds(seconds: i64) -> Result<TimePeriod, Error> {
        let seconds = b::PeriodSeconds::check(seconds)?;
        Ok(TimePeriod::from_seconds_unchecked(seconds))
    }

    /// Returns true if this time period has zero length.
    #[inline]
    pub fn is_zero(self) -> bool {
        self == TimePeriod::ZERO
    }

    /// Returns the "hours" component of this time period.
    ///
    /// This is not limited to `24`.
    #[inline]
    pub fn hours(self) -> i64 {
        self.hours
    }

    /// Returns the "minutes" component of this time period.
    ///
    /// The value returned is guaranteed to be in the range `0..=59`.
    #[inline]
    pub fn minutes(self) -> i8 {
        self.minutes
    }

    /// Returns the "seconds" component of this time period.
    ///
    /// The value returned is guaranteed to be in the range `0..=59`.
    #[inline]
    pub fn seconds(self) -> i8 {
        self.seconds
    }

    /// Returns the total number of seconds in this time period.
    ///
    /// This never overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::TimePeriod;
    ///
    /// assert_eq!(TimePeriod::new(1, 1, 1)?.total_seconds(), 3661);
    /// assert_eq!(TimePeriod::MAX.total_seconds(), 9_223_372_036_854_773_999);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn total_seconds(self) -> i64 {
        hms::to_seconds(self.hours, self.minutes, self.seconds)
    }

    /// Add two time periods together.
    ///
    /// # Errors
    ///
    /// This returns an error when the sum would exceed [`TimePeriod::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::TimePeriod;
    ///
    /// let p1 = TimePeriod::new(13, 59, 55)?;
    /// let p2 = TimePeriod::new(1, 15, 10)?;
    /// assert_eq!(p1.checked_add(p2)?, TimePeriod::new(15, 15, 5)?);
    ///
    /// let err = TimePeriod::MAX.checked_add(p2).unwrap_err();
    /// assert!(err.is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn checked_add(self, other: TimePeriod) -> Result<TimePeriod, Error> {
        let sum = hms::checked_add(self.total_seconds(), other.total_seconds())
            .context(E::FailedAddTimePeriod)?;
        Ok(TimePeriod::from_seconds_unchecked(sum))
    }

    /// Add two time periods together, saturating at [`TimePeriod::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::TimePeriod;
    ///
    /// let p = TimePeriod::new(1, 0, 0)?;
    /// assert_eq!(p.saturating_add(p), TimePeriod::new(2, 0, 0)?);
    /// assert_eq!(TimePeriod::MAX.saturating_add(p), TimePeriod::MAX);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn saturating_add(self, other: TimePeriod) -> TimePeriod {
        let sum = hms::saturating_add(
            self.total_seconds(),
            other.total_seconds(),
            b::PeriodSeconds::MAX,
        );
        TimePeriod::from_seconds_unchecked(sum)
    }

    /// Subtract the given time period from this one.
    ///
    /// # Errors
    ///
    /// This returns an error if `other` is longer than this time period,
    /// since the result would be negative.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::TimePeriod;
    ///
    /// let p1 = TimePeriod::new(25, 12, 2)?;
    /// let p2 = TimePeriod::new(1, 15, 10)?;
    /// assert_eq!(p1.checked_sub(p2)?, TimePeriod::new(23, 56, 52)?);
    /// assert_eq!(p1.checked_sub(p1)?, TimePeriod::ZERO);
    /// assert!(p2.checked_sub(p1).unwrap_err().is_underflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn checked_sub(self, other: TimePeriod) -> Result<TimePeriod, Error> {
        let diff = hms::checked_sub(self.total_seconds(), other.total_seconds())
            .context(E::FailedSubTimePeriod)?;
        Ok(TimePeriod::from_seconds_unchecked(diff))
    }
}

/// Crate internal APIs.
impl TimePeriod {
    #[inline]
    pub(crate) fn new_unchecked(
        hours: i64,
        minutes: i8,
        seconds: i8,
    ) -> TimePeriod {
        debug_assert!(b::PeriodHours::contains(hours));
        debug_assert!(b::Minute::contains(minutes));
        debug_assert!(b::Second::contains(seconds));
        TimePeriod { hours, minutes, seconds }
    }

    /// Callers must ensure `seconds` is within `PeriodSeconds`.
    #[inline]
    fn from_seconds_unchecked(seconds: i64) -> TimePeriod {
        let (hours, minutes, seconds) = hms::from_seconds(seconds);
        TimePeriod::new_unchecked(hours, minutes, seconds)
    }
}

impl Default for TimePeriod {
    fn default() -> TimePeriod {
        TimePeriod::ZERO
    }
}

impl core::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl core::fmt::Debug for TimePeriod {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::str::FromStr for TimePeriod {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<TimePeriod, Error> {
        crate::fmt::parse_time_period(string.as_bytes())
    }
}

/// Adds two time periods.
///
/// This panics if the sum would exceed [`TimePeriod::MAX`]. For checked
/// arithmetic, see [`TimePeriod::checked_add`].
impl Add for TimePeriod {
    type Output = TimePeriod;

    #[inline]
    fn add(self, rhs: TimePeriod) -> TimePeriod {
        self.checked_add(rhs).expect("adding time periods overflowed")
    }
}

/// Adds a time period in place.
///
/// This panics if the sum would exceed [`TimePeriod::MAX`]. For checked
/// arithmetic, see [`TimePeriod::checked_add`].
impl AddAssign for TimePeriod {
    #[inline]
    fn add_assign(&mut self, rhs: TimePeriod) {
        *self = self.add(rhs);
    }
}

/// Subtracts one time period from another.
///
/// This panics if the result would be negative. For checked arithmetic, see
/// [`TimePeriod::checked_sub`].
impl Sub for TimePeriod {
    type Output = TimePeriod;

    #[inline]
    fn sub(self, rhs: TimePeriod) -> TimePeriod {
        self.checked_sub(rhs).expect("subtracting time periods underflowed")
    }
}

/// Subtracts a time period in place.
///
/// This panics if the result would be negative. For checked arithmetic, see
/// [`TimePeriod::checked_sub`].
impl SubAssign for TimePeriod {
    #[inline]
    fn sub_assign(&mut self, rhs: TimePeriod) {
        *self = self.sub(rhs);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimePeriod {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimePeriod {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimePeriod, D::Error> {
        use serde::de;

        struct TimePeriodVisitor;

        impl<'de> de::Visitor<'de> for TimePeriodVisitor {
            type Value = TimePeriod;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a time period string in H:MM:SS format")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<TimePeriod, E> {
                crate::fmt::parse_time_period(value)
                    .map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<TimePeriod, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(TimePeriodVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for TimePeriod {
    fn arbitrary(g: &mut quickcheck::Gen) -> TimePeriod {
        // Most interesting behavior happens within a few days, so keep the
        // totals small enough that sums never come close to the maximum.
        let total =
            i64::from(<u32 as quickcheck::Arbitrary>::arbitrary(g));
        TimePeriod::from_seconds_unchecked(total)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = TimePeriod>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&self.total_seconds())
                .filter(|&total| total >= 0)
                .map(TimePeriod::from_seconds_unchecked),
        )
    }
}
