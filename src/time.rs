use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{
    error::{arithmetic::Error as E, Error, ErrorContext},
    util::{
        b::{self, Bounds},
        hms,
    },
    TimePeriod,
};

/// A representation of "wall clock" time within a single day.
///
/// Conceptually, a `Time` value corresponds to the hours, minutes and seconds
/// that you might see on a clock. Its range is `00:00:00` ([`Time::MIN`])
/// through `24:00:00` ([`Time::MAX`]), inclusive. That is, the very end of a
/// day is representable as a distinct value from the start of the next one.
///
/// There are no time zones and no fractional seconds.
///
/// # Construction
///
/// [`Time::new`] checks each component on its own: the hour must be in
/// `0..=24` and both the minute and second must be in `0..=59`. Notably, this
/// means a value like `24:30:00` can be constructed directly. Arithmetic
/// never produces such a value though.
///
/// ```
/// use timelib::Time;
///
/// let t = Time::new(13, 20, 1)?;
/// assert_eq!(t.to_string(), "13:20:01");
/// assert!(Time::new(25, 0, 0).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Parsing and printing
///
/// The `Display` trait implementation prints `HH:MM:SS`, with every
/// component padded to two digits. The `FromStr` trait implementation parses
/// the same format:
///
/// ```
/// use timelib::Time;
///
/// let t: Time = "07:05:09".parse()?;
/// assert_eq!((t.hour(), t.minute(), t.second()), (7, 5, 9));
/// assert_eq!(t.to_string(), "07:05:09");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// The string must have at least three colon separated segments, each made
/// up only of ASCII digits. Any segments after the third are ignored.
///
/// # Comparisons
///
/// The `Time` type provides both `Eq` and `Ord` trait implementations. Times
/// are ordered by hour, then minute, then second.
///
/// ```
/// use timelib::time;
///
/// assert!(time(7, 30, 1) < time(8, 10, 0));
/// assert_eq!(time(8, 10, 0), time(8, 10, 0));
/// ```
///
/// # Arithmetic
///
/// Both other `Time` values and [`TimePeriod`] values can be added to or
/// subtracted from a `Time`:
///
/// * [`Time::saturating_add`] never fails. If the sum would go past
/// `24:00:00`, then the result is `24:00:00`.
/// * [`Time::checked_sub`] returns an error if the result would be before
/// `00:00:00`.
///
/// The `Add` and `Sub` trait implementations use the same semantics, except
/// that subtraction panics instead of returning an error.
///
/// ```
/// use timelib::{time, TimePeriod};
///
/// assert_eq!(time(13, 59, 55) + time(1, 15, 10), time(15, 15, 5));
/// assert_eq!(time(20, 0, 0) + time(5, 0, 0), time(24, 0, 0));
///
/// let period = TimePeriod::new(10, 15, 10)?;
/// assert_eq!(time(13, 10, 5) - period, time(2, 54, 55));
/// assert!(time(1, 0, 0).checked_sub(period).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Time {
    hour: i8,
    minute: i8,
    second: i8,
}

impl Time {
    /// The minimum representable time value.
    ///
    /// This corresponds to `00:00:00`.
    pub const MIN: Time = Time::midnight();

    /// The maximum time value produced by arithmetic.
    ///
    /// This corresponds to `24:00:00`.
    pub const MAX: Time = Time::constant(24, 0, 0);

    /// Creates a new `Time` value from its component hour, minute and second
    /// values.
    ///
    /// # Errors
    ///
    /// This returns an error unless *all* of the following conditions are
    /// true:
    ///
    /// * `0 <= hour <= 24`
    /// * `0 <= minute <= 59`
    /// * `0 <= second <= 59`
    ///
    /// Note that the components are checked independently. So `24:59:59` is
    /// accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::Time;
    ///
    /// let t = Time::new(21, 30, 5)?;
    /// assert_eq!(t.hour(), 21);
    /// assert_eq!(t.minute(), 30);
    /// assert_eq!(t.second(), 5);
    ///
    /// assert!(Time::new(21, 30, 60).is_err());
    /// assert!(Time::new(21, -1, 0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(hour: i8, minute: i8, second: i8) -> Result<Time, Error> {
        let hour = b::Hour::check(hour)?;
        let minute = b::Minute::check(minute)?;
        let second = b::Second::check(second)?;
        Ok(Time::new_unchecked(hour, minute, second))
    }

    /// Creates a new `Time` value in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics if the given values do not satisfy the same conditions
    /// checked by [`Time::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::Time;
    ///
    /// const BEDTIME: Time = Time::constant(21, 30, 5);
    /// assert_eq!(BEDTIME.to_string(), "21:30:05");
    /// ```
    #[inline]
    pub const fn constant(hour: i8, minute: i8, second: i8) -> Time {
        if !b::Hour::contains(hour) {
            panic!("invalid hour");
        }
        if !b::Minute::contains(minute) {
            panic!("invalid minute");
        }
        if !b::Second::contains(second) {
            panic!("invalid second");
        }
        Time { hour, minute, second }
    }

    /// Returns the first moment of time in a day.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::Time;
    ///
    /// assert_eq!(Time::midnight().to_string(), "00:00:00");
    /// assert_eq!(Time::midnight(), Time::default());
    /// ```
    #[inline]
    pub const fn midnight() -> Time {
        Time::constant(0, 0, 0)
    }

    /// Return a new `Time` value with the hour component set to the given
    /// value.
    ///
    /// # Errors
    ///
    /// This returns an error if the given hour is outside the range `0..=24`.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::time;
    ///
    /// let t = time(15, 21, 59).with_hour(3)?;
    /// assert_eq!(t, time(3, 21, 59));
    /// assert!(t.with_hour(25).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn with_hour(self, hour: i8) -> Result<Time, Error> {
        let hour = b::Hour::check(hour)?;
        Ok(Time { hour, ..self })
    }

    /// Return a new `Time` value with the minute component set to the given
    /// value.
    ///
    /// # Errors
    ///
    /// This returns an error if the given minute is outside the range
    /// `0..=59`.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::time;
    ///
    /// let t = time(15, 21, 59).with_minute(3)?;
    /// assert_eq!(t, time(15, 3, 59));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn with_minute(self, minute: i8) -> Result<Time, Error> {
        let minute = b::Minute::check(minute)?;
        Ok(Time { minute, ..self })
    }

    /// Return a new `Time` value with the second component set to the given
    /// value.
    ///
    /// # Errors
    ///
    /// This returns an error if the given second is outside the range
    /// `0..=59`.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::time;
    ///
    /// let t = time(15, 21, 59).with_second(3)?;
    /// assert_eq!(t, time(15, 21, 3));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn with_second(self, second: i8) -> Result<Time, Error> {
        let second = b::Second::check(second)?;
        Ok(Time { second, ..self })
    }

    /// Returns the "hour" component of this time.
    ///
    /// The value returned is guaranteed to be in the range `0..=24`.
    #[inline]
    pub fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the "minute" component of this time.
    ///
    /// The value returned is guaranteed to be in the range `0..=59`.
    #[inline]
    pub fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the "second" component of this time.
    ///
    /// The value returned is guaranteed to be in the range `0..=59`.
    #[inline]
    pub fn second(self) -> i8 {
        self.second
    }

    /// Returns the number of seconds elapsed since `00:00:00`.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::time;
    ///
    /// assert_eq!(time(0, 0, 0).total_seconds(), 0);
    /// assert_eq!(time(1, 1, 1).total_seconds(), 3661);
    /// assert_eq!(time(24, 0, 0).total_seconds(), 86_400);
    /// ```
    #[inline]
    pub fn total_seconds(self) -> i32 {
        // OK because the biggest possible value, 24:59:59, is 89,999.
        self.to_seconds() as i32
    }

    /// Add the given time or time period to this time, saturating at
    /// `24:00:00`.
    ///
    /// This accepts anything that implements `Into<TimeArithmetic>`. There
    /// are implementations for [`Time`] and [`TimePeriod`]. Either way, the
    /// given value is treated as a number of seconds to add.
    ///
    /// This never wraps around to the next day. If the sum exceeds
    /// `24:00:00`, then [`Time::MAX`] is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::{time, Time, TimePeriod};
    ///
    /// let t = time(13, 59, 55);
    /// assert_eq!(t.saturating_add(time(1, 15, 10)), time(15, 15, 5));
    ///
    /// let period = TimePeriod::new(1, 15, 10)?;
    /// assert_eq!(t.saturating_add(period), time(15, 15, 5));
    ///
    /// // Hitting the end of the day exactly is fine.
    /// assert_eq!(time(23, 0, 0).saturating_add(time(1, 0, 0)), Time::MAX);
    /// // But anything beyond it is clamped.
    /// let long = TimePeriod::new(1_000, 0, 0)?;
    /// assert_eq!(t.saturating_add(long), Time::MAX);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn saturating_add<A: Into<TimeArithmetic>>(self, other: A) -> Time {
        let other: TimeArithmetic = other.into();
        let sum = hms::saturating_add(
            self.to_seconds(),
            other.seconds,
            i64::from(b::DaySeconds::MAX),
        );
        Time::from_seconds(sum)
    }

    /// Subtract the given time or time period from this time.
    ///
    /// This accepts anything that implements `Into<TimeArithmetic>`. There
    /// are implementations for [`Time`] and [`TimePeriod`].
    ///
    /// # Errors
    ///
    /// This returns an error if the value being subtracted is bigger than
    /// this time. That is, if the result would be before `00:00:00`. The
    /// result is never clamped to `00:00:00`.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::{time, TimePeriod};
    ///
    /// let t = time(13, 12, 2);
    /// assert_eq!(t.checked_sub(time(1, 15, 10))?, time(11, 56, 52));
    ///
    /// let period = TimePeriod::new(10, 15, 10)?;
    /// assert_eq!(time(13, 10, 5).checked_sub(period)?, time(2, 54, 55));
    ///
    /// let err = time(1, 0, 0).checked_sub(time(1, 0, 1)).unwrap_err();
    /// assert!(err.is_underflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn checked_sub<A: Into<TimeArithmetic>>(
        self,
        other: A,
    ) -> Result<Time, Error> {
        let other: TimeArithmetic = other.into();
        let diff = hms::checked_sub(self.to_seconds(), other.seconds)
            .context(E::FailedSubTime)?;
        Ok(Time::from_seconds(diff))
    }
}

/// Crate internal APIs.
impl Time {
    /// Creates a time from components that have already been checked.
    #[inline]
    pub(crate) fn new_unchecked(hour: i8, minute: i8, second: i8) -> Time {
        debug_assert!(b::Hour::contains(hour));
        debug_assert!(b::Minute::contains(minute));
        debug_assert!(b::Second::contains(second));
        Time { hour, minute, second }
    }

    #[inline]
    pub(crate) fn to_seconds(self) -> i64 {
        hms::to_seconds(i64::from(self.hour), self.minute, self.second)
    }

    /// Converts a number of seconds since `00:00:00` back into a time.
    ///
    /// The total given must be the result of `saturating_add` or
    /// `checked_sub`, which means it can never exceed `24:59:59`.
    #[inline]
    fn from_seconds(total: i64) -> Time {
        let (hour, minute, second) = hms::from_seconds(total);
        // OK because callers guarantee hour <= 24.
        Time::new_unchecked(hour as i8, minute, second)
    }
}

impl Default for Time {
    fn default() -> Time {
        Time::midnight()
    }
}

impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl core::fmt::Debug for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::str::FromStr for Time {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<Time, Error> {
        crate::fmt::parse_time(string.as_bytes())
    }
}

/// Adds a time, saturating at `24:00:00`.
impl Add for Time {
    type Output = Time;

    #[inline]
    fn add(self, rhs: Time) -> Time {
        self.saturating_add(rhs)
    }
}

/// Adds a time in place, saturating at `24:00:00`.
impl AddAssign for Time {
    #[inline]
    fn add_assign(&mut self, rhs: Time) {
        *self = self.add(rhs);
    }
}

/// Adds a time period, saturating at `24:00:00`.
impl Add<TimePeriod> for Time {
    type Output = Time;

    #[inline]
    fn add(self, rhs: TimePeriod) -> Time {
        self.saturating_add(rhs)
    }
}

/// Adds a time period in place, saturating at `24:00:00`.
impl AddAssign<TimePeriod> for Time {
    #[inline]
    fn add_assign(&mut self, rhs: TimePeriod) {
        *self = self.add(rhs);
    }
}

/// Subtracts a time.
///
/// This panics if the result would be negative. For checked arithmetic, see
/// [`Time::checked_sub`].
impl Sub for Time {
    type Output = Time;

    #[inline]
    fn sub(self, rhs: Time) -> Time {
        self.checked_sub(rhs).expect("subtracting time from time underflowed")
    }
}

/// Subtracts a time in place.
///
/// This panics if the result would be negative. For checked arithmetic, see
/// [`Time::checked_sub`].
impl SubAssign for Time {
    #[inline]
    fn sub_assign(&mut self, rhs: Time) {
        *self = self.sub(rhs);
    }
}

/// Subtracts a time period.
///
/// This panics if the result would be negative. For checked arithmetic, see
/// [`Time::checked_sub`].
impl Sub<TimePeriod> for Time {
    type Output = Time;

    #[inline]
    fn sub(self, rhs: TimePeriod) -> Time {
        self.checked_sub(rhs)
            .expect("subtracting time period from time underflowed")
    }
}

/// Subtracts a time period in place.
///
/// This panics if the result would be negative. For checked arithmetic, see
/// [`Time::checked_sub`].
impl SubAssign<TimePeriod> for Time {
    #[inline]
    fn sub_assign(&mut self, rhs: TimePeriod) {
        *self = self.sub(rhs);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Time {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Time {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Time, D::Error> {
        use serde::de;

        struct TimeVisitor;

        impl<'de> de::Visitor<'de> for TimeVisitor {
            type Value = Time;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a time string in HH:MM:SS format")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Time, E> {
                crate::fmt::parse_time(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Time, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Time {
    fn arbitrary(g: &mut quickcheck::Gen) -> Time {
        // Each field is drawn on its own, so values past `24:00:00` (like
        // `24:30:00`) show up too.
        let hour = <i8 as quickcheck::Arbitrary>::arbitrary(g).rem_euclid(25);
        let minute =
            <i8 as quickcheck::Arbitrary>::arbitrary(g).rem_euclid(60);
        let second =
            <i8 as quickcheck::Arbitrary>::arbitrary(g).rem_euclid(60);
        Time::new_unchecked(hour, minute, second)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Time>> {
        let fields = (self.hour, self.minute, self.second);
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&fields)
                .filter_map(|(h, m, s)| Time::new(h, m, s).ok()),
        )
    }
}

/// Creates a new `Time` value in a `const` context.
///
/// This is a convenience free function for [`Time::constant`]. It is intended
/// to provide a terse syntax for constructing `Time` values from parameters
/// that are known to be valid.
///
/// # Panics
///
/// This panics if the given values do not correspond to a valid `Time`. All
/// of the following conditions must be true:
///
/// * `0 <= hour <= 24`
/// * `0 <= minute <= 59`
/// * `0 <= second <= 59`
///
/// # Example
///
/// ```
/// use timelib::time;
///
/// let t = time(23, 59, 59);
/// assert_eq!(t.to_string(), "23:59:59");
/// ```
#[inline]
pub const fn time(hour: i8, minute: i8, second: i8) -> Time {
    Time::constant(hour, minute, second)
}

/// The operand of [`Time::saturating_add`] and [`Time::checked_sub`].
///
/// This type provides a way to add or subtract either a [`Time`] or a
/// [`TimePeriod`] through a single API. Callers never need to construct it
/// explicitly. Both conversions simply compute the total number of seconds
/// in the value given.
///
/// # Example
///
/// ```
/// use timelib::{time, TimePeriod};
///
/// let t = time(12, 0, 0);
/// assert_eq!(t.saturating_add(time(0, 30, 0)), time(12, 30, 0));
/// assert_eq!(
///     t.saturating_add(TimePeriod::new(0, 30, 0)?),
///     time(12, 30, 0),
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TimeArithmetic {
    seconds: i64,
}

impl From<Time> for TimeArithmetic {
    fn from(time: Time) -> TimeArithmetic {
        TimeArithmetic { seconds: time.to_seconds() }
    }
}

impl From<TimePeriod> for TimeArithmetic {
    fn from(period: TimePeriod) -> TimeArithmetic {
        TimeArithmetic { seconds: period.total_seconds() }
    }
}

impl<'a> From<&'a Time> for TimeArithmetic {
    fn from(time: &'a Time) -> TimeArithmetic {
        TimeArithmetic::from(*time)
    }
}

impl<'a> From<&'a TimePeriod> for TimeArithmetic {
    fn from(period: &'a TimePeriod) -> TimeArithmetic {
        TimeArithmetic::from(*period)
    }
}
