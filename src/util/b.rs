/*!
Boundaries on the integer components of times and time periods.

Every bounded component is declared once in the `define_bounds!` table below.
Each entry gets a zero sized marker type with `check` and `parse` routines
that either return the value in its primitive representation or a
`BoundsError` naming the component and its allowed range.
*/

// Not every bound uses every generated routine.
#![allow(dead_code)]

use crate::Error;

macro_rules! define_bounds {
    ($((
        $name:ident,
        $ty:ty,
        $what:expr,
        $min:expr,
        $max:expr $(,)?
    )),* $(,)?) => {
        $(
            pub(crate) struct $name(());

            impl Bounds for $name {
                const WHAT: &'static str = $what;
                const MIN: Self::Primitive = $min;
                const MAX: Self::Primitive = $max;
                type Primitive = $ty;

                #[cold]
                fn error() -> BoundsError {
                    BoundsError::$name(RawBoundsError::new())
                }
            }

            impl $name {
                #[cfg_attr(feature = "perf-inline", inline(always))]
                pub(crate) fn check(
                    n: impl Into<i64>,
                ) -> Result<$ty, BoundsError> {
                    <$name as Bounds>::check(n)
                }

                #[cfg_attr(feature = "perf-inline", inline(always))]
                pub(crate) fn parse(bytes: &[u8]) -> Result<$ty, Error> {
                    <$name as Bounds>::parse(bytes)
                }

                /// Like `check`, but usable in a `const` context.
                pub(crate) const fn contains(n: $ty) -> bool {
                    $min <= n && n <= $max
                }
            }
        )*

        /// An error that indicates a value is out of its intended range.
        #[derive(Clone, Debug)]
        pub(crate) enum BoundsError {
            $($name(RawBoundsError<$name>),)*
        }

        impl core::fmt::Display for BoundsError {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match *self {
                    $(BoundsError::$name(ref err) => err.fmt(f),)*
                }
            }
        }
    }
}

define_bounds! {
    // `24` is allowed so that `24:00:00` can act as the end of a day. Note
    // that `24:30:00` passes these checks too. Only arithmetic guarantees
    // that an hour of `24` comes with zero minutes and seconds.
    (Hour, i8, "hour", 0, 24),
    (Minute, i8, "minute", 0, 59),
    (Second, i8, "second", 0, 59),
    // The largest hour value whose period, with 59 minutes and 59 seconds
    // tacked on, still fits into an `i64` number of seconds.
    (PeriodHours, i64, "time period hours", 0, 2_562_047_788_015_214),
    (
        PeriodSeconds,
        i64,
        "time period total seconds",
        0,
        (PeriodHours::MAX * SECONDS_PER_HOUR)
        + (Minute::MAX as i64 * SECONDS_PER_MINUTE)
        + Second::MAX as i64,
    ),
    (DaySeconds, i32, "time total seconds", 0, SECONDS_PER_DAY as i32),
}

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// An interface for defining boundaries on integer values.
pub(crate) trait Bounds: Sized {
    /// A short human readable description of the values represented by these
    /// bounds.
    const WHAT: &'static str;

    /// The minimum boundary value.
    const MIN: Self::Primitive;

    /// The maximum boundary value.
    const MAX: Self::Primitive;

    /// The primitive integer representation for this boundary type.
    ///
    /// This is the smallest primitive integer type that fits the minimum and
    /// maximum allowed values.
    type Primitive: Primitive;

    /// Create an error when a value is outside the bounds for this type.
    fn error() -> BoundsError;

    /// Converts the 64-bit integer provided into the primitive representation
    /// of these bounds.
    ///
    /// # Errors
    ///
    /// This returns an error if the given integer does not fit in the bounds
    /// prescribed by this trait implementation.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn check(n: impl Into<i64>) -> Result<Self::Primitive, BoundsError> {
        let n = n.into();
        if !(Self::MIN.as_i64() <= n && n <= Self::MAX.as_i64()) {
            return Err(Self::error());
        }
        Ok(Self::Primitive::from_i64(n))
    }

    /// Parses a non-negative integer from the beginning to the end of the
    /// given slice of bytes and checks it against these bounds.
    ///
    /// # Errors
    ///
    /// If the given slice is not a valid integer (i.e., it's empty, overflows
    /// or contains anything other than `[0-9]`) or is not in the bounds for
    /// this trait implementation, then an error is returned.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn parse(bytes: &[u8]) -> Result<Self::Primitive, Error> {
        Ok(Self::check(crate::util::parse::i64(bytes)?)?)
    }
}

/// A simple trait for making `int as int` usable in a generic context.
///
/// All of these methods require callers to ensure the cast is correct.
pub(crate) trait Primitive:
    Clone + Copy + core::fmt::Debug + core::fmt::Display
{
    fn as_i64(self) -> i64;
    fn from_i64(n: i64) -> Self;
}

macro_rules! impl_primitive {
    ($($intty:ty),*) => {
        $(
            impl Primitive for $intty {
                fn as_i64(self) -> i64 { self as i64 }
                fn from_i64(n: i64) -> Self { n as $intty }
            }
        )*
    }
}

impl_primitive!(i8, i32, i64);

impl From<BoundsError> for Error {
    fn from(err: BoundsError) -> Error {
        Error::bounds(err)
    }
}

impl crate::error::IntoError for BoundsError {
    fn into_error(self) -> Error {
        self.into()
    }
}

pub(crate) struct RawBoundsError<B>(core::marker::PhantomData<B>);

impl<B> RawBoundsError<B> {
    const fn new() -> RawBoundsError<B> {
        RawBoundsError(core::marker::PhantomData)
    }
}

impl<B> Clone for RawBoundsError<B> {
    fn clone(&self) -> RawBoundsError<B> {
        RawBoundsError::new()
    }
}

impl<B, P> core::fmt::Debug for RawBoundsError<B>
where
    B: Bounds<Primitive = P>,
    P: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("RawBoundsError")
            .field("what", &B::WHAT)
            .field("min", &B::MIN)
            .field("max", &B::MAX)
            .finish()
    }
}

impl<B, P> core::fmt::Display for RawBoundsError<B>
where
    B: Bounds<Primitive = P>,
    P: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "parameter '{what}' is not in the required range of {min}..={max}",
            what = B::WHAT,
            min = B::MIN,
            max = B::MAX,
        )
    }
}
