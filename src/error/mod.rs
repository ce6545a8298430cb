use alloc::sync::Arc;

pub(crate) mod arithmetic;
pub(crate) mod fmt;
pub(crate) mod util;

/// An error that can occur in this crate.
///
/// There are three broad categories of errors, each with a corresponding
/// predicate:
///
/// * [`Error::is_range`] is true when a component value is outside of its
/// allowed bounds. For example, a `Time` with an hour of `25`.
/// * [`Error::is_invalid_format`] is true when a string could not be
/// parsed as a `Time` or a `TimePeriod` because of its shape, as opposed
/// to its values.
/// * [`Error::is_underflow`] is true when a subtraction would have produced
/// a negative result.
///
/// Note that exceeding `24:00:00` when adding to a [`Time`](crate::Time)
/// is never an error. That addition saturates instead.
///
/// # Design
///
/// This crate uses one error type for every fallible operation. Internally,
/// an error may carry a chain of causes. The `Display` implementation prints
/// the whole chain, from the most general context to the root cause, joined
/// by `: `. The predicates above always inspect the root cause.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cloneable and to keep its size
    /// equal to one word.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// Callers should generally use their own error types. But in some
    /// circumstances, it can be convenient to manufacture an error value
    /// from this crate specifically.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated as a result of a value being
    /// out of its allowed range.
    ///
    /// This includes numbers in a string that are too big to represent at
    /// all, and `TimePeriod` sums that exceed [`TimePeriod::MAX`].
    ///
    /// [`TimePeriod::MAX`]: crate::TimePeriod::MAX
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::{Time, TimePeriod};
    ///
    /// assert!(Time::new(25, 0, 0).unwrap_err().is_range());
    /// assert!("12:60:00".parse::<Time>().unwrap_err().is_range());
    /// assert!(TimePeriod::new(-1, 0, 0).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::ErrorKind::*;
        use self::util::ParseIntError;

        matches!(
            *self.root().kind(),
            Bounds(_) | ParseInt(ParseIntError::TooBig)
        )
    }

    /// Returns true when this error originated from a string that doesn't
    /// have the `H:MM:SS` shape.
    ///
    /// That is, the string has fewer than three colon separated segments, or
    /// one of its segments isn't made up entirely of ASCII digits.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::{Time, TimePeriod};
    ///
    /// assert!("12:30".parse::<Time>().unwrap_err().is_invalid_format());
    /// assert!("12:xx:00".parse::<Time>().unwrap_err().is_invalid_format());
    /// assert!("-1:00:00".parse::<TimePeriod>().unwrap_err().is_invalid_format());
    /// ```
    pub fn is_invalid_format(&self) -> bool {
        use self::ErrorKind::*;
        use self::util::ParseIntError;

        matches!(
            *self.root().kind(),
            Fmt(fmt::Error::MissingSegments { .. })
                | ParseInt(
                    ParseIntError::NoDigitsFound
                        | ParseIntError::InvalidDigit(_)
                )
        )
    }

    /// Returns true when this error originated from a subtraction whose
    /// result would have been negative.
    ///
    /// # Example
    ///
    /// ```
    /// use timelib::{time, TimePeriod};
    ///
    /// let err = time(1, 0, 0).checked_sub(time(2, 0, 0)).unwrap_err();
    /// assert!(err.is_underflow());
    ///
    /// let small = TimePeriod::new(0, 30, 0)?;
    /// let big = TimePeriod::new(1, 0, 0)?;
    /// assert!(small.checked_sub(big).unwrap_err().is_underflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_underflow(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Arithmetic(arithmetic::Error::Underflow { .. })
        )
    }
}

impl Error {
    /// Creates a new error from a bounds check failure.
    #[inline(never)]
    #[cold]
    pub(crate) fn bounds(err: crate::util::b::BoundsError) -> Error {
        Error::from(ErrorKind::Bounds(err))
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        // OK because we just created this error so the Arc
        // has one reference.
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        // OK because `Error::chain` is guaranteed to return a non-empty
        // iterator.
        self.chain().last().unwrap()
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f
                    .debug_struct("Error")
                    .field("kind", &"None")
                    .finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Clone, Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Arithmetic(self::arithmetic::Error),
    Bounds(crate::util::b::BoundsError),
    Fmt(self::fmt::Error),
    ParseInt(self::util::ParseIntError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Arithmetic(ref err) => err.fmt(f),
            Bounds(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            ParseInt(ref err) => err.fmt(f),
            Unknown => f.write_str("unknown timelib error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// A generic error message.
///
/// This supports the `Error::from_args` public API, which permits users of
/// this crate to manifest their own `Error` values from an arbitrary message.
#[derive(Clone)]
struct AdhocError {
    message: alloc::boxed::Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists to make `Error::context` work without needing public `From`
/// impls for every internal error enum.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| err.into_error().context(consequent))
    }
}
