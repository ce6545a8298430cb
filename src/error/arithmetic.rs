use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    /// Both values are total numbers of seconds.
    Underflow { minuend: i64, subtrahend: i64 },
    FailedAddTimePeriod,
    FailedSubTime,
    FailedSubTimePeriod,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Arithmetic(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            Underflow { minuend, subtrahend } => write!(
                f,
                "subtracting {subtrahend} seconds from {minuend} seconds \
                 would result in a negative value",
            ),
            FailedAddTimePeriod => {
                f.write_str("failed to add time periods")
            }
            FailedSubTime => f.write_str("failed to subtract from time"),
            FailedSubTimePeriod => {
                f.write_str("failed to subtract time periods")
            }
        }
    }
}
