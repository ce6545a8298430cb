use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    MissingSegments { found: usize },
    ParseHour,
    ParseHours,
    ParseMinute,
    ParseMinutes,
    ParseSecond,
    ParseSeconds,
    ParseTime,
    ParseTimePeriod,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
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
            MissingSegments { found } => write!(
                f,
                "expected at least 3 colon separated segments, \
                 but found {found}",
            ),
            ParseHour => f.write_str("failed to parse hour"),
            ParseHours => f.write_str("failed to parse hours"),
            ParseMinute => f.write_str("failed to parse minute"),
            ParseMinutes => f.write_str("failed to parse minutes"),
            ParseSecond => f.write_str("failed to parse second"),
            ParseSeconds => f.write_str("failed to parse seconds"),
            ParseTime => f.write_str("failed to parse time in HH:MM:SS format"),
            ParseTimePeriod => {
                f.write_str("failed to parse time period in H:MM:SS format")
            }
        }
    }
}
