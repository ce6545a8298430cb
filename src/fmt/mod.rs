/*!
Parsing of the colon separated `H:MM:SS` representation shared by [`Time`]
and [`TimePeriod`].

Printing lives in each type's `Display` impl, since it's just a matter of
zero padding. Parsing is more involved, and both types agree on it:

* The input is split on `:`. There must be at least three segments. Any
segments after the third are ignored.
* Each of the first three segments must be one or more ASCII digits. No
sign, no whitespace.
* Each number is then checked against the bounds of the type being parsed.

[`Time`]: crate::Time
[`TimePeriod`]: crate::TimePeriod
*/

use crate::{
    error::{fmt::Error as E, ErrorContext},
    util::b,
    Error, Time, TimePeriod,
};

/// Parses a `Time` from `HH:MM:SS`.
pub(crate) fn parse_time(input: &[u8]) -> Result<Time, Error> {
    parse_time_impl(input).context(E::ParseTime)
}

fn parse_time_impl(input: &[u8]) -> Result<Time, Error> {
    let segments = Segments::split(input)?;
    let hour = b::Hour::parse(segments.hours).context(E::ParseHour)?;
    let minute = b::Minute::parse(segments.minutes).context(E::ParseMinute)?;
    let second = b::Second::parse(segments.seconds).context(E::ParseSecond)?;
    Ok(Time::new_unchecked(hour, minute, second))
}

/// Parses a `TimePeriod` from `H:MM:SS`.
pub(crate) fn parse_time_period(input: &[u8]) -> Result<TimePeriod, Error> {
    parse_time_period_impl(input).context(E::ParseTimePeriod)
}

fn parse_time_period_impl(input: &[u8]) -> Result<TimePeriod, Error> {
    let segments = Segments::split(input)?;
    let hours = b::PeriodHours::parse(segments.hours).context(E::ParseHours)?;
    let minutes =
        b::Minute::parse(segments.minutes).context(E::ParseMinutes)?;
    let seconds =
        b::Second::parse(segments.seconds).context(E::ParseSeconds)?;
    Ok(TimePeriod::new_unchecked(hours, minutes, seconds))
}

/// The first three colon separated segments of an input.
#[derive(Debug)]
struct Segments<'i> {
    hours: &'i [u8],
    minutes: &'i [u8],
    seconds: &'i [u8],
}

impl<'i> Segments<'i> {
    fn split(input: &'i [u8]) -> Result<Segments<'i>, Error> {
        let mut it = input.split(|&byte| byte == b':');
        let (Some(hours), Some(minutes), Some(seconds)) =
            (it.next(), it.next(), it.next())
        else {
            let found = input.split(|&byte| byte == b':').count();
            return Err(Error::from(E::MissingSegments { found }));
        };
        Ok(Segments { hours, minutes, seconds })
    }
}
