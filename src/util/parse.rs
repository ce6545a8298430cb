use crate::error::util::ParseIntError;

/// Parses an `i64` number from the beginning to the end of the given slice of
/// ASCII digit characters.
///
/// No sign is recognized, so the number returned is never negative. Neither
/// is surrounding whitespace. An empty slice is an error.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn i64(bytes: &[u8]) -> Result<i64, ParseIntError> {
    if bytes.is_empty() {
        return Err(ParseIntError::NoDigitsFound);
    }
    let mut n: i64 = 0;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return Err(ParseIntError::InvalidDigit(byte));
        }
        let digit = i64::from(byte - b'0');
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit))
            .ok_or(ParseIntError::TooBig)?;
    }
    Ok(n)
}
