/*!
Routines for showing untrusted input bytes inside error messages.
*/

/// Displays a single byte as ASCII, falling back to an escape sequence.
///
/// Hex escapes are capitalized, e.g., `\xFF`.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0 == b' ' {
            return f.write_str(" ");
        }
        if !self.0.is_ascii() {
            return write!(f, r"\x{:02X}", self.0);
        }
        for ch in core::ascii::escape_default(self.0) {
            write!(f, "{}", char::from(ch))?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
