//! Repair of mis-encoded export text
//!
//! Some exports write UTF-8 text escaped byte by byte, so after JSON decoding
//! every byte of a multi-byte character shows up as its own code point in the
//! U+0080..U+00FF range ("Ã©" instead of "é"). Reinterpreting each code point
//! as a Latin-1 byte and decoding the bytes as UTF-8 recovers the text.
//!
//! Whether an export needs this depends on the tool that produced it; text
//! that is already correct passes through unchanged.

use std::borrow::Cow;

/// Reverse the byte-escaping artifact described in the module docs.
///
/// Returns the input unchanged when it cannot be the artifact: a code point
/// above U+00FF, or a byte sequence that is not valid UTF-8.
pub fn decode_mis_encoded_text(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let mut bytes = Vec::with_capacity(s.len());
    for c in s.chars() {
        match u8::try_from(u32::from(c)) {
            Ok(b) => bytes.push(b),
            Err(_) => return Cow::Borrowed(s),
        }
    }

    match String::from_utf8(bytes) {
        Ok(decoded) => Cow::Owned(decoded),
        Err(_) => Cow::Borrowed(s),
    }
}
