//! Conversion between text and bit strings, with sentinel terminated decoding.

use log::trace;

use crate::bits::{bits_to_char, char_to_bits, BITS_PER_CHAR};
use crate::result::Result;

/// An all zero byte, marks the end of a message.
pub const SENTINEL: &str = "00000000";

/// Concatenates the 8 bit strings of all characters of `text`.
///
/// ```rust
/// use stegamix_core::bitstream::message_to_bits;
///
/// assert_eq!(message_to_bits("").unwrap(), "");
/// assert_eq!(message_to_bits("A").unwrap(), "01000001");
/// ```
pub fn message_to_bits(text: &str) -> Result<String> {
    let mut bits = String::with_capacity(text.len() * BITS_PER_CHAR);
    for c in text.chars() {
        bits.push_str(&char_to_bits(c)?);
    }

    Ok(bits)
}

/// Splits `bits` into consecutive groups of 8 characters, a shorter remainder is dropped.
pub fn chunk8(bits: &str) -> Vec<&str> {
    let mut chunks = Vec::with_capacity(bits.len() / BITS_PER_CHAR);
    let mut start = 0;
    for (n, (i, c)) in bits.char_indices().enumerate() {
        if (n + 1) % BITS_PER_CHAR == 0 {
            let end = i + c.len_utf8();
            chunks.push(&bits[start..end]);
            start = end;
        }
    }

    chunks
}

/// Decodes `bits` byte by byte until the first all zero byte.
///
/// The sentinel itself is not part of the result, bits after it are ignored.
/// Without any sentinel everything up to the last complete byte is decoded.
pub fn bits_to_message(bits: &str) -> Result<String> {
    let mut message = String::new();
    for chunk in chunk8(bits) {
        if chunk == SENTINEL {
            trace!(
                "sentinel found after {} characters",
                message.chars().count()
            );
            return Ok(message);
        }
        message.push(bits_to_char(chunk)?);
    }

    Ok(message)
}
