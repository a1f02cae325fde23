//! Single bit primitives on channel values and the 8 bit text form of characters.
//!
//! Bit positions count from the least significant bit, so position `0` is the LSB.
//! Bit strings are written most significant bit first, e.g. `'A'` is `"01000001"`.

use crate::error::StegamixError;
use crate::result::Result;

/// Number of bits a single character occupies in a bit string.
pub const BITS_PER_CHAR: usize = 8;

/// Converts a character into its 8 bit string, MSB first.
///
/// Fails for characters whose code point does not fit into a byte.
///
/// ```rust
/// use stegamix_core::bits::char_to_bits;
///
/// assert_eq!(char_to_bits('A').unwrap(), "01000001");
/// ```
pub fn char_to_bits(c: char) -> Result<String> {
    let code = u8::try_from(c).map_err(|_| StegamixError::NonAsciiCharacter(c))?;

    Ok((0..BITS_PER_CHAR as u8)
        .rev()
        .map(|position| get_bit(code, position))
        .collect())
}

/// Parses a string of `0` and `1` as a base 2 number and returns the character with that code.
///
/// ```rust
/// use stegamix_core::bits::bits_to_char;
///
/// assert_eq!(bits_to_char("01000001").unwrap(), 'A');
/// ```
pub fn bits_to_char(bits: &str) -> Result<char> {
    if bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(StegamixError::MalformedBits(bits.to_string()));
    }

    u32::from_str_radix(bits, 2)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| StegamixError::MalformedBits(bits.to_string()))
}

/// Returns the bit at `position` of `n` as `'0'` or `'1'`.
///
/// Positions beyond the width of a byte read as `'0'`.
#[inline]
pub fn get_bit(n: u8, position: u8) -> char {
    match n.checked_shr(position as u32).map_or(0, |v| v & 1) {
        0 => '0',
        _ => '1',
    }
}

/// Forces the bit at `position` to 1.
#[inline]
pub fn set_bit_on(n: u8, position: u8) -> u8 {
    n | 1u8.checked_shl(position as u32).unwrap_or(0)
}

/// Forces the bit at `position` to 0.
#[inline]
pub fn set_bit_off(n: u8, position: u8) -> u8 {
    n & !1u8.checked_shl(position as u32).unwrap_or(0)
}

/// Forces the bit at `position` to `bit`, all other bits stay as they are.
///
/// Only `'1'` sets the bit, any other value clears it. That way the `'0'` padding
/// handed out by [`codebit`] clears bits just like a real `'0'` does.
#[inline]
pub fn set_bit(n: u8, bit: char, position: u8) -> u8 {
    if bit == '1' {
        set_bit_on(n, position)
    } else {
        set_bit_off(n, position)
    }
}

/// Bounds tolerant access to a bit string.
///
/// Returns the bit at index `i`, or `'0'` once `i` runs past the end of `bits`.
/// Every embedder relies on this to pad the carrier with zeros after the payload,
/// which in turn produces the terminating sentinel byte.
#[inline]
pub fn codebit(i: usize, bits: &str) -> char {
    bits.as_bytes().get(i).map_or('0', |&b| char::from(b))
}
