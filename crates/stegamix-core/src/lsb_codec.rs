//! Hides ASCII text in the lowest bit planes of every color channel.
//!
//! Bits are written row by row, pixel by pixel, channel by channel. Within one
//! channel value bit plane 0 is filled first, up to bit plane `bit_depth - 1`.
//! Once the message is exhausted every remaining slot is set to 0, which leaves
//! an all zero byte behind the message that marks its end on decoding.
//!
//! # Capacity
//!
//! A carrier holds `pixels * 3 * bit_depth` bits. Encoding never fails because a
//! message is too long: it stores as much as fits and logs a warning. When the
//! message plus its 8 bit terminator does not fit, no terminator gets written and
//! decoding returns the truncated message, possibly followed by characters made
//! of partial message bits. Callers that need a guarantee use [`check_capacity`]
//! before encoding.

use log::{debug, warn};

use crate::bits::{codebit, get_bit, set_bit, BITS_PER_CHAR};
use crate::bitstream::{bits_to_message, message_to_bits};
use crate::error::StegamixError;
use crate::media::Image;
use crate::result::Result;

pub const MIN_BIT_DEPTH: u8 = 1;
pub const MAX_BIT_DEPTH: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Number of low order bit planes of each color channel that carry the message.
    /// Must be between 1 and 8, higher values trade image quality for capacity.
    pub bit_depth: u8,
}

impl Default for CodecOptions {
    /// The classic single least significant bit
    fn default() -> Self {
        Self {
            bit_depth: MIN_BIT_DEPTH,
        }
    }
}

impl CodecOptions {
    pub fn with_bit_depth(bit_depth: u8) -> Result<Self> {
        Ok(Self {
            bit_depth: validate_bit_depth(bit_depth)?,
        })
    }

    pub fn get_bit_depth(&self) -> u8 {
        self.bit_depth
    }
}

fn validate_bit_depth(bit_depth: u8) -> Result<u8> {
    if (MIN_BIT_DEPTH..=MAX_BIT_DEPTH).contains(&bit_depth) {
        Ok(bit_depth)
    } else {
        Err(StegamixError::InvalidBitDepth(bit_depth))
    }
}

/// Entry point for the codec, bound to a set of [`CodecOptions`]
pub struct LsbCodec;

impl LsbCodec {
    /// Returns a new image with `message` spread over the low bit planes of `carrier`.
    pub fn encode(carrier: &Image, message: &str, opts: &CodecOptions) -> Result<Image> {
        let bit_depth = validate_bit_depth(opts.bit_depth)?;
        let payload = message_to_bits(message)?;
        let available = carrier.bit_capacity(bit_depth as usize);
        let required = payload.len() + BITS_PER_CHAR;
        if required > available {
            warn!(
                "message needs {required} bits but the carrier holds {available} bits, it will be truncated"
            );
        }
        debug!(
            "encoding {} characters at bit depth {bit_depth}",
            message.chars().count()
        );

        let mut i = 0;
        Ok(carrier.map_channels(|value| {
            (0..bit_depth).fold(value, |value, position| {
                let value = set_bit(value, codebit(i, &payload), position);
                i += 1;
                value
            })
        }))
    }

    /// Reads the low bit planes of `carrier` back into text, up to the first all zero byte.
    pub fn decode(carrier: &Image, opts: &CodecOptions) -> Result<String> {
        let bit_depth = validate_bit_depth(opts.bit_depth)?;
        let mut bits = String::with_capacity(carrier.bit_capacity(bit_depth as usize));
        for value in carrier.channel_values() {
            for position in 0..bit_depth {
                bits.push(get_bit(value, position));
            }
        }

        bits_to_message(&bits)
    }
}

/// Hides `message` in `carrier` using `bit_depth` bit planes per channel.
///
/// ```rust
/// use stegamix_core::lsb_codec::{decode, encode};
/// use stegamix_core::media::Image;
///
/// let carrier = Image::from(vec![vec![[255, 255, 255]; 8]; 8]);
/// let secret = encode(&carrier, "hi", 1).unwrap();
/// assert_eq!(decode(&secret, 1).unwrap(), "hi");
/// ```
pub fn encode(carrier: &Image, message: &str, bit_depth: u8) -> Result<Image> {
    LsbCodec::encode(carrier, message, &CodecOptions::with_bit_depth(bit_depth)?)
}

/// Unveils a message previously hidden with the same `bit_depth`.
pub fn decode(carrier: &Image, bit_depth: u8) -> Result<String> {
    LsbCodec::decode(carrier, &CodecOptions::with_bit_depth(bit_depth)?)
}

/// Number of bits `carrier` can hold at `bit_depth`, the terminating byte included.
pub fn capacity(carrier: &Image, bit_depth: u8) -> Result<usize> {
    Ok(carrier.bit_capacity(validate_bit_depth(bit_depth)? as usize))
}

/// Fails with [`StegamixError::CapacityExceeded`] if `message` and its terminating byte
/// do not fit into `carrier` at `bit_depth`.
pub fn check_capacity(carrier: &Image, message: &str, bit_depth: u8) -> Result<()> {
    let available = capacity(carrier, bit_depth)?;
    let required = message_to_bits(message)?.len() + BITS_PER_CHAR;
    if required > available {
        return Err(StegamixError::CapacityExceeded {
            required,
            available,
        });
    }

    Ok(())
}
