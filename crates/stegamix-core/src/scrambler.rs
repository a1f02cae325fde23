//! Reversible scrambling of images.
//!
//! Every row gets its own index hidden in bit plane 0, then the rows are shuffled.
//! The same happens to the columns with bit plane 1. Finally the upper six bits of
//! every channel value run through [`transform`], which leaves the two tag planes
//! alone. Unscrambling undoes the transform, reads the tags and puts every column,
//! then every row, back to where its tag says it belongs.
//!
//! The tags travel inside the image itself, no key or side file is needed. The
//! random generator only decides how the lines get shuffled, so any generator
//! state produces an image that unscrambles to the original.
//!
//! The tags replace whatever bit planes 0 and 1 held before. An unscrambled image
//! therefore equals [`tag_image`] of the original: upper six bits untouched, the
//! row index in plane 0 and the column index in plane 1. Images already in that
//! form, like any unscrambled image, come back bit for bit.
//!
//! A row offers `width * 3` bits in bit plane 0 and needs at least
//! `8 * (digits of the largest row index + 1)` of them. A column offers
//! `height * 3` bits in plane 1 and needs the same for the largest column index.
//! Images too narrow or too flat for that still scramble, but may not unscramble;
//! see [`tag_capacity_ok`].

use fastrand::Rng;
use log::{debug, warn};

use crate::bits::{codebit, get_bit, set_bit, BITS_PER_CHAR};
use crate::bitstream::{bits_to_message, message_to_bits};
use crate::error::StegamixError;
use crate::media::{Image, Row, CHANNELS};
use crate::result::Result;

/// bit plane holding the original row index
pub const ROW_TAG_PLANE: u8 = 0;

/// bit plane holding the original column index
pub const COLUMN_TAG_PLANE: u8 = 1;

/// applying [`transform`] this many times yields the identity
pub const TRANSFORM_ORDER: usize = 6;

const TAG_MASK: u8 = 0b0000_0011;
const FIELD_MASK: u8 = 0b0011_1111;
const HIGHEST_BIT_PLANE: u8 = 7;

/// Obfuscates the six bits above the tag planes of a channel value.
///
/// The six bit field is complemented and then rotated right by two. The two tag
/// bits stay where they are. Complement and rotation commute and the rotation has
/// order three on six bits, hence the transform has order [`TRANSFORM_ORDER`] and
/// five more applications invert it.
#[inline]
pub fn transform(value: u8) -> u8 {
    let field = !(value >> 2) & FIELD_MASK;
    let rotated = ((field >> 2) | (field << 4)) & FIELD_MASK;

    (rotated << 2) | (value & TAG_MASK)
}

/// Applies [`transform`] `times` times in a row.
#[inline]
pub fn transform_times(value: u8, times: usize) -> u8 {
    (0..times).fold(value, |value, _| transform(value))
}

/// [`transform`] on every channel value
pub fn obfuscate(image: &Image) -> Image {
    image.map_channels(transform)
}

/// Exact inverse of [`obfuscate`]
pub fn deobfuscate(image: &Image) -> Image {
    image.map_channels(|value| transform_times(value, TRANSFORM_ORDER - 1))
}

fn validate_bit_plane(plane: u8) -> Result<u8> {
    if plane > HIGHEST_BIT_PLANE {
        return Err(StegamixError::InvalidBitPlane(plane));
    }

    Ok(plane)
}

/// Hides the index of every row in bit plane `plane` of that row.
///
/// The index is written as decimal ASCII text, channel by channel, and the rest of
/// the plane is cleared so a zero byte terminates it.
pub fn tag_lines(image: &Image, plane: u8) -> Result<Image> {
    let plane = validate_bit_plane(plane)?;

    image
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| tag_line(row, index, plane))
        .collect()
}

fn tag_line(row: &[[u8; CHANNELS]], index: usize, plane: u8) -> Result<Row> {
    let tag = message_to_bits(&index.to_string())?;
    let mut i = 0;

    Ok(row
        .iter()
        .map(|pixel| {
            pixel.map(|value| {
                let value = set_bit(value, codebit(i, &tag), plane);
                i += 1;
                value
            })
        })
        .collect())
}

/// Tags rows in [`ROW_TAG_PLANE`] and columns in [`COLUMN_TAG_PLANE`], in place.
///
/// This is what [`unscramble`] hands back for a scrambled image.
pub fn tag_image(image: &Image) -> Result<Image> {
    let rows_tagged = tag_lines(image, ROW_TAG_PLANE)?;

    tag_lines(&rows_tagged.transpose()?, COLUMN_TAG_PLANE)?.transpose()
}

/// Reads the text hidden in bit plane `plane` of one row.
pub fn read_tag(line: &[[u8; CHANNELS]], plane: u8) -> Result<String> {
    let plane = validate_bit_plane(plane)?;
    let bits: String = line
        .iter()
        .flatten()
        .map(|&value| get_bit(value, plane))
        .collect();

    bits_to_message(&bits)
}

/// Shuffles the rows uniformly.
///
/// Draws one of the rows not yet placed at random, appends it, and repeats until
/// none is left.
pub fn permute_lines(image: &Image, rng: &mut Rng) -> Image {
    let mut pool: Vec<Row> = image.rows().to_vec();
    let mut permuted = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let index = rng.usize(0..pool.len());
        permuted.push(pool.swap_remove(index));
    }

    Image::from(permuted)
}

/// Puts every row back to the position its tag in bit plane `plane` names.
pub fn unpermute_lines(image: &Image, plane: u8) -> Result<Image> {
    let lines = image.height();
    let mut slots: Vec<Option<Row>> = vec![None; lines];
    for (line, row) in image.rows().iter().enumerate() {
        let tag = read_tag(row, plane)?;
        let index = match tag.parse::<usize>() {
            Ok(index) if index < lines => index,
            _ => return Err(StegamixError::InvalidTag { line, tag }),
        };
        slots[index] = Some(row.clone());
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, row)| row.ok_or(StegamixError::MissingTag(index)))
        .collect()
}

fn tag_bits(largest_index: usize) -> usize {
    (largest_index.to_string().len() + 1) * BITS_PER_CHAR
}

/// True if every row and every column can hold its index plus a terminating zero byte.
pub fn tag_capacity_ok(image: &Image) -> Result<bool> {
    let width = image.width()?;
    let height = image.height();
    if width == 0 || height == 0 {
        return Ok(true);
    }

    Ok(tag_bits(height - 1) <= width * CHANNELS && tag_bits(width - 1) <= height * CHANNELS)
}

/// Tags and shuffles rows, then columns, then obfuscates the untagged bits.
///
/// `rng` is the only source of randomness, seed it for reproducible results.
pub fn scramble(image: &Image, rng: &mut Rng) -> Result<Image> {
    let (width, height) = (image.width()?, image.height());
    if image.is_empty() {
        return Ok(image.clone());
    }
    if !tag_capacity_ok(image)? {
        warn!("a {width}x{height} image is too small to hold all row and column tags, it might not unscramble");
    }

    debug!("shuffling {height} rows");
    let rows_mixed = permute_lines(&tag_lines(image, ROW_TAG_PLANE)?, rng);

    debug!("shuffling {width} columns");
    let columns = tag_lines(&rows_mixed.transpose()?, COLUMN_TAG_PLANE)?;
    let mixed = permute_lines(&columns, rng).transpose()?;

    Ok(obfuscate(&mixed))
}

/// Restores an image produced by [`scramble`], up to the tag planes, see [`tag_image`].
pub fn unscramble(image: &Image) -> Result<Image> {
    image.width()?;
    if image.is_empty() {
        return Ok(image.clone());
    }

    let clear = deobfuscate(image);
    debug!("restoring column order");
    let columns_restored = unpermute_lines(&clear.transpose()?, COLUMN_TAG_PLANE)?.transpose()?;
    debug!("restoring row order");
    let restored = unpermute_lines(&columns_restored, ROW_TAG_PLANE)?;

    // column tags were written in shuffled row order
    tag_lines(&restored.transpose()?, COLUMN_TAG_PLANE)?.transpose()
}

/// Owns the random generator that decides how lines are shuffled.
///
/// ```rust
/// use stegamix_core::media::Image;
/// use stegamix_core::scrambler::{tag_image, Scrambler};
///
/// let image: Image = (0..16)
///     .map(|y| (0..16).map(|x| [x as u8, y as u8, (x * y) as u8]).collect::<Vec<_>>())
///     .collect();
/// let scrambled = Scrambler::with_seed(42).scramble(&image).unwrap();
/// assert_ne!(scrambled, image);
/// assert_eq!(Scrambler::unscramble(&scrambled).unwrap(), tag_image(&image).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Scrambler {
    rng: Rng,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrambler {
    /// A scrambler seeded from entropy
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// A scrambler that shuffles the same way every time for the same seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    pub fn with_rng(rng: Rng) -> Self {
        Self { rng }
    }

    pub fn scramble(&mut self, image: &Image) -> Result<Image> {
        scramble(image, &mut self.rng)
    }

    /// Unscrambling needs no randomness, the tags carry all the information.
    pub fn unscramble(image: &Image) -> Result<Image> {
        unscramble(image)
    }
}
