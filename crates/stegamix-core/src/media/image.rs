use crate::error::StegamixError;
use crate::result::Result;

/// number of color channels of a pixel, R, G and B
pub const CHANNELS: usize = 3;

/// color channel intensities of one pixel in R, G, B order
pub type Pixel = [u8; CHANNELS];

/// one row of pixels, in column order
pub type Row = Vec<Pixel>;

/// Row major image, the unit every codec and scrambler stage consumes and produces.
///
/// Rows are not required to be of equal length for the LSB codec, which only walks
/// the pixels in order. Column oriented operations check the shape and fail with
/// [`StegamixError::ShapeMismatch`] on ragged images.
///
/// ```rust
/// use stegamix_core::media::Image;
///
/// let image = Image::from(vec![
///     vec![[15, 103, 255], [0, 3, 19]],
///     vec![[22, 200, 1], [8, 8, 8]],
/// ]);
/// let transposed = image.transpose().unwrap();
/// assert_eq!(transposed.rows()[0], vec![[15, 103, 255], [22, 200, 1]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Image {
    rows: Vec<Row>,
}

impl Image {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// number of pixels over all rows
    pub fn pixel_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// true if the image has no pixel at all
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// The common length of all rows, `0` for an image without rows.
    pub fn width(&self) -> Result<usize> {
        let expected = self.rows.first().map_or(0, Vec::len);
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row, found)) => Err(StegamixError::ShapeMismatch {
                row,
                expected,
                found: found.len(),
            }),
            None => Ok(expected),
        }
    }

    /// Swaps rows and columns, pixel `(r, c)` ends up at `(c, r)`.
    pub fn transpose(&self) -> Result<Image> {
        let width = self.width()?;

        Ok((0..width)
            .map(|c| self.rows.iter().map(|row| row[c]).collect::<Row>())
            .collect())
    }

    /// Number of bits that fit when `bits_per_channel` bit planes of every channel are used.
    pub fn bit_capacity(&self, bits_per_channel: usize) -> usize {
        self.pixel_count() * CHANNELS * bits_per_channel
    }

    /// All channel values, row by row, pixel by pixel, R then G then B.
    pub fn channel_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flatten().flat_map(|pixel| pixel.iter().copied())
    }

    /// A new image of the same shape with `f` applied to every channel value.
    pub fn map_channels<F>(&self, mut f: F) -> Image
    where
        F: FnMut(u8) -> u8,
    {
        self.rows
            .iter()
            .map(|row| row.iter().map(|pixel| pixel.map(&mut f)).collect::<Row>())
            .collect()
    }
}

impl From<Vec<Row>> for Image {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Row> for Image {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
