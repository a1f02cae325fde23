//! Bridges between [`Image`] and the outside world, flat RGB buffers and image files.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{ImageError, ImageFormat, RgbImage};
use log::{debug, error};

use super::image::{Image, Row, CHANNELS};
use crate::error::StegamixError;
use crate::result::Result;

/// Splits a flat, row major `width * height * 3` byte buffer into an [`Image`].
pub fn to_rectangular_image(buffer: &[u8], width: usize, height: usize) -> Result<Image> {
    let expected = width * height * CHANNELS;
    if buffer.len() != expected {
        return Err(StegamixError::InvalidBufferSize {
            expected,
            found: buffer.len(),
        });
    }
    if width == 0 {
        return Ok(Image::default());
    }

    Ok(buffer
        .chunks_exact(width * CHANNELS)
        .map(|row| {
            row.chunks_exact(CHANNELS)
                .map(|c| [c[0], c[1], c[2]])
                .collect::<Row>()
        })
        .collect())
}

/// Flattens a rectangular [`Image`] into a row major RGB byte buffer.
pub fn from_rectangular_image(image: &Image) -> Result<Vec<u8>> {
    image.width()?;

    Ok(image.channel_values().collect())
}

impl From<&RgbImage> for Image {
    fn from(img: &RgbImage) -> Self {
        img.rows()
            .map(|row| row.map(|pixel| pixel.0).collect::<Row>())
            .collect()
    }
}

impl TryFrom<&Image> for RgbImage {
    type Error = StegamixError;

    fn try_from(image: &Image) -> Result<Self> {
        let width = image.width()?;
        let (w, h) = match (u32::try_from(width), u32::try_from(image.height())) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(StegamixError::ImageEncodingError),
        };

        RgbImage::from_raw(w, h, from_rectangular_image(image)?)
            .ok_or(StegamixError::ImageEncodingError)
    }
}

fn has_extension(path: &Path, accepted: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| accepted.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Reads a PNG or JPEG file, alpha is dropped.
pub fn read_image_file(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    if !has_extension(path, &["png", "jpg", "jpeg"]) {
        return Err(StegamixError::UnsupportedMedia);
    }

    let img = image::open(path)
        .map_err(|e| {
            error!("Error reading image {path:?}: {e}");
            match e {
                ImageError::IoError(source) => StegamixError::ReadError { source },
                _ => StegamixError::InvalidImageMedia,
            }
        })?
        .to_rgb8();
    debug!(
        "read {}x{} image from {path:?}",
        img.width(),
        img.height()
    );

    Ok(Image::from(&img))
}

/// Writes `image` as PNG, the only lossless format the hidden bits survive in.
pub fn write_image_file(image: &Image, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !has_extension(path, &["png"]) {
        return Err(StegamixError::UnsupportedMedia);
    }

    let file = File::create(path).map_err(|e| {
        error!("Error creating file {path:?}: {e}");
        StegamixError::WriteError { source: e }
    })?;
    let mut writer = BufWriter::new(file);
    write_image_to(image, &mut writer)?;
    writer
        .flush()
        .map_err(|source| StegamixError::WriteError { source })
}

/// Encodes `image` as PNG into any seekable writer.
pub fn write_image_to<W: Write + Seek>(image: &Image, mut writer: W) -> Result<()> {
    let img = RgbImage::try_from(image)?;
    img.write_to(&mut writer, ImageFormat::Png).map_err(|e| {
        error!("Error saving image: {e}");
        StegamixError::ImageEncodingError
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::tempdir;

    use super::*;
    use crate::test_utils::prepare_3x2_image;

    #[test]
    fn should_convert_flat_buffers_both_ways() {
        let buffer: Vec<u8> = (0..18).collect();
        let image = to_rectangular_image(&buffer, 2, 3).unwrap();
        assert_eq!(image.height(), 3);
        assert_eq!(image.rows()[1], vec![[6, 7, 8], [9, 10, 11]]);
        assert_eq!(from_rectangular_image(&image).unwrap(), buffer);
    }

    #[test]
    fn should_reject_buffers_of_wrong_size() {
        assert!(matches!(
            to_rectangular_image(&[0; 17], 2, 3),
            Err(StegamixError::InvalidBufferSize {
                expected: 18,
                found: 17
            })
        ));
    }

    #[test]
    fn should_reject_ragged_images_when_flattening() {
        let image = Image::from(vec![vec![[0; 3]; 2], vec![[0; 3]]]);
        assert!(from_rectangular_image(&image).is_err());
    }

    #[test]
    fn should_encode_png_into_memory() {
        let mut buffer = Cursor::new(Vec::new());
        write_image_to(&prepare_3x2_image(), &mut buffer).unwrap();
        let decoded = image::load_from_memory(buffer.get_ref()).unwrap().to_rgb8();
        assert_eq!(Image::from(&decoded), prepare_3x2_image());
    }

    #[test]
    fn should_persist_images_lossless() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let file = dir.path().join("image.png");
        write_image_file(&prepare_3x2_image(), &file).unwrap();

        assert_eq!(read_image_file(&file).unwrap(), prepare_3x2_image());
    }

    #[test]
    fn should_refuse_unsupported_formats() {
        let dir = tempdir().expect("Failed to create temporary directory");
        assert!(matches!(
            write_image_file(&prepare_3x2_image(), dir.path().join("image.jpg")),
            Err(StegamixError::UnsupportedMedia)
        ));
        assert!(matches!(
            read_image_file(dir.path().join("sound.wav")),
            Err(StegamixError::UnsupportedMedia)
        ));
    }

    #[test]
    fn should_fail_on_missing_image_files() {
        let dir = tempdir().expect("Failed to create temporary directory");
        assert!(matches!(
            read_image_file(dir.path().join("missing.png")),
            Err(StegamixError::ReadError { .. })
        ));
    }

    #[test]
    fn should_fail_on_broken_image_files() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let file = dir.path().join("broken.png");
        std::fs::write(&file, b"not a png").unwrap();
        assert!(matches!(
            read_image_file(&file),
            Err(StegamixError::InvalidImageMedia)
        ));
    }
}
