//! # Stegamix Core API
//!
//! Two independent tools working on RGB images:
//! - [`lsb_codec`] hides ASCII text in the lowest 1 to 8 bit planes of every color channel
//! - [`scrambler`] shuffles rows and columns and garbles the upper bits so the image is
//!   unrecognizable, yet restorable; only the two lowest bit planes end up holding
//!   row and column indices
//!
//! Both work on [`media::Image`] and build on the primitives in [`bits`] and [`bitstream`].
//! The [`api`] module wraps them into file based pipelines.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use stegamix_core::lsb_codec::{decode, encode};
//! use stegamix_core::media::Image;
//!
//! let carrier = Image::from(vec![
//!     vec![[15, 103, 255], [0, 3, 19]],
//!     vec![[22, 200, 1], [8, 8, 8]],
//!     vec![[0, 0, 0], [5, 123, 19]],
//! ]);
//!
//! let secret = encode(&carrier, "hi", 1).expect("Failed to hide message");
//! assert_eq!(decode(&secret, 1).expect("Failed to unveil message"), "hi");
//!
//! // 18 bits of capacity take only 2 characters, the rest gets truncated
//! let secret = encode(&carrier, "hello", 1).expect("Failed to hide message");
//! assert_eq!(decode(&secret, 1).expect("Failed to unveil message"), "he");
//! ```
//!
//! ## Scramble an image file and restore it
//!
//! ```rust
//! use tempfile::tempdir;
//! use stegamix_core::media::{write_image_file, Image};
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let plain = temp_dir.path().join("plain.png");
//! let image: Image = (0..32u8)
//!     .map(|y: u8| (0..32u8).map(|x| [x * 8, y * 8, 128]).collect::<Vec<[u8; 3]>>())
//!     .collect();
//! write_image_file(&image, &plain).expect("Failed to write image");
//!
//! stegamix_core::api::scramble::prepare()
//!     .with_image(&plain)
//!     .with_output(temp_dir.path().join("scrambled.png"))
//!     .with_seed(42)
//!     .execute()
//!     .expect("Failed to scramble image");
//!
//! stegamix_core::api::unscramble::prepare()
//!     .from_scrambled_file(temp_dir.path().join("scrambled.png"))
//!     .with_output(temp_dir.path().join("restored.png"))
//!     .execute()
//!     .expect("Failed to unscramble image");
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod bits;
pub mod bitstream;
pub mod error;
pub mod lsb_codec;
pub mod media;
pub mod result;
pub mod scrambler;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::error::StegamixError;
pub use crate::lsb_codec::{CodecOptions, LsbCodec};
pub use crate::media::{Image, Pixel, Row};
pub use crate::result::Result;
pub use crate::scrambler::Scrambler;
