use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::lsb_codec::{CodecOptions, LsbCodec};
use crate::media::read_image_file;
use crate::{Result, StegamixError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Must match the bit depth the message was hidden with
    pub fn with_bit_depth(mut self, bit_depth: u8) -> Self {
        self.options.bit_depth = bit_depth;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The unveiled message is also written to this text file, one byte per character
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Returns the unveiled message
    pub fn execute(self) -> Result<String> {
        let Some(secret_image) = self.secret_image else {
            return Err(StegamixError::CarrierNotSet);
        };

        let message = LsbCodec::decode(&read_image_file(&secret_image)?, &self.options)?;

        if let Some(output_file) = self.output_file {
            let bytes: Vec<u8> = message.chars().map(|c| c as u8).collect();
            fs::write(&output_file, bytes)
                .map_err(|source| StegamixError::WriteError { source })?;
            info!("message written to {output_file:?}");
        }

        Ok(message)
    }
}
