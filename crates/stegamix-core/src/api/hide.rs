use std::path::{Path, PathBuf};

use log::info;

use crate::lsb_codec::{check_capacity, CodecOptions, LsbCodec};
use crate::media::{read_image_file, write_image_file};
use crate::{Result, StegamixError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
    strict_capacity: bool,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of low bit planes per color channel, validated on [`HideApi::execute`]
    pub fn with_bit_depth(mut self, bit_depth: u8) -> Self {
        self.options.bit_depth = bit_depth;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Fail with [`StegamixError::CapacityExceeded`] instead of truncating the message
    pub fn with_strict_capacity(mut self, strict: bool) -> Self {
        self.strict_capacity = strict;
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(message) = self.message else {
            return Err(StegamixError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(StegamixError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegamixError::TargetNotSet);
        };

        let carrier = read_image_file(&image)?;
        if self.strict_capacity {
            check_capacity(&carrier, &message, self.options.bit_depth)?;
        }
        let secret = LsbCodec::encode(&carrier, &message, &self.options)?;
        write_image_file(&secret, &output)?;
        info!("message hidden in {output:?}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::lsb_codec::decode;
    use crate::test_utils::{prepare_3x2_image, prepare_gradient_image};

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        write_image_file(&prepare_gradient_image(10, 10), &carrier).unwrap();
        let output = temp_dir.path().join("image-with-secret.png");

        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_bit_depth(2)
            .with_output(&output)
            .execute()
            .expect("Failed to hide message in image");

        let secret = read_image_file(&output).unwrap();
        assert_eq!(decode(&secret, 2).unwrap(), "Hello, World!");
    }

    #[test]
    fn should_require_message_carrier_and_target() {
        assert!(matches!(
            prepare().with_image("a.png").with_output("b.png").execute(),
            Err(StegamixError::MissingMessage)
        ));
        assert!(matches!(
            prepare().with_message("hi").with_output("b.png").execute(),
            Err(StegamixError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().with_message("hi").with_image("a.png").execute(),
            Err(StegamixError::TargetNotSet)
        ));
    }

    #[test]
    fn should_refuse_too_long_messages_when_strict() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        write_image_file(&prepare_3x2_image(), &carrier).unwrap();
        let output = temp_dir.path().join("out.png");

        let result = prepare()
            .with_message("hello")
            .with_image(&carrier)
            .with_output(&output)
            .with_strict_capacity(true)
            .execute();
        assert!(matches!(
            result,
            Err(StegamixError::CapacityExceeded { .. })
        ));
        assert!(!output.exists());

        prepare()
            .with_message("hello")
            .with_image(&carrier)
            .with_output(&output)
            .execute()
            .expect("Truncating should not fail");
        assert_eq!(decode(&read_image_file(&output).unwrap(), 1).unwrap(), "he");
    }

    #[test]
    fn should_reject_invalid_bit_depth() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        write_image_file(&prepare_3x2_image(), &carrier).unwrap();

        assert!(matches!(
            prepare()
                .with_message("hi")
                .with_image(&carrier)
                .with_output(temp_dir.path().join("out.png"))
                .with_bit_depth(0)
                .execute(),
            Err(StegamixError::InvalidBitDepth(0))
        ));
    }
}
