use std::path::{Path, PathBuf};

use log::info;

use crate::media::{read_image_file, write_image_file};
use crate::scrambler::unscramble;
use crate::{Result, StegamixError};

pub fn prepare() -> UnscrambleApi {
    UnscrambleApi::default()
}

#[derive(Default, Debug)]
pub struct UnscrambleApi {
    scrambled_image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl UnscrambleApi {
    pub fn from_scrambled_file(mut self, scrambled_image: impl AsRef<Path>) -> Self {
        self.scrambled_image = Some(scrambled_image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(scrambled_image) = self.scrambled_image else {
            return Err(StegamixError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegamixError::TargetNotSet);
        };

        let restored = unscramble(&read_image_file(&scrambled_image)?)?;
        write_image_file(&restored, &output)?;
        info!("unscrambled image written to {output:?}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::scrambler::tag_image;
    use crate::test_utils::prepare_gradient_image;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let plain = temp_dir.path().join("plain.png");
        let scrambled = temp_dir.path().join("scrambled.png");
        let restored = temp_dir.path().join("restored.png");
        write_image_file(&prepare_gradient_image(15, 25), &plain).unwrap();

        crate::api::scramble::prepare()
            .with_image(&plain)
            .with_output(&scrambled)
            .execute()
            .expect("Failed to scramble image");

        crate::api::unscramble::prepare()
            .from_scrambled_file(&scrambled)
            .with_output(&restored)
            .execute()
            .expect("Failed to unscramble image");

        assert_eq!(
            read_image_file(&restored).unwrap(),
            tag_image(&prepare_gradient_image(15, 25)).unwrap()
        );
    }

    #[test]
    fn should_require_input_and_output() {
        assert!(matches!(
            prepare().with_output("b.png").execute(),
            Err(StegamixError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().from_scrambled_file("a.png").execute(),
            Err(StegamixError::TargetNotSet)
        ));
    }
}
