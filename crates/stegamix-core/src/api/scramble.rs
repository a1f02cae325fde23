use std::path::{Path, PathBuf};

use log::info;

use crate::media::{read_image_file, write_image_file};
use crate::scrambler::Scrambler;
use crate::{Result, StegamixError};

pub fn prepare() -> ScrambleApi {
    ScrambleApi::default()
}

#[derive(Default, Debug)]
pub struct ScrambleApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    seed: Option<u64>,
}

impl ScrambleApi {
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Shuffle reproducibly
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// If `None` is passed the shuffling is seeded from entropy
    pub fn use_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(StegamixError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegamixError::TargetNotSet);
        };

        let mut scrambler = match self.seed {
            Some(seed) => Scrambler::with_seed(seed),
            None => Scrambler::new(),
        };
        let scrambled = scrambler.scramble(&read_image_file(&image)?)?;
        write_image_file(&scrambled, &output)?;
        info!("scrambled image written to {output:?}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::test_utils::prepare_gradient_image;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let plain = temp_dir.path().join("plain.png");
        write_image_file(&prepare_gradient_image(20, 14), &plain).unwrap();
        let first = temp_dir.path().join("first.png");
        let second = temp_dir.path().join("second.png");

        for output in [&first, &second] {
            crate::api::scramble::prepare()
                .with_image(&plain)
                .with_output(output)
                .with_seed(42)
                .execute()
                .expect("Failed to scramble image");
        }

        let scrambled = read_image_file(&first).unwrap();
        assert_ne!(scrambled, prepare_gradient_image(20, 14));
        assert_eq!(scrambled, read_image_file(&second).unwrap());
    }

    #[test]
    fn should_require_input_and_output() {
        assert!(matches!(
            prepare().with_output("b.png").execute(),
            Err(StegamixError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().with_image("a.png").execute(),
            Err(StegamixError::TargetNotSet)
        ));
    }
}
