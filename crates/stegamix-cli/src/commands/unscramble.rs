use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Restores an image scrambled with `scramble`
#[derive(Args, Debug)]
pub struct UnscrambleArgs {
    /// Scrambled image, used readonly.
    #[arg(
        short = 'i',
        long = "in",
        value_name = "scrambled image file",
        required = true
    )]
    pub image: PathBuf,

    /// Restored image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl UnscrambleArgs {
    pub fn run(self) -> CliResult<()> {
        stegamix_core::api::unscramble::prepare()
            .from_scrambled_file(self.image)
            .with_output(self.write_to_file)
            .execute()
    }
}
