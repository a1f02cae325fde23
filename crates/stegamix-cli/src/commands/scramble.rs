use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Scrambles an image beyond recognition, reversible with `unscramble`
#[derive(Args, Debug)]
pub struct ScrambleArgs {
    /// Image to scramble, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Scrambled image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Seed for reproducible shuffling, random if omitted
    #[arg(long, value_name = "number")]
    pub seed: Option<u64>,
}

impl ScrambleArgs {
    pub fn run(self) -> CliResult<()> {
        stegamix_core::api::scramble::prepare()
            .with_image(self.image)
            .with_output(self.write_to_file)
            .use_seed(self.seed)
            .execute()
    }
}
