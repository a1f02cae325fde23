use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a text message from a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    /// The message will also be stored in this text file
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    /// Number of low bit planes per color channel the message was hidden in
    #[arg(
        short,
        long,
        value_name = "1-8",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=8)
    )]
    pub bit_depth: u8,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let mut api = stegamix_core::api::unveil::prepare()
            .from_secret_file(self.image)
            .with_bit_depth(self.bit_depth);
        if let Some(output_file) = self.output_file {
            api = api.into_output_file(output_file);
        }

        println!("{}", api.execute()?);

        Ok(())
    }
}
