use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a text message in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, ASCII only
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Number of low bit planes per color channel used for the message
    #[arg(
        short,
        long,
        value_name = "1-8",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=8)
    )]
    pub bit_depth: u8,

    /// Fail instead of truncating a message that does not fit
    #[arg(long)]
    pub strict: bool,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        stegamix_core::api::hide::prepare()
            .with_image(self.image)
            .with_output(self.write_to_file)
            .with_message(&self.message)
            .with_bit_depth(self.bit_depth)
            .with_strict_capacity(self.strict)
            .execute()
    }
}
