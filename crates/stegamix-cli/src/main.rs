use clap::Parser;
use log::debug;

use stegamix_core::StegamixError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, StegamixError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    debug!("{args:?}");

    match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::Scramble(args) => args.run(),
        Commands::Unscramble(args) => args.run(),
    }
}
