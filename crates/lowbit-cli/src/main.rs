use clap::Parser;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = std::result::Result<T, lowbit_core::LowbitError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Hide(hide) => hide.run(),
        Commands::Unveil(unveil) => unveil.run(),
        Commands::Inspect(inspect) => inspect.run(),
    }
}
