use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::CliResult;

/// Unveils the file hidden in an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the hidden file
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// The file will be stored in that folder, under its hidden name
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        default_value = "."
    )]
    pub output_folder: PathBuf,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let written = lowbit_core::commands::unveil(&self.media, &self.output_folder)?;
        info!("File written to {written:?}");

        Ok(())
    }
}
