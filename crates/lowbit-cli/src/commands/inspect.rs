use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows what an image carries without unveiling it
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Source image that contains the hidden file
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,
}

impl InspectArgs {
    pub fn run(self) -> CliResult<()> {
        let info = lowbit_core::commands::inspect(&self.media)?;

        println!("file name:       {}", info.file_name);
        println!("payload:         {} bytes", info.header.payload_bits() / 8);
        println!("bits per sample: {}", info.header.bits_per_sample());
        println!(
            "samples used:    {} of {}",
            info.samples_used, info.samples_available
        );

        Ok(())
    }
}
