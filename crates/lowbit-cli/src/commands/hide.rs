use std::path::PathBuf;

use clap::Args;
use lowbit_core::media::codec_options::DEFAULT_MAX_BITS_PER_SAMPLE;
use lowbit_core::CodecOptions;
use log::info;

use crate::CliResult;

/// Hides a file in the low bits of an image, written as PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// File to hide in the image
    #[arg(short = 'd', long = "data", value_name = "data file", required = true)]
    pub data_file: PathBuf,

    /// Cover image such as a PNG or JPEG file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Name of the final image, `.png` is appended when missing
    #[arg(short = 'o', long = "out", value_name = "output name", default_value = "out")]
    pub output: PathBuf,

    /// Preferred ceiling of payload bits per color sample
    #[arg(
        short = 'm',
        long = "max-bits-per-sample",
        value_name = "bits",
        default_value_t = DEFAULT_MAX_BITS_PER_SAMPLE
    )]
    pub max_bits_per_sample: u16,

    /// How often the image may be doubled in size to make room, unlimited when omitted
    #[arg(long = "max-upscale-steps", value_name = "steps")]
    pub max_upscale_steps: Option<u32>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let mut options =
            CodecOptions::default().with_max_bits_per_sample(self.max_bits_per_sample);
        if let Some(steps) = self.max_upscale_steps {
            options = options.with_max_upscale_steps(steps);
        }

        let written =
            lowbit_core::commands::hide(&self.data_file, &self.media, &self.output, options)?;
        info!("Image written to {written:?}");

        Ok(())
    }
}
