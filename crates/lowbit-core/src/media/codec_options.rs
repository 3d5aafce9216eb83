/// Default ceiling for the payload bits per sample, see [`CodecOptions::max_bits_per_sample`]
pub const DEFAULT_MAX_BITS_PER_SAMPLE: u16 = 3;

/// Codec configuration for hiding data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Preferred ceiling for the bits per sample carrying the payload.
    ///
    /// The image only grows while the required width is above this ceiling
    /// *and* above 8, so values below 8 do not force any growth, a value above 8
    /// stops the growth early and then fails because a sample cannot carry it.
    pub max_bits_per_sample: u16,

    /// How often the cover image may be doubled in width and height before
    /// hiding gives up with a capacity error. `None` grows until memory runs out.
    pub max_upscale_steps: Option<u32>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_bits_per_sample: DEFAULT_MAX_BITS_PER_SAMPLE,
            max_upscale_steps: None,
        }
    }
}

impl CodecOptions {
    pub fn with_max_bits_per_sample(mut self, max_bits_per_sample: u16) -> Self {
        self.max_bits_per_sample = max_bits_per_sample;
        self
    }

    pub fn with_max_upscale_steps(mut self, max_upscale_steps: u32) -> Self {
        self.max_upscale_steps = Some(max_upscale_steps);
        self
    }
}
