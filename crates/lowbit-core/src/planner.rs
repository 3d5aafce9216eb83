//! Capacity planning: picks the payload bits per sample and grows the cover
//! image until that width is small enough.

use log::{debug, info};

use crate::container::{HEADER_DIGIT_WIDTH, HEADER_SAMPLES, MAX_BITS_PER_SAMPLE};
use crate::error::LowbitError;
use crate::media::{CodecOptions, CoverImage, Shape};
use crate::result::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanResult {
    /// Always within `1..=8`
    pub bits_per_sample: u8,
    /// Shape of the cover image after growing
    pub shape: Shape,
    pub upscale_steps: u32,
}

/// Samples left for the payload once header and file name are placed.
/// `None` if not even those fit.
pub fn available_samples(sample_count: usize, name_bits: usize) -> Option<usize> {
    let overhead = HEADER_SAMPLES + name_bits.div_ceil(HEADER_DIGIT_WIDTH as usize);
    sample_count.checked_sub(overhead)
}

/// Smallest width that spreads `payload_bits` over `available` samples, at least 1.
/// `None` if there is payload but no room at all.
pub fn required_bits_per_sample(payload_bits: u64, available: usize) -> Option<u64> {
    if payload_bits == 0 {
        return Some(1);
    }
    if available == 0 {
        return None;
    }
    Some((payload_bits - 1) / available as u64 + 1)
}

/// Decides the payload width for the given lengths and doubles `cover` in
/// width and height while that width exceeds both the preferred ceiling and 8.
pub fn plan(
    cover: &mut CoverImage,
    payload_bits: u32,
    name_bits: u8,
    options: &CodecOptions,
) -> Result<PlanResult> {
    let ceiling = u64::from(options.max_bits_per_sample);
    let sample_limit = u64::from(MAX_BITS_PER_SAMPLE);

    let mut steps = 0;
    let mut bits_per_sample = width_for(cover, payload_bits, name_bits);
    while bits_per_sample.map_or(true, |b| b > ceiling && b > sample_limit) {
        debug!(
            "{} samples need {bits_per_sample:?} bits per sample, growing the image",
            cover.len()
        );
        if options.max_upscale_steps == Some(steps) || cover.is_empty() {
            return Err(capacity_error(cover.shape(), bits_per_sample));
        }
        cover.upscale2x()?;
        steps += 1;
        bits_per_sample = width_for(cover, payload_bits, name_bits);
    }

    match bits_per_sample {
        Some(b) if b <= sample_limit => {
            let plan = PlanResult {
                bits_per_sample: b as u8,
                shape: cover.shape(),
                upscale_steps: steps,
            };
            info!(
                "Hiding {payload_bits} bits at {b} bits per sample in a {} image after {steps} upscale steps",
                plan.shape
            );
            Ok(plan)
        }
        _ => Err(capacity_error(cover.shape(), bits_per_sample)),
    }
}

fn width_for(cover: &CoverImage, payload_bits: u32, name_bits: u8) -> Option<u64> {
    available_samples(cover.len(), usize::from(name_bits))
        .and_then(|available| required_bits_per_sample(u64::from(payload_bits), available))
}

fn capacity_error(shape: Shape, bits_per_sample: Option<u64>) -> LowbitError {
    LowbitError::ImageCapacityError {
        width: shape.width,
        height: shape.height,
        bits_per_sample: bits_per_sample.unwrap_or(u64::MAX),
    }
}
