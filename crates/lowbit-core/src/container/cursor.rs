use crate::bits::BitSequence;
use crate::container::{Field, MAX_BITS_PER_SAMPLE};
use crate::error::LowbitError;
use crate::radix;
use crate::result::Result;

/// Writes fields one after another into the low bits of a sample buffer.
pub struct SampleWriter<'a> {
    samples: &'a mut [u8],
    offset: usize,
}

impl<'a> SampleWriter<'a> {
    pub fn new(samples: &'a mut [u8]) -> Self {
        Self { samples, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.samples.len() - self.offset
    }

    /// Packs `bits` into `width` bit digits, one per sample, replacing only the
    /// low `width` bits of each sample. Returns the number of samples used.
    pub fn write_field(&mut self, field: Field, bits: &BitSequence, width: u32) -> Result<usize> {
        let mask = sample_mask(width)?;
        let digits = radix::compress(bits, width)?;
        let available = self.remaining();
        if digits.len() > available {
            return Err(LowbitError::CapacityExceeded {
                field,
                required: digits.len(),
                available,
            });
        }

        let region = &mut self.samples[self.offset..self.offset + digits.len()];
        for (sample, digit) in region.iter_mut().zip(&digits) {
            *sample = (*sample & !mask) | (*digit as u8 & mask);
        }
        self.offset += digits.len();

        Ok(digits.len())
    }
}

/// Reads fields one after another from the low bits of a sample buffer.
pub struct SampleReader<'a> {
    samples: &'a [u8],
    offset: usize,
}

impl<'a> SampleReader<'a> {
    pub fn new(samples: &'a [u8]) -> Self {
        Self { samples, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.samples.len() - self.offset
    }

    /// Reads a field of `bit_len` bits stored at `width` bits per sample.
    ///
    /// The field occupies `ceil(bit_len / width)` samples, the padding the
    /// writer put in front of the first digit is dropped again.
    pub fn read_field(&mut self, field: Field, bit_len: usize, width: u32) -> Result<BitSequence> {
        let mask = sample_mask(width)?;
        let required = bit_len.div_ceil(width as usize);
        let available = self.remaining();
        if required > available {
            return Err(LowbitError::MalformedContainer {
                field,
                required,
                available,
            });
        }

        let region = &self.samples[self.offset..self.offset + required];
        let bits = radix::expand_to(region.iter().map(|s| s & mask), width, bit_len)?;
        self.offset += required;

        Ok(bits)
    }
}

fn sample_mask(width: u32) -> Result<u8> {
    if width == 0 || width > u32::from(MAX_BITS_PER_SAMPLE) {
        return Err(LowbitError::UnsupportedBitsPerSample(width as u16));
    }
    Ok((u16::MAX >> (16 - width)) as u8)
}
