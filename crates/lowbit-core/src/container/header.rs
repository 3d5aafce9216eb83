use crate::container::{
    Field, SampleReader, SampleWriter, HEADER_DIGIT_WIDTH, HEADER_SAMPLES, MAX_BITS_PER_SAMPLE,
    NAME_LENGTH_BITS, PAYLOAD_LENGTH_BITS,
};
use crate::error::LowbitError;
use crate::radix;
use crate::result::Result;

/// The fixed size part of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    bits_per_sample: u8,
    payload_bits: u32,
    name_bits: u8,
}

impl Header {
    /// `bits_per_sample` must be within `1..=8`
    pub fn new(bits_per_sample: u8, payload_bits: u32, name_bits: u8) -> Result<Self> {
        if bits_per_sample == 0 || bits_per_sample > MAX_BITS_PER_SAMPLE {
            return Err(LowbitError::UnsupportedBitsPerSample(bits_per_sample.into()));
        }

        Ok(Self {
            bits_per_sample,
            payload_bits,
            name_bits,
        })
    }

    pub fn bits_per_sample(&self) -> u8 {
        self.bits_per_sample
    }

    pub fn payload_bits(&self) -> u32 {
        self.payload_bits
    }

    pub fn name_bits(&self) -> u8 {
        self.name_bits
    }

    pub fn name_samples(&self) -> usize {
        usize::from(self.name_bits).div_ceil(HEADER_DIGIT_WIDTH as usize)
    }

    pub fn payload_samples(&self) -> usize {
        (self.payload_bits as usize).div_ceil(usize::from(self.bits_per_sample))
    }

    /// All samples the container occupies, header included.
    pub fn total_samples(&self) -> usize {
        HEADER_SAMPLES + self.name_samples() + self.payload_samples()
    }

    pub fn write_to(&self, writer: &mut SampleWriter) -> Result<()> {
        writer.write_field(
            Field::BitsPerSample,
            &radix::expand([self.bits_per_sample - 1], HEADER_DIGIT_WIDTH)?,
            HEADER_DIGIT_WIDTH,
        )?;
        writer.write_field(
            Field::PayloadLength,
            &radix::expand([self.payload_bits], PAYLOAD_LENGTH_BITS)?,
            HEADER_DIGIT_WIDTH,
        )?;
        writer.write_field(
            Field::NameLength,
            &radix::expand([self.name_bits], NAME_LENGTH_BITS)?,
            HEADER_DIGIT_WIDTH,
        )?;

        Ok(())
    }

    pub fn read_from(reader: &mut SampleReader) -> Result<Self> {
        let bits_per_sample = read_number(reader, Field::BitsPerSample, HEADER_DIGIT_WIDTH)? + 1;
        if bits_per_sample > u64::from(MAX_BITS_PER_SAMPLE) {
            return Err(LowbitError::UnsupportedBitsPerSample(bits_per_sample as u16));
        }
        let payload_bits = read_number(reader, Field::PayloadLength, PAYLOAD_LENGTH_BITS)?;
        let name_bits = read_number(reader, Field::NameLength, NAME_LENGTH_BITS)?;

        Ok(Self {
            bits_per_sample: bits_per_sample as u8,
            payload_bits: payload_bits as u32,
            name_bits: name_bits as u8,
        })
    }
}

/// A `bits` wide big endian number spread over 8 bit samples.
fn read_number(reader: &mut SampleReader, field: Field, bits: u32) -> Result<u64> {
    let raw = reader.read_field(field, bits as usize, HEADER_DIGIT_WIDTH)?;
    let digits = radix::compress(&raw, bits)?;

    Ok(digits.first().copied().unwrap_or_default())
}
