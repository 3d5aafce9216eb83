//! Layout of the hidden data inside the samples of a cover image.
//!
//! ```text
//! | bits per sample - 1 | payload bit length | name bit length | file name  | payload           |
//! | 1 sample            | 4 samples          | 1 sample        | name / 8   | payload / width   |
//! | 8 bit               | 8 bit, big endian  | 8 bit           | 8 bit      | width bits        |
//! ```
//!
//! Only the low bits of a sample belong to a field, the high bits keep the
//! cover image's values.

mod cursor;
mod header;

use std::fmt;

use log::debug;

pub use cursor::{SampleReader, SampleWriter};
pub use header::Header;

use crate::bits::BitSequence;
use crate::error::LowbitError;
use crate::message::HiddenFile;
use crate::result::Result;

/// Header fields and the file name carry a full byte per sample.
pub const HEADER_DIGIT_WIDTH: u32 = 8;
pub const PAYLOAD_LENGTH_BITS: u32 = 32;
pub const NAME_LENGTH_BITS: u32 = 8;
/// Samples taken by the bits per sample, payload length and name length fields.
pub const HEADER_SAMPLES: usize =
    1 + (PAYLOAD_LENGTH_BITS / HEADER_DIGIT_WIDTH) as usize + (NAME_LENGTH_BITS / HEADER_DIGIT_WIDTH) as usize;
/// A sample has 8 bits, more cannot be hidden in it.
pub const MAX_BITS_PER_SAMPLE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    BitsPerSample,
    PayloadLength,
    NameLength,
    FileName,
    Payload,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::BitsPerSample => "bits per sample field",
            Field::PayloadLength => "payload length field",
            Field::NameLength => "name length field",
            Field::FileName => "file name",
            Field::Payload => "payload",
        };
        f.write_str(name)
    }
}

/// What a container reveals without touching the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub header: Header,
    pub file_name: String,
    pub samples_used: usize,
    pub samples_available: usize,
}

/// Writes header, file name and payload of `file` into the low bits of `samples`.
///
/// Nothing is written unless the whole container fits.
pub fn embed(samples: &mut [u8], bits_per_sample: u8, file: &HiddenFile) -> Result<Header> {
    let header = Header::new(bits_per_sample, file.payload_bits(), file.name_bits())?;
    let required = header.total_samples();
    if required > samples.len() {
        return Err(LowbitError::CapacityExceeded {
            field: Field::Payload,
            required,
            available: samples.len(),
        });
    }

    let mut writer = SampleWriter::new(samples);
    header.write_to(&mut writer)?;
    writer.write_field(
        Field::FileName,
        &BitSequence::from_bytes(file.name().as_bytes()),
        HEADER_DIGIT_WIDTH,
    )?;
    writer.write_field(
        Field::Payload,
        &BitSequence::from_bytes(file.data()),
        u32::from(bits_per_sample),
    )?;
    debug!("Container written into {} samples", writer.offset());

    Ok(header)
}

/// Reads the hidden file back, the payload is cut to exactly the declared bit length.
pub fn extract(samples: &[u8]) -> Result<HiddenFile> {
    let mut reader = SampleReader::new(samples);
    let (header, name) = read_header_and_name(&mut reader)?;
    let payload = reader.read_field(
        Field::Payload,
        header.payload_bits() as usize,
        u32::from(header.bits_per_sample()),
    )?;

    Ok(HiddenFile::from_container(name, payload.to_bytes()))
}

/// Reads header and file name only.
pub fn inspect(samples: &[u8]) -> Result<ContainerInfo> {
    let mut reader = SampleReader::new(samples);
    let (header, file_name) = read_header_and_name(&mut reader)?;

    Ok(ContainerInfo {
        header,
        file_name,
        samples_used: header.total_samples(),
        samples_available: samples.len(),
    })
}

fn read_header_and_name(reader: &mut SampleReader) -> Result<(Header, String)> {
    let header = Header::read_from(reader)?;
    let name = reader.read_field(
        Field::FileName,
        usize::from(header.name_bits()),
        HEADER_DIGIT_WIDTH,
    )?;
    let name = String::from_utf8(name.to_bytes())?;
    debug!("Found container {header:?} for {name:?}");

    Ok((header, name))
}
