//! Conversion between bit sequences and fixed width digits (base `2^width`).
//!
//! [`expand`] turns every value into its `width` bit big endian form,
//! [`compress`] groups bits back into `width` bit digits after padding the
//! sequence on the left. Compressing into wider digits than were expanded
//! loses the leading zero bits, so callers that know the exact bit length
//! should use [`expand_to`] when reading back.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::bits::BitSequence;
use crate::error::LowbitError;
use crate::result::Result;

pub const MAX_DIGIT_WIDTH: u32 = 64;

/// Emits the low `width` bits of every value, most significant bit first, in input order.
///
/// ## Example
/// ```rust
/// use lowbit_core::radix;
///
/// let bits = radix::expand([0b101u8, 0b010], 3).unwrap();
/// assert_eq!(bits.to_bytes(), vec![0b10_1010]);
/// ```
pub fn expand<I>(values: I, width: u32) -> Result<BitSequence>
where
    I: IntoIterator,
    I::Item: Into<u64>,
{
    check_width(width)?;
    let mask = low_bits_mask(width);
    let mut writer = BitWriter::endian(Vec::new(), BigEndian);
    let mut len = 0;

    for value in values {
        let value: u64 = value.into();
        writer.write(width, value & mask)?;
        len += width as usize;
    }
    writer.byte_align()?;

    Ok(BitSequence::from_raw_parts(writer.into_writer(), len))
}

/// Like [`expand`] but keeps only the last `bit_len` bits, dropping the left padding
/// a previous [`compress`] has added.
pub fn expand_to<I>(values: I, width: u32, bit_len: usize) -> Result<BitSequence>
where
    I: IntoIterator,
    I::Item: Into<u64>,
{
    expand(values, width)?.trailing(bit_len)
}

/// Left pads `bits` with zeros to a multiple of `width` and returns one digit per
/// `width` bit group, most significant group first.
pub fn compress(bits: &BitSequence, width: u32) -> Result<Vec<u64>> {
    check_width(width)?;
    let step = width as usize;
    let pad = (step - bits.len() % step) % step;
    let count = (bits.len() + pad) / step;

    let mut reader = BitReader::endian(bits.as_raw_bytes(), BigEndian);
    let mut digits = Vec::with_capacity(count);
    for i in 0..count {
        let take = if i == 0 { width - pad as u32 } else { width };
        digits.push(reader.read::<u64>(take)?);
    }

    Ok(digits)
}

fn check_width(width: u32) -> Result<()> {
    if width == 0 || width > MAX_DIGIT_WIDTH {
        return Err(LowbitError::InvalidDigitWidth(width));
    }
    Ok(())
}

fn low_bits_mask(width: u32) -> u64 {
    if width >= MAX_DIGIT_WIDTH {
        u64::MAX
    } else {
        (1 << width) - 1
    }
}
