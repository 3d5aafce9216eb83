//! Ordered bit sequences, packed most significant bit first.
//!
//! A [`BitSequence`] is the common currency between hidden files, the radix
//! conversion and the container fields. The bits are stored in whole bytes,
//! the explicit length tells how many of them are real; unused bits of the
//! last byte are always zero.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::LowbitError;
use crate::result::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bytes: Vec<u8>,
    len: usize,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every byte contributes its 8 bits, most significant bit first, in byte order.
    ///
    /// ## Example
    /// ```rust
    /// use lowbit_core::BitSequence;
    ///
    /// let bits = BitSequence::from_bytes(b"A");
    /// let expected = [false, true, false, false, false, false, false, true];
    /// assert!(bits.iter().eq(expected));
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// `bytes` must hold at least `len` bits, surplus bits are dropped.
    pub(crate) fn from_raw_parts(mut bytes: Vec<u8>, len: usize) -> Self {
        debug_assert!(bytes.len() * 8 >= len);
        bytes.truncate(len.div_ceil(8));
        let used = len % 8;
        if used != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xffu8 << (8 - used);
            }
        }

        Self { bytes, len }
    }

    pub(crate) fn as_raw_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len).then(|| self.bit(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.bit(i))
    }

    pub fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Repacks the bits into bytes. When the length is not a multiple of 8
    /// the sequence is padded on the left with zero bits first, so the
    /// result equals a width 8 [`compress`](crate::radix::compress).
    pub fn to_bytes(&self) -> Vec<u8> {
        let pad = (8 - self.len % 8) % 8;
        if pad == 0 {
            return self.bytes.clone();
        }

        let mut out = Vec::with_capacity(self.bytes.len());
        let mut carry = 0u8;
        for &byte in &self.bytes {
            out.push(carry | (byte >> pad));
            carry = byte << (8 - pad);
        }

        out
    }

    /// Keeps the last `count` bits, dropping everything in front of them.
    pub fn trailing(&self, count: usize) -> Result<Self> {
        if count > self.len {
            return Err(LowbitError::InsufficientBits {
                required: count,
                available: self.len,
            });
        }
        if count == 0 {
            return Ok(Self::new());
        }

        let skip = self.len - count;
        let mut reader = BitReader::endian(&self.bytes[skip / 8..], BigEndian);
        if skip % 8 != 0 {
            reader.skip((skip % 8) as u32)?;
        }

        let mut writer = BitWriter::endian(Vec::with_capacity(count.div_ceil(8)), BigEndian);
        let mut remaining = count;
        while remaining > 0 {
            let chunk = remaining.min(64) as u32;
            let value: u64 = reader.read(chunk)?;
            writer.write(chunk, value)?;
            remaining -= chunk as usize;
        }
        writer.byte_align()?;

        Ok(Self::from_raw_parts(writer.into_writer(), count))
    }

    fn bit(&self, index: usize) -> bool {
        self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut bits = Self::new();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(pattern: &str) -> BitSequence {
        pattern.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn should_expose_bytes_msb_first() {
        let b = BitSequence::from_bytes(&[0b1000_0001, 0b0100_0000]);

        assert_eq!(b.len(), 16);
        assert_eq!(b.get(0), Some(true));
        assert_eq!(b.get(1), Some(false));
        assert_eq!(b.get(7), Some(true));
        assert_eq!(b.get(9), Some(true));
        assert_eq!(b.get(16), None);
    }

    #[test]
    fn should_give_back_aligned_bytes_unchanged() {
        let b = BitSequence::from_bytes(b"Hello");

        assert_eq!(b.to_bytes(), b"Hello".to_vec());
    }

    #[test]
    fn should_pad_unaligned_bits_on_the_left() {
        // 0b1_0000_0001 -> 0b0000_0001 0b0000_0001
        let b = bits("100000001");

        assert_eq!(b.to_bytes(), vec![0x01, 0x01]);
        assert_eq!(bits("101").to_bytes(), vec![0b101]);
    }

    #[test]
    fn should_keep_only_the_trailing_bits() {
        let b = bits("0011010011110000111");

        assert_eq!(b.trailing(5).unwrap(), bits("00111"));
        assert_eq!(b.trailing(16).unwrap(), bits("1010011110000111"));
        assert_eq!(b.trailing(0).unwrap(), BitSequence::new());
        assert_eq!(b.trailing(b.len()).unwrap(), b);
    }

    #[test]
    fn should_copy_long_trailing_runs() {
        let data: Vec<u8> = (0..=255).collect();
        let mut b = bits("101");
        for bit in BitSequence::from_bytes(&data).iter() {
            b.push(bit);
        }

        let tail = b.trailing(data.len() * 8).unwrap();
        assert_eq!(tail.to_bytes(), data);
    }

    #[test]
    fn should_refuse_more_trailing_bits_than_present() {
        let result = bits("101").trailing(4);

        assert!(matches!(
            result,
            Err(LowbitError::InsufficientBits {
                required: 4,
                available: 3
            })
        ));
    }

    #[test]
    fn should_keep_padding_bits_zeroed() {
        let b = BitSequence::from_raw_parts(vec![0xff, 0xff], 12);

        assert_eq!(b.as_raw_bytes(), &[0xff, 0xf0]);
        assert_eq!(b, bits("111111111111"));
    }
}
