//! Bit-level reader used by every decoding stage.
//!
//! Wraps [`bitstream_io::BitReader`] in big-endian (MSB-first) mode and adds
//! explicit bounds tracking, so that running out of bits is reported as
//! [`BitstreamError::Exhausted`] instead of being padded with zeros.

use std::io;
use std::io::SeekFrom;

use bitstream_io::{BigEndian, BitRead, BitReader, UnsignedInteger};

use crate::utils::errors::BitstreamError;

#[derive(Debug)]
pub struct BitstreamIoReader<R: io::Read + io::Seek> {
    bs: BitReader<R, BigEndian>,
    len: u64,
    limit: u64,
}

pub type BsIoSliceReader<'a> = BitstreamIoReader<io::Cursor<&'a [u8]>>;

impl<R> BitstreamIoReader<R>
where
    R: io::Read + io::Seek,
{
    pub fn new(read: R, len_bytes: u64) -> Self {
        Self {
            bs: BitReader::new(read),
            len: len_bytes << 3,
            limit: len_bytes << 3,
        }
    }

    /// Total length of the underlying buffer in bits.
    #[inline(always)]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Treats every bit at or after `end` as unavailable.
    ///
    /// The limit is clamped to the buffer and only affects reads; `seek`
    /// still accepts any offset inside the buffer.
    pub fn set_limit(&mut self, end: u64) {
        self.limit = end.min(self.len);
    }

    pub fn clear_limit(&mut self) {
        self.limit = self.len;
    }

    #[inline(always)]
    pub fn get(&mut self) -> Result<bool, BitstreamError> {
        self.ensure(1)?;
        Ok(self.bs.read_bit()?)
    }

    /// Reads `n` bits as an unsigned integer, MSB first.
    #[inline(always)]
    pub fn get_n<I: UnsignedInteger>(&mut self, n: u32) -> Result<I, BitstreamError> {
        self.ensure(n)?;
        Ok(self.bs.read_unsigned_var(n)?)
    }

    /// Reads the next `n` bits (at most 32) and advances the cursor.
    ///
    /// Reading zero bits returns 0 without touching the stream.
    #[inline(always)]
    pub fn read(&mut self, n: u32) -> Result<u32, BitstreamError> {
        if n == 0 {
            return Ok(0);
        }

        self.get_n::<u32>(n)
    }

    /// Returns the next `n` bits without advancing, or `None` if fewer remain.
    pub fn peek(&mut self, n: u32) -> Option<u32> {
        let position = self.position().ok()?;
        let value = self.read(n).ok()?;
        self.bs.seek_bits(SeekFrom::Start(position)).ok()?;

        Some(value)
    }

    /// Moves the cursor to an absolute bit offset.
    #[inline(always)]
    pub fn seek(&mut self, bit_offset: u64) -> Result<u64, BitstreamError> {
        if bit_offset > self.len {
            return Err(BitstreamError::SeekOutOfBounds {
                target: bit_offset,
                len: self.len,
            });
        }

        Ok(self.bs.seek_bits(SeekFrom::Start(bit_offset))?)
    }

    /// Moves the cursor back by `n` bits.
    #[inline(always)]
    pub fn rewind(&mut self, n: u64) -> Result<u64, BitstreamError> {
        let position = self.position()?;
        let Some(target) = position.checked_sub(n) else {
            return Err(BitstreamError::SeekOutOfBounds {
                target: 0,
                len: self.len,
            });
        };

        self.seek(target)
    }

    #[inline(always)]
    pub fn skip_n(&mut self, n: u32) -> Result<(), BitstreamError> {
        self.ensure(n)?;
        Ok(self.bs.skip(n)?)
    }

    #[inline(always)]
    pub fn available(&mut self) -> Result<u64, BitstreamError> {
        Ok(self.limit.saturating_sub(self.position()?))
    }

    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, BitstreamError> {
        Ok(self.bs.position_in_bits()?)
    }

    #[inline(always)]
    fn ensure(&mut self, n: u32) -> Result<(), BitstreamError> {
        let position = self.position()?;
        let available = self.limit.saturating_sub(position);
        if n as u64 > available {
            return Err(BitstreamError::Exhausted {
                requested: n,
                position,
                available,
            });
        }

        Ok(())
    }
}

impl<'a> BsIoSliceReader<'a> {
    pub fn from_slice(buf: &'a [u8]) -> Self {
        let len = buf.len() as u64;
        let read = io::Cursor::new(buf);

        Self::new(read, len)
    }
}

impl Default for BsIoSliceReader<'_> {
    fn default() -> Self {
        Self::from_slice(&[])
    }
}


/// MSB-first bit packer for building test bitstreams.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct BitPacker {
    bytes: Vec<u8>,
    bits: u64,
}

#[cfg(test)]
impl BitPacker {
    pub(crate) fn push(&mut self, value: u32, n: u32) -> &mut Self {
        for shift in (0..n).rev() {
            if self.bits % 8 == 0 {
                self.bytes.push(0);
            }
            if (value >> shift) & 1 == 1 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 0x80 >> (self.bits % 8);
            }
            self.bits += 1;
        }
        self
    }

    pub(crate) fn push_str(&mut self, bits: &str) -> &mut Self {
        for c in bits.chars().filter(|c| !c.is_whitespace()) {
            self.push((c == '1') as u32, 1);
        }
        self
    }

    pub(crate) fn bit_len(&self) -> u64 {
        self.bits
    }

    /// Returns the packed bytes, zero padded to a byte boundary.
    pub(crate) fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}
