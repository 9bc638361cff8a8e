//! Bitstream I/O utilities for superframe parsing.
//!
//! Wraps a [`bitstream_io::BitReader`] with the read semantics the ATRAC9 block
//! grammar relies on: bits requested past the end of the buffer read as zero
//! instead of failing, and the number of bits consumed beyond the end is kept
//! so the caller can decide whether that is worth reporting.

use std::io;
use std::io::SeekFrom;

use bitstream_io::{BigEndian, BitRead, BitReader};

#[derive(Debug)]
pub struct BitstreamIoReader<R: io::Read + io::Seek> {
    bs: BitReader<R, BigEndian>,
    len: u64,
    overrun: u64,
}

pub type BsIoSliceReader<'a> = BitstreamIoReader<io::Cursor<&'a [u8]>>;

/// Two's complement sign extension of the low `bits` bits of `value`.
#[inline(always)]
pub fn sign_extend(value: u32, bits: u32) -> i32 {
    if bits == 0 || bits >= 32 {
        return value as i32;
    }
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}

impl<R> BitstreamIoReader<R>
where
    R: io::Read + io::Seek,
{
    pub fn new(read: R, len_bytes: u64) -> Self {
        Self {
            bs: BitReader::new(read),
            len: len_bytes << 3,
            overrun: 0,
        }
    }

    #[inline(always)]
    fn read_in_bounds(&mut self, n: u32, avail: u64) -> io::Result<u32> {
        if n as u64 <= avail {
            self.bs.read_unsigned_var::<u32>(n)
        } else {
            let tail = avail as u32;
            let value = self.bs.read_unsigned_var::<u32>(tail)?;
            Ok(value << (n - tail))
        }
    }

    /// Returns the next `n` bits (at most 32) without advancing.
    #[inline(always)]
    pub fn peek_n(&mut self, n: u32) -> io::Result<u32> {
        let avail = self.available()?;
        if n == 0 || avail == 0 {
            return Ok(0);
        }

        let start = self.bs.position_in_bits()?;
        let value = self.read_in_bounds(n, avail)?;
        self.bs.seek_bits(SeekFrom::Start(start))?;

        Ok(value)
    }

    #[inline(always)]
    pub fn get(&mut self) -> io::Result<bool> {
        Ok(self.get_n(1)? == 1)
    }

    #[inline(always)]
    pub fn get_n(&mut self, n: u32) -> io::Result<u32> {
        if n == 0 {
            return Ok(0);
        }

        let avail = self.available()?;
        if avail == 0 {
            self.overrun += n as u64;
            return Ok(0);
        }

        let value = self.read_in_bounds(n, avail)?;
        if n as u64 > avail {
            self.overrun += n as u64 - avail;
        }

        Ok(value)
    }

    #[inline(always)]
    pub fn get_s(&mut self, n: u32) -> io::Result<i32> {
        self.get_n(n).map(|value| sign_extend(value, n))
    }

    /// Reads an `n`-bit value stored with an offset of `(1 << (n - 1)) - bias`.
    #[inline(always)]
    pub fn get_offset_binary(&mut self, n: u32, bias: i32) -> io::Result<i32> {
        let offset = (1i32 << (n - 1)) - bias;
        Ok(self.get_n(n)? as i32 - offset)
    }

    #[inline(always)]
    pub fn skip_n(&mut self, n: u64) -> io::Result<()> {
        let avail = self.available()?;
        let in_bounds = n.min(avail);

        let mut left = in_bounds;
        while left > 0 {
            let step = left.min(u32::MAX as u64);
            self.bs.skip(step as u32)?;
            left -= step;
        }

        self.overrun += n - in_bounds;
        Ok(())
    }

    /// Advances to the next multiple of `multiple` bits.
    #[inline(always)]
    pub fn align(&mut self, multiple: u64) -> io::Result<()> {
        let position = self.position()?;
        let rem = position % multiple;
        if rem != 0 {
            self.skip_n(multiple - rem)?;
        }

        Ok(())
    }

    #[inline(always)]
    pub fn available(&mut self) -> io::Result<u64> {
        if self.overrun > 0 {
            return Ok(0);
        }
        self.bs
            .position_in_bits()
            .map(|pos| self.len.saturating_sub(pos))
    }

    #[inline(always)]
    pub fn position(&mut self) -> io::Result<u64> {
        self.bs.position_in_bits().map(|pos| pos + self.overrun)
    }

    /// Bits consumed beyond the end of the buffer.
    pub fn overrun(&self) -> u64 {
        self.overrun
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
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

/// Packs `(bit_count, value)` fields MSB-first, zero-padding the last byte.
#[cfg(test)]
pub(crate) fn pack_bits(fields: &[(u32, u32)]) -> Vec<u8> {
    use bitstream_io::{BitWrite, BitWriter};

    let mut writer: BitWriter<Vec<u8>, BigEndian> = BitWriter::new(Vec::new());
    for &(bits, value) in fields {
        if bits > 0 {
            writer
                .write_unsigned_var::<u32>(bits, value)
                .expect("write to Vec");
        }
    }
    writer.byte_align().expect("align Vec writer");
    writer.into_writer()
}
