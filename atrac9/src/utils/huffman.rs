//! Table-driven Huffman decoding.
//!
//! Codebooks are stored as `(code, bit length)` pairs per symbol and expanded
//! once into a flat lookup table indexed by the next `max_bit_size` bits.

use std::io;

use crate::utils::bitstream_io::{BitstreamIoReader, sign_extend};

/// Raw codeword data a [`HuffmanCodebook`] is built from.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanSource {
    pub codes: &'static [u16],
    pub bits: &'static [u8],
    pub value_count_power: u32,
}

impl HuffmanSource {
    pub const fn new(codes: &'static [u16], bits: &'static [u8], value_count_power: u32) -> Self {
        Self {
            codes,
            bits,
            value_count_power,
        }
    }
}

#[derive(Debug)]
pub struct HuffmanCodebook {
    bits: &'static [u8],
    /// Number of coefficients packed into one symbol.
    pub value_count: usize,
    pub value_count_power: u32,
    /// Width of each packed coefficient.
    pub value_bits: u32,
    pub value_max: u32,
    pub max_bit_size: u32,
    lookup: Vec<u16>,
}

impl HuffmanCodebook {
    pub fn new(source: &HuffmanSource) -> Self {
        let symbols = source.codes.len();
        let value_bits = symbols.trailing_zeros() >> source.value_count_power;
        let max_bit_size = source.bits.iter().copied().max().unwrap_or(0) as u32;

        let mut lookup = vec![0u16; 1 << max_bit_size];
        for (symbol, (&code, &bits)) in source.codes.iter().zip(source.bits).enumerate() {
            if bits == 0 {
                continue;
            }

            let unused = max_bit_size - bits as u32;
            let start = (code as usize) << unused;
            lookup[start..start + (1 << unused)].fill(symbol as u16);
        }

        Self {
            bits: source.bits,
            value_count: 1 << source.value_count_power,
            value_count_power: source.value_count_power,
            value_bits,
            value_max: 1 << value_bits,
            max_bit_size,
            lookup,
        }
    }

    /// Decodes one symbol.
    #[inline(always)]
    pub fn read<R: io::Read + io::Seek>(&self, reader: &mut BitstreamIoReader<R>) -> io::Result<u32> {
        let code = reader.peek_n(self.max_bit_size)?;
        let symbol = self.lookup[code as usize];
        reader.skip_n(self.bits[symbol as usize] as u64)?;

        Ok(symbol as u32)
    }

    /// Decodes one symbol and sign-extends it to `value_bits`.
    #[inline(always)]
    pub fn read_signed<R: io::Read + io::Seek>(
        &self,
        reader: &mut BitstreamIoReader<R>,
    ) -> io::Result<i32> {
        self.read(reader)
            .map(|symbol| sign_extend(symbol, self.value_bits))
    }

    /// Unpacks grouped symbols into individual signed coefficients, low bits first.
    pub fn unpack_values(&self, symbols: &[u32], out: &mut [i32]) {
        let mask = (1u32 << self.value_bits) - 1;
        for (group, &symbol) in out.chunks_mut(self.value_count).zip(symbols) {
            let mut value = symbol;
            for slot in group {
                *slot = sign_extend(value & mask, self.value_bits);
                value >>= self.value_bits;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bitstream_io::{BsIoSliceReader, pack_bits};
    use crate::utils::huffman_tables::{SCALE_FACTOR_SIGNED, SCALE_FACTOR_UNSIGNED, SPECTRUM_A};

    #[test]
    fn test_every_code_decodes_with_any_suffix() -> io::Result<()> {
        let sources = SPECTRUM_A
            .iter()
            .flatten()
            .chain(SCALE_FACTOR_UNSIGNED.iter())
            .chain(SCALE_FACTOR_SIGNED.iter())
            .flatten();

        for source in sources {
            let book = HuffmanCodebook::new(source);
            for (symbol, (&code, &bits)) in source.codes.iter().zip(source.bits).enumerate() {
                if bits == 0 {
                    continue;
                }
                let unused = book.max_bit_size - bits as u32;
                for suffix in 0..(1u32 << unused) {
                    let word = ((code as u32) << unused) | suffix;
                    let data = pack_bits(&[(book.max_bit_size, word)]);
                    let mut reader = BsIoSliceReader::from_slice(&data);
                    assert_eq!(book.read(&mut reader)?, symbol as u32);
                    assert_eq!(reader.position()?, bits as u64);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn test_codebook_shape() {
        let two_per_symbol = SPECTRUM_A[2][0].as_ref().map(HuffmanCodebook::new);
        let book = two_per_symbol.expect("precision 2 codebook");
        assert_eq!(book.value_count, 2);
        assert_eq!(book.value_bits, 2);
        assert_eq!(book.value_max, 4);

        let sf = SCALE_FACTOR_UNSIGNED[6].as_ref().map(HuffmanCodebook::new);
        let sf = sf.expect("6-bit scale factor codebook");
        assert_eq!(sf.value_count, 1);
        assert_eq!(sf.value_bits, 6);
        assert_eq!(sf.value_max, 64);
    }

    #[test]
    fn test_unpack_values_low_bits_first() {
        let book = HuffmanCodebook::new(&SPECTRUM_A[2][0].expect("codebook"));
        let mut out = [0i32; 4];
        // symbol 0b01_11: first value 0b11 = -1, second 0b01 = 1
        book.unpack_values(&[0b0111, 0b1000], &mut out);
        assert_eq!(out, [-1, 1, 0, -2]);
    }
}
