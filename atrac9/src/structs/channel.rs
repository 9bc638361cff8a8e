//! Per-channel decoding state.
//!
//! A channel owns everything that survives from one frame to the next: the
//! scale factor baseline, the band extension generator and the IMDCT overlap.

use anyhow::{Result, anyhow};

use crate::process::allocation;
use crate::structs::block::BlockHeader;
use crate::structs::scale_factors;
use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::SpectrumError;
use crate::utils::mdct::Imdct;
use crate::utils::rng::Atrac9Rng;
use crate::utils::tables::{
    MAX_FRAME_SAMPLES, MAX_QUANT_UNITS, QUANT_UNIT_TO_CODEBOOK_INDEX, QUANT_UNIT_TO_COEFF_COUNT,
    QUANT_UNIT_TO_COEFF_INDEX, TABLES, max_huff_precision,
};

/// One slot past the last unit, used as a sentinel while picking codebooks.
pub const SCALE_FACTOR_SLOTS: usize = MAX_QUANT_UNITS + 2;

#[derive(Debug, Clone)]
pub struct Channel {
    /// Position within the block, 0 or 1.
    pub channel_index: usize,
    pub coded_quant_units: usize,

    pub scale_factor_coding_mode: u32,
    pub scale_factors: [i32; SCALE_FACTOR_SLOTS],
    pub scale_factors_prev: [i32; SCALE_FACTOR_SLOTS],

    pub precisions: [i32; MAX_QUANT_UNITS],
    pub precisions_fine: [i32; MAX_QUANT_UNITS],
    pub precision_mask: [i32; MAX_QUANT_UNITS],
    pub codebook_set: [usize; MAX_QUANT_UNITS],

    pub quantized_spectra: [i32; MAX_FRAME_SAMPLES],
    pub quantized_spectra_fine: [i32; MAX_FRAME_SAMPLES],
    pub spectra: [f64; MAX_FRAME_SAMPLES],
    pub pcm: [f64; MAX_FRAME_SAMPLES],

    pub bex_mode: usize,
    pub bex_value_count: usize,
    pub bex_values: [u32; 4],
    pub bex_scales: [f64; 6],
    /// Seeded from the scale factors the first time noise is needed.
    pub rng: Option<Atrac9Rng>,

    pub imdct: Imdct,
}

impl Channel {
    pub fn new(channel_index: usize, frame_samples_power: u32) -> Self {
        Self {
            channel_index,
            coded_quant_units: 0,
            scale_factor_coding_mode: 0,
            scale_factors: [0; SCALE_FACTOR_SLOTS],
            scale_factors_prev: [0; SCALE_FACTOR_SLOTS],
            precisions: [0; MAX_QUANT_UNITS],
            precisions_fine: [0; MAX_QUANT_UNITS],
            precision_mask: [0; MAX_QUANT_UNITS],
            codebook_set: [0; MAX_QUANT_UNITS],
            quantized_spectra: [0; MAX_FRAME_SAMPLES],
            quantized_spectra_fine: [0; MAX_FRAME_SAMPLES],
            spectra: [0.0; MAX_FRAME_SAMPLES],
            pcm: [0.0; MAX_FRAME_SAMPLES],
            bex_mode: 0,
            bex_value_count: 0,
            bex_values: [0; 4],
            bex_scales: [0.0; 6],
            rng: None,
            imdct: Imdct::new(frame_samples_power),
        }
    }

    pub fn is_primary(&self, header: &BlockHeader) -> bool {
        self.channel_index == header.primary_channel_index
    }

    /// Reads one channel of a mono or stereo block.
    pub fn read(
        &mut self,
        reader: &mut BsIoSliceReader,
        header: &BlockHeader,
        high_sample_rate: bool,
        first_channel: Option<&[i32; SCALE_FACTOR_SLOTS]>,
    ) -> Result<()> {
        self.coded_quant_units = if self.is_primary(header) {
            header.quantization_unit_count
        } else {
            header.stereo_quantization_unit
        };

        scale_factors::read(reader, header, self, first_channel)?;
        allocation::calculate_mask(self, header.quantization_unit_count);
        allocation::calculate_precisions(self, header);
        self.calculate_codebook_set(high_sample_rate);

        self.read_spectra(reader, high_sample_rate)?;
        self.read_spectra_fine(reader)?;

        Ok(())
    }

    /// Reads the single channel of an LFE block.
    pub fn read_lfe(&mut self, reader: &mut BsIoSliceReader, header: &BlockHeader) -> Result<()> {
        let units = header.quantization_unit_count;

        self.scale_factors.fill(0);
        for value in &mut self.scale_factors[..units] {
            *value = reader.get_n(5)? as i32;
        }

        let precision = if header.reuse_band_params { 8 } else { 4 };
        self.precisions[..units].fill(precision);
        self.precisions_fine[..units].fill(0);
        self.coded_quant_units = units;

        self.quantized_spectra.fill(0);
        for unit in 0..units {
            let bits = self.precisions[unit] as u32 + 1;
            let range = QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1];
            for value in &mut self.quantized_spectra[range] {
                *value = reader.get_s(bits)?;
            }
        }

        Ok(())
    }

    /// Picks the spectrum codebook family for each unit from the shape of
    /// the scale factor curve around it.
    fn calculate_codebook_set(&mut self, high_sample_rate: bool) {
        self.codebook_set.fill(0);

        let units = self.coded_quant_units;
        if units <= 1 || high_sample_rate {
            return;
        }

        // peaks at the last coded unit are judged against a flat neighbour
        let sf = &mut self.scale_factors;
        let saved = sf[units];
        sf[units] = sf[units - 1];

        let average = if units > 12 {
            (sf[..12].iter().sum::<i32>() + 6) / 12
        } else {
            0
        };

        for i in 8..units {
            let (prev, next) = (sf[i - 1], sf[i + 1]);
            if sf[i] - prev.min(next) >= 3 || sf[i] - prev + sf[i] - next >= 3 {
                self.codebook_set[i] = 1;
            }
        }

        for i in 12..units {
            if self.codebook_set[i] != 0 {
                continue;
            }
            let min = sf[i - 1].min(sf[i + 1]);
            let bias = (QUANT_UNIT_TO_COEFF_COUNT[i] == 16) as i32;
            if sf[i] - min >= 2 && sf[i] >= average - bias {
                self.codebook_set[i] = 1;
            }
        }

        sf[units] = saved;
    }

    fn read_spectra(&mut self, reader: &mut BsIoSliceReader, high_sample_rate: bool) -> Result<()> {
        let max_huff = max_huff_precision(high_sample_rate);
        let mut symbols = [0u32; 16];

        self.quantized_spectra.fill(0);

        for unit in 0..self.coded_quant_units {
            let count = QUANT_UNIT_TO_COEFF_COUNT[unit];
            let start = QUANT_UNIT_TO_COEFF_INDEX[unit];
            let out = &mut self.quantized_spectra[start..start + count];
            let precision = self.precisions[unit] as usize + 1;

            if precision <= max_huff {
                let set = self.codebook_set[unit];
                let index = QUANT_UNIT_TO_CODEBOOK_INDEX[unit];
                let codebook = TABLES.spectrum[set][precision][index]
                    .as_ref()
                    .ok_or_else(|| {
                        anyhow!(SpectrumError::MissingCodebook {
                            set,
                            precision,
                            index,
                        })
                    })?;

                let groups = count >> codebook.value_count_power;
                for symbol in &mut symbols[..groups] {
                    *symbol = codebook.read(reader)?;
                }
                codebook.unpack_values(&symbols[..groups], out);
            } else {
                for value in out {
                    *value = reader.get_s(precision as u32)?;
                }
            }
        }

        Ok(())
    }

    fn read_spectra_fine(&mut self, reader: &mut BsIoSliceReader) -> Result<()> {
        self.quantized_spectra_fine.fill(0);

        for unit in 0..self.coded_quant_units {
            let fine = self.precisions_fine[unit];
            if fine <= 0 {
                continue;
            }

            let range = QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1];
            for value in &mut self.quantized_spectra_fine[range] {
                *value = reader.get_s(fine as u32 + 1)?;
            }
        }

        Ok(())
    }
}
