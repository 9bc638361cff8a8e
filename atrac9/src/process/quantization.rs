//! Spectrum reconstruction from quantized coefficients.

use crate::structs::block::Block;
use crate::structs::channel::Channel;
use crate::utils::tables::{QUANT_UNIT_TO_COEFF_INDEX, TABLES};

pub fn dequantize_spectra(block: &mut Block) {
    for channel in &mut block.channels {
        dequantize_channel(channel);
    }
}

fn dequantize_channel(channel: &mut Channel) {
    let tables = &*TABLES;
    channel.spectra.fill(0.0);

    for unit in 0..channel.coded_quant_units {
        let step = tables.quantizer_step_size[channel.precisions[unit] as usize];
        let step_fine = tables.quantizer_fine_step_size[channel.precisions_fine[unit] as usize];
        let range = QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1];

        for ((out, &coarse), &fine) in channel.spectra[range.clone()]
            .iter_mut()
            .zip(&channel.quantized_spectra[range.clone()])
            .zip(&channel.quantized_spectra_fine[range])
        {
            *out = coarse as f64 * step + fine as f64 * step_fine;
        }
    }
}

/// Applies `2^(sf - 15)` to every unit below the block's unit count.
pub fn scale_spectrum(block: &mut Block) {
    let units = block.header.quantization_unit_count;

    for channel in &mut block.channels {
        for unit in 0..units {
            let scale = TABLES.spectrum_scale[channel.scale_factors[unit] as usize];
            let range = QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1];
            for value in &mut channel.spectra[range] {
                *value *= scale;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::config::BlockType;

    #[test]
    fn test_dequantize_and_scale() {
        let mut block = Block::new(BlockType::Mono, 0, 6);
        block.header.quantization_unit_count = 2;

        let channel = &mut block.channels[0];
        channel.coded_quant_units = 1;
        channel.precisions[..2].copy_from_slice(&[1, 3]);
        channel.precisions_fine[0] = 1;
        channel.quantized_spectra[..4].copy_from_slice(&[1, -1, 7, 7]);
        channel.quantized_spectra_fine[..2].copy_from_slice(&[0, 3]);
        channel.scale_factors[..2].copy_from_slice(&[16, 15]);
        channel.spectra[10] = 5.0;

        dequantize_spectra(&mut block);
        let spectra = &block.channels[0].spectra;
        let third = 2.0 / 3.0;
        assert!((spectra[0] - third).abs() < 1e-12);
        assert!((spectra[1] - (-third + 3.0 * third / 65535.0)).abs() < 1e-12);
        // unit 1 is not coded
        assert_eq!(&spectra[2..4], &[0.0, 0.0]);
        assert_eq!(spectra[10], 0.0);

        scale_spectrum(&mut block);
        let spectra = &block.channels[0].spectra;
        assert!((spectra[0] - 2.0 * third).abs() < 1e-12);
    }
}
