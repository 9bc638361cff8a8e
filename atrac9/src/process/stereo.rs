//! Intensity stereo reconstruction.

use crate::structs::block::Block;
use crate::utils::tables::QUANT_UNIT_TO_COEFF_INDEX;

/// Copies the primary channel into the secondary channel for units above the
/// stereo band, negated where the unit's sign bit is set.
pub fn apply_intensity_stereo(block: &mut Block) {
    let total_units = block.header.quantization_unit_count;
    let stereo_units = block.header.stereo_quantization_unit;
    if stereo_units >= total_units {
        return;
    }

    let signs = block.header.joint_stereo_signs;
    let Some((source, dest)) = block.stereo_pair_mut() else {
        return;
    };

    for unit in stereo_units..total_units {
        let range = QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1];
        let negate = signs[unit] > 0;

        for (out, &value) in dest.spectra[range.clone()].iter_mut().zip(&source.spectra[range]) {
            *out = if negate { -value } else { value };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::config::BlockType;

    fn stereo_block(primary: usize) -> Block {
        let mut block = Block::new(BlockType::Stereo, 0, 6);
        block.header.quantization_unit_count = 10;
        block.header.stereo_quantization_unit = 8;
        block.header.primary_channel_index = primary;
        block.header.joint_stereo_signs[9] = 1;
        block.channels[0].spectra[..24].fill(1.0);
        block.channels[1].spectra[..24].fill(2.0);
        block
    }

    #[test]
    fn test_secondary_follows_primary() {
        let mut block = stereo_block(0);
        apply_intensity_stereo(&mut block);

        let secondary = &block.channels[1].spectra;
        assert_eq!(&secondary[..16], &[2.0; 16]);
        assert_eq!(&secondary[16..20], &[1.0; 4]);
        assert_eq!(&secondary[20..24], &[-1.0; 4]);
        assert_eq!(&block.channels[0].spectra[..24], &[1.0; 24]);
    }

    #[test]
    fn test_second_channel_as_primary() {
        let mut block = stereo_block(1);
        apply_intensity_stereo(&mut block);

        assert_eq!(&block.channels[0].spectra[16..20], &[2.0; 4]);
        assert_eq!(&block.channels[0].spectra[20..24], &[-2.0; 4]);
    }

    #[test]
    fn test_mono_is_untouched() {
        let mut block = Block::new(BlockType::Mono, 0, 6);
        block.header.quantization_unit_count = 10;
        block.channels[0].spectra[..24].fill(1.0);
        apply_intensity_stereo(&mut block);

        assert_eq!(&block.channels[0].spectra[..24], &[1.0; 24]);
    }
}
