//! Blocks and their band layout parameters.
//!
//! A frame holds one block per entry of the channel configuration. Mono and
//! stereo blocks share the full grammar; LFE blocks use a reduced one with
//! two fixed-precision units.
//!
//! ## Block Structure
//!
//! - **Header**: first-in-superframe and band parameter reuse flags
//! - **Band parameters**: coded, stereo and extension band counts
//! - **Gradient**: bit allocation curve
//! - **Stereo parameters**: primary channel and intensity signs
//! - **Extension parameters**: band extension mode and values
//! - **Channels**: scale factors and spectra

use anyhow::{Result, bail};
use log::trace;

use crate::process::allocation;
use crate::process::band_extension::bex_group_info;
use crate::structs::channel::Channel;
use crate::structs::config::{Atrac9Config, BlockType};
use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::BlockError;
use crate::utils::tables::{
    BAND_TO_QUANT_UNIT_COUNT, BEX_DATA_LENGTHS, BEX_ENCODED_VALUE_COUNTS, GRADIENT_CURVE_LEN,
    MAX_BAND_COUNT, MAX_QUANT_UNITS, max_extension_band, min_band_count,
};

/// Quantization units of an LFE block.
pub const LFE_QUANT_UNITS: usize = 2;

/// Block parameters shared by the channels of a block.
///
/// Band parameters persist across frames so that later frames of a
/// superframe may reuse them.
#[derive(Debug, Clone)]
pub struct BlockHeader {
    pub first_in_superframe: bool,
    pub reuse_band_params: bool,

    pub band_count: usize,
    pub stereo_band: usize,
    pub extension_band: usize,
    pub quantization_unit_count: usize,
    pub stereo_quantization_unit: usize,
    pub extension_unit: usize,
    /// Units covered by the scale factors of the previous frame.
    pub quantization_units_prev: usize,

    pub gradient_mode: u32,
    pub gradient_start_unit: usize,
    pub gradient_start_value: i32,
    pub gradient_end_unit: usize,
    pub gradient_end_value: i32,
    pub gradient_boundary: usize,
    pub gradient: [i32; GRADIENT_CURVE_LEN],

    pub primary_channel_index: usize,
    pub has_joint_stereo_signs: bool,
    pub joint_stereo_signs: [u8; MAX_QUANT_UNITS],

    pub band_extension_enabled: bool,
    pub has_extension_data: bool,
    pub extension_data_length: u32,
    /// Mode field of extension data that is skipped when band extension is off.
    pub extension_mode: u32,
}

impl Default for BlockHeader {
    fn default() -> Self {
        Self {
            first_in_superframe: false,
            reuse_band_params: false,
            band_count: 0,
            stereo_band: 0,
            extension_band: 0,
            quantization_unit_count: 0,
            stereo_quantization_unit: 0,
            extension_unit: 0,
            quantization_units_prev: 0,
            gradient_mode: 0,
            gradient_start_unit: 0,
            gradient_start_value: 0,
            gradient_end_unit: 0,
            gradient_end_value: 0,
            gradient_boundary: 0,
            gradient: [0; GRADIENT_CURVE_LEN],
            primary_channel_index: 0,
            has_joint_stereo_signs: false,
            joint_stereo_signs: [0; MAX_QUANT_UNITS],
            band_extension_enabled: false,
            has_extension_data: false,
            extension_data_length: 0,
            extension_mode: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Block {
    pub block_type: BlockType,
    pub block_index: usize,
    pub header: BlockHeader,
    pub channels: Vec<Channel>,
}

impl Block {
    pub fn new(block_type: BlockType, block_index: usize, frame_samples_power: u32) -> Self {
        let channels = (0..block_type.channel_count())
            .map(|i| Channel::new(i, frame_samples_power))
            .collect();

        Self {
            block_type,
            block_index,
            header: BlockHeader::default(),
            channels,
        }
    }

    /// Returns `(primary, secondary)` of a stereo block.
    pub fn stereo_pair_mut(&mut self) -> Option<(&mut Channel, &mut Channel)> {
        let first_is_primary = self.header.primary_channel_index == 0;
        match self.channels.as_mut_slice() {
            [first, second] => Some(if first_is_primary {
                (first, second)
            } else {
                (second, first)
            }),
            _ => None,
        }
    }

    pub fn read(
        &mut self,
        reader: &mut BsIoSliceReader,
        config: &Atrac9Config,
        frame_index: usize,
    ) -> Result<()> {
        self.read_header(reader, frame_index)?;

        if self.block_type == BlockType::Lfe {
            self.header.quantization_unit_count = LFE_QUANT_UNITS;
            self.channels[0].read_lfe(reader, &self.header)?;
        } else {
            self.read_standard(reader, config)?;
        }

        reader.align(8)?;

        Ok(())
    }

    fn read_header(&mut self, reader: &mut BsIoSliceReader, frame_index: usize) -> Result<()> {
        let expected_first = frame_index == 0;
        let header = &mut self.header;

        header.first_in_superframe = !reader.get()?;
        header.reuse_band_params = reader.get()?;

        if header.first_in_superframe != expected_first {
            bail!(BlockError::FirstInSuperframeMismatch {
                read: header.first_in_superframe,
                frame_index,
            });
        }

        if expected_first && header.reuse_band_params && self.block_type != BlockType::Lfe {
            bail!(BlockError::ReuseOnFirstFrame);
        }

        Ok(())
    }

    fn read_standard(&mut self, reader: &mut BsIoSliceReader, config: &Atrac9Config) -> Result<()> {
        if !self.header.reuse_band_params {
            self.read_band_params(reader, config)?;
        }

        self.read_gradient_params(reader)?;
        allocation::create_gradient(&mut self.header);
        self.read_stereo_params(reader)?;
        self.read_extension_params(reader)?;

        let Block {
            header, channels, ..
        } = self;

        for index in 0..channels.len() {
            let (before, rest) = channels.split_at_mut(index);
            let first_channel = before.first().map(|c| &c.scale_factors);
            rest[0].read(reader, header, config.high_sample_rate, first_channel)?;
        }

        header.quantization_units_prev = if header.band_extension_enabled {
            header.extension_unit
        } else {
            header.quantization_unit_count
        };

        Ok(())
    }

    fn read_band_params(&mut self, reader: &mut BsIoSliceReader, config: &Atrac9Config) -> Result<()> {
        let min_band = min_band_count(config.high_sample_rate);
        let max_extension = max_extension_band(config.high_sample_rate);
        let max_band = MAX_BAND_COUNT[config.sample_rate_index as usize];
        let header = &mut self.header;

        header.band_count = reader.get_n(4)? as usize + min_band;
        if header.band_count > max_band {
            bail!(BlockError::BandCountTooHigh {
                band_count: header.band_count,
                max: max_band,
            });
        }
        header.quantization_unit_count = BAND_TO_QUANT_UNIT_COUNT[header.band_count];

        if self.block_type == BlockType::Stereo {
            header.stereo_band = reader.get_n(4)? as usize + min_band;
            if header.stereo_band > header.band_count {
                bail!(BlockError::StereoBandTooHigh {
                    stereo_band: header.stereo_band,
                    band_count: header.band_count,
                });
            }
            header.stereo_quantization_unit = BAND_TO_QUANT_UNIT_COUNT[header.stereo_band];
        } else {
            header.stereo_band = header.band_count;
            header.stereo_quantization_unit = header.quantization_unit_count;
        }

        header.band_extension_enabled = reader.get()?;
        if header.band_extension_enabled {
            header.extension_band = reader.get_n(4)? as usize + min_band;
            if header.extension_band < header.band_count || header.extension_band > max_extension {
                bail!(BlockError::ExtensionBandOutOfRange {
                    extension_band: header.extension_band,
                    min: header.band_count,
                    max: max_extension,
                });
            }
            header.extension_unit = BAND_TO_QUANT_UNIT_COUNT[header.extension_band];
        } else {
            header.extension_band = header.band_count;
            header.extension_unit = header.quantization_unit_count;
        }

        trace!(
            "Block {} bands: {} coded, {} stereo, {} extension",
            self.block_index, header.band_count, header.stereo_band, header.extension_band
        );

        Ok(())
    }

    fn read_gradient_params(&mut self, reader: &mut BsIoSliceReader) -> Result<()> {
        let header = &mut self.header;

        header.gradient_mode = reader.get_n(2)?;
        if header.gradient_mode > 0 {
            header.gradient_end_unit = 31;
            header.gradient_end_value = 31;
            header.gradient_start_unit = reader.get_n(5)? as usize;
            header.gradient_start_value = reader.get_n(5)? as i32;
        } else {
            header.gradient_start_unit = reader.get_n(6)? as usize;
            header.gradient_end_unit = reader.get_n(6)? as usize + 1;
            header.gradient_start_value = reader.get_n(5)? as i32;
            header.gradient_end_value = reader.get_n(5)? as i32;
        }

        header.gradient_boundary = reader.get_n(4)? as usize;

        if header.gradient_boundary > header.quantization_unit_count {
            bail!(BlockError::GradientBoundaryTooHigh {
                boundary: header.gradient_boundary,
                units: header.quantization_unit_count,
            });
        }

        let units = 1..GRADIENT_CURVE_LEN;
        if !units.contains(&header.gradient_start_unit)
            || !units.contains(&header.gradient_end_unit)
            || header.gradient_start_unit > header.gradient_end_unit
        {
            bail!(BlockError::GradientUnitsOutOfRange {
                start: header.gradient_start_unit,
                end: header.gradient_end_unit,
            });
        }

        let values = 0..32;
        if !values.contains(&header.gradient_start_value)
            || !values.contains(&header.gradient_end_value)
        {
            bail!(BlockError::GradientValuesOutOfRange {
                start: header.gradient_start_value,
                end: header.gradient_end_value,
            });
        }

        Ok(())
    }

    fn read_stereo_params(&mut self, reader: &mut BsIoSliceReader) -> Result<()> {
        if self.block_type != BlockType::Stereo {
            return Ok(());
        }

        let header = &mut self.header;
        header.primary_channel_index = reader.get_n(1)? as usize;
        header.has_joint_stereo_signs = reader.get()?;

        if header.has_joint_stereo_signs {
            for unit in header.stereo_quantization_unit..header.quantization_unit_count {
                header.joint_stereo_signs[unit] = reader.get_n(1)? as u8;
            }
        } else {
            header.joint_stereo_signs.fill(0);
        }

        Ok(())
    }

    fn read_extension_params(&mut self, reader: &mut BsIoSliceReader) -> Result<()> {
        let stereo = self.block_type == BlockType::Stereo;
        let mut band_class = 0;

        if self.header.band_extension_enabled {
            band_class = bex_group_info(self.header.quantization_unit_count)?[2];

            if stereo {
                read_bex_header(reader, &mut self.channels[1], band_class)?;
            } else {
                reader.skip_n(1)?;
            }
        }

        let header = &mut self.header;
        header.has_extension_data = reader.get()?;
        if !header.has_extension_data {
            return Ok(());
        }

        if !header.band_extension_enabled {
            header.extension_mode = reader.get_n(2)?;
            header.extension_data_length = reader.get_n(5)?;
            reader.skip_n(header.extension_data_length as u64)?;
            return Ok(());
        }

        read_bex_header(reader, &mut self.channels[0], band_class)?;

        header.extension_data_length = reader.get_n(5)?;
        if header.extension_data_length == 0 {
            return Ok(());
        }

        let data_end = reader.position()? + header.extension_data_length as u64;

        read_bex_values(reader, &mut self.channels[0], band_class)?;
        if stereo {
            read_bex_values(reader, &mut self.channels[1], band_class)?;
        }

        let position = reader.position()?;
        if position > data_end {
            bail!(BlockError::ExtensionDataOverrun {
                position,
                end: data_end,
            });
        }

        Ok(())
    }
}

fn read_bex_header(reader: &mut BsIoSliceReader, channel: &mut Channel, band_class: usize) -> Result<()> {
    let mode = reader.get_n(2)? as usize;

    channel.bex_mode = if band_class > 2 { mode } else { 4 };
    channel.bex_value_count = BEX_ENCODED_VALUE_COUNTS[channel.bex_mode][band_class];
    // values not sent in this frame read as zero
    channel.bex_values = [0; 4];

    Ok(())
}

fn read_bex_values(reader: &mut BsIoSliceReader, channel: &mut Channel, band_class: usize) -> Result<()> {
    let lengths = &BEX_DATA_LENGTHS[channel.bex_mode][band_class];

    for (value, &bits) in channel.bex_values[..channel.bex_value_count]
        .iter_mut()
        .zip(lengths)
    {
        *value = reader.get_n(bits)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bitstream_io::pack_bits;
    use crate::utils::errors::{ErrorKind, error_kind};

    fn read_block(
        config: &[u8; 4],
        block_type: BlockType,
        frame_index: usize,
        fields: &[(u32, u32)],
    ) -> Result<Block> {
        let config = Atrac9Config::from_bytes(config)?;
        let mut block = Block::new(block_type, 0, config.frame_samples_power);
        let data = pack_bits(fields);
        let mut reader = BsIoSliceReader::from_slice(&data);
        block.read(&mut reader, &config, frame_index)?;
        Ok(block)
    }

    #[test]
    fn test_lfe_block() -> Result<()> {
        const SURROUND: [u8; 4] = [0xFE, 0x76, 0x00, 0x00];

        // precision 4 in the first frame: 5-bit coefficients
        let fields = [(1, 0), (1, 0), (5, 12), (5, 3), (5, 1), (5, 31), (5, 15), (5, 16)];
        let block = read_block(&SURROUND, BlockType::Lfe, 0, &fields)?;
        let channel = &block.channels[0];

        assert_eq!(block.header.quantization_unit_count, LFE_QUANT_UNITS);
        assert_eq!(&channel.scale_factors[..3], &[12, 3, 0]);
        assert_eq!(&channel.precisions[..2], &[4, 4]);
        assert_eq!(&channel.quantized_spectra[..5], &[1, -1, 15, -16, 0]);

        // reuse widens the coefficients to 9 bits
        let fields = [(1, 1), (1, 1), (5, 7), (5, 7), (9, 255), (9, 256), (9, 511), (9, 0)];
        let block = read_block(&SURROUND, BlockType::Lfe, 1, &fields)?;
        let channel = &block.channels[0];

        assert_eq!(&channel.precisions[..2], &[8, 8]);
        assert_eq!(&channel.quantized_spectra[..4], &[255, -256, -1, 0]);

        Ok(())
    }

    #[test]
    fn test_header_flags_checked_against_frame_index() {
        const MONO: [u8; 4] = [0xFE, 0x70, 0x07, 0xE0];

        let err = read_block(&MONO, BlockType::Mono, 0, &[(1, 1), (1, 0)]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BlockError>(),
            Some(BlockError::FirstInSuperframeMismatch { read: false, frame_index: 0 })
        ));

        let err = read_block(&MONO, BlockType::Mono, 1, &[(1, 0), (1, 0)]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BlockError>(),
            Some(BlockError::FirstInSuperframeMismatch { read: true, frame_index: 1 })
        ));

        let err = read_block(&MONO, BlockType::Mono, 0, &[(1, 0), (1, 1)]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BlockError>(),
            Some(BlockError::ReuseOnFirstFrame)
        ));
        assert_eq!(error_kind(&err), ErrorKind::InvalidData);
    }

    #[test]
    fn test_band_count_limited_by_sample_rate() {
        // 24 kHz allows at most 12 bands
        let config = [0xFE, 0x40, 0x07, 0xE0];
        let err = read_block(&config, BlockType::Mono, 0, &[(1, 0), (1, 0), (4, 15)]).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BlockError>(),
            Some(BlockError::BandCountTooHigh { band_count: 18, max: 12 })
        ));
    }

    #[test]
    fn test_stereo_band_above_band_count() {
        const STEREO: [u8; 4] = [0xFE, 0x74, 0x0F, 0xE0];

        let fields = [(1, 0), (1, 0), (4, 2), (4, 3)];
        let err = read_block(&STEREO, BlockType::Stereo, 0, &fields).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BlockError>(),
            Some(BlockError::StereoBandTooHigh { stereo_band: 6, band_count: 5 })
        ));
    }

    #[test]
    fn test_gradient_parameters_validated() {
        const MONO: [u8; 4] = [0xFE, 0x70, 0x07, 0xE0];
        let bands = [(1, 0), (1, 0), (4, 5), (1, 0)];

        // start unit 0
        let mut fields = bands.to_vec();
        fields.extend([(2, 0), (6, 0), (6, 5), (5, 0), (5, 0), (4, 0)]);
        let err = read_block(&MONO, BlockType::Mono, 0, &fields).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BlockError>(),
            Some(BlockError::GradientUnitsOutOfRange { start: 0, end: 6 })
        ));

        // boundary past the 10 coded units of 3 bands
        let fields = [(1, 0), (1, 0), (4, 0), (1, 0), (2, 1), (5, 4), (5, 10), (4, 15)];
        let err = read_block(&MONO, BlockType::Mono, 0, &fields).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BlockError>(),
            Some(BlockError::GradientBoundaryTooHigh { boundary: 15, units: 10 })
        ));
    }

    #[test]
    fn test_extension_mode_forced_for_low_band_class() -> Result<()> {
        const MONO: [u8; 4] = [0xFE, 0x70, 0x07, 0xE0];

        // 13 coded units extended to 16, band class 0
        let mut fields = vec![(1, 0), (1, 0), (4, 2), (1, 1), (4, 5)];
        fields.extend([(2, 0), (6, 1), (6, 0), (5, 0), (5, 0), (4, 0)]);
        // unused flag, extension data with mode 1 and one 3-bit value
        fields.extend([(1, 0), (1, 1), (2, 1), (5, 3), (3, 5)]);
        fields.extend([(2, 1), (2, 3)]);
        fields.extend([(5, 10); 16]);

        let block = read_block(&MONO, BlockType::Mono, 0, &fields)?;
        let channel = &block.channels[0];

        assert_eq!(block.header.quantization_unit_count, 13);
        assert_eq!(block.header.extension_unit, 16);
        assert_eq!(block.header.extension_data_length, 3);
        assert_eq!(channel.bex_mode, 4);
        assert_eq!(channel.bex_value_count, 1);
        assert_eq!(channel.bex_values, [5, 0, 0, 0]);
        assert_eq!(&channel.scale_factors[..16], &[10; 16]);
        assert_eq!(block.header.quantization_units_prev, 16);

        Ok(())
    }

    #[test]
    fn test_extension_data_overrun() {
        const MONO: [u8; 4] = [0xFE, 0x70, 0x07, 0xE0];

        // 16 coded units, band class 3, mode 2 reads two 6-bit values
        let mut fields = vec![(1, 0), (1, 0), (4, 5), (1, 1), (4, 7)];
        fields.extend([(2, 0), (6, 1), (6, 0), (5, 0), (5, 0), (4, 0)]);
        // 8 bits declared, 12 read
        fields.extend([(1, 0), (1, 1), (2, 2), (5, 8), (6, 63), (6, 63)]);

        let err = read_block(&MONO, BlockType::Mono, 0, &fields).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::InvalidData);
        assert!(matches!(
            err.downcast_ref::<BlockError>(),
            Some(BlockError::ExtensionDataOverrun { position: 60, end: 56 })
        ));
    }

    #[test]
    fn test_extension_data_skipped_without_band_extension() -> Result<()> {
        const MONO: [u8; 4] = [0xFE, 0x70, 0x07, 0xE0];

        let mut fields = vec![(1, 0), (1, 0), (4, 0), (1, 0)];
        fields.extend([(2, 0), (6, 1), (6, 0), (5, 0), (5, 0), (4, 0)]);
        // mode 3, four bits of payload
        fields.extend([(1, 1), (2, 3), (5, 4), (4, 0b1111)]);
        fields.extend([(2, 1), (2, 3)]);
        fields.extend([(5, 9); 10]);

        let block = read_block(&MONO, BlockType::Mono, 0, &fields)?;

        assert!(block.header.has_extension_data);
        assert_eq!(block.header.extension_mode, 3);
        assert_eq!(block.header.extension_data_length, 4);
        assert_eq!(&block.channels[0].scale_factors[..10], &[9; 10]);
        assert_eq!(block.header.quantization_units_prev, 10);

        Ok(())
    }

    #[test]
    fn test_extension_values_cleared_when_not_sent() -> Result<()> {
        const MONO: [u8; 4] = [0xFE, 0x70, 0x07, 0xE0];
        let config = Atrac9Config::from_bytes(&MONO)?;
        let mut block = Block::new(BlockType::Mono, 0, config.frame_samples_power);
        block.channels[0].bex_values = [63, 63, 0, 0];

        let mut fields = vec![(1, 0), (1, 0), (4, 5), (1, 1), (4, 7)];
        fields.extend([(2, 0), (6, 1), (6, 0), (5, 0), (5, 0), (4, 0)]);
        // mode 2 with a zero data length
        fields.extend([(1, 0), (1, 1), (2, 2), (5, 0)]);
        fields.extend([(2, 1), (2, 3)]);
        fields.extend([(5, 10); 20]);

        let data = pack_bits(&fields);
        let mut reader = BsIoSliceReader::from_slice(&data);
        block.read(&mut reader, &config, 0)?;

        assert_eq!(block.channels[0].bex_mode, 2);
        assert_eq!(block.channels[0].bex_values, [0; 4]);

        Ok(())
    }
}
