//! Stream configuration descriptor.
//!
//! ATRAC9 streams carry a 4-byte descriptor next to the bitstream, usually in
//! the container's format chunk. It fixes the sample rate, the block layout
//! and the superframe geometry for the whole stream.
//!
//! ## Layout (MSB first)
//!
//! | Bits | Field |
//! |---|---|
//! | 8 | header, always `0xFE` |
//! | 4 | sample rate index |
//! | 3 | channel config index |
//! | 1 | validation bit, always 0 |
//! | 11 | frame bytes - 1 |
//! | 2 | superframe index |
//! | 3 | unused |

use std::fmt::Display;

use anyhow::{Result, bail};
use log::debug;

use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::ConfigError;
use crate::utils::tables::{FRAME_SAMPLES_POWER, SAMPLE_RATES};

pub const CONFIG_HEADER: u8 = 0xFE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Mono,
    Stereo,
    Lfe,
}

impl BlockType {
    pub fn channel_count(self) -> usize {
        match self {
            BlockType::Stereo => 2,
            BlockType::Mono | BlockType::Lfe => 1,
        }
    }
}

impl Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BlockType::Mono => "Mono",
            BlockType::Stereo => "Stereo",
            BlockType::Lfe => "LFE",
        };
        write!(f, "{name}")
    }
}

use BlockType::{Lfe, Mono, Stereo};

/// Block layouts selected by the channel config index.
#[rustfmt::skip]
pub const CHANNEL_CONFIGS: [&[BlockType]; 6] = [
    &[Mono],
    &[Mono, Mono],
    &[Stereo],
    &[Stereo, Mono, Lfe, Stereo],
    &[Stereo, Mono, Lfe, Stereo, Stereo],
    &[Stereo, Stereo],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atrac9Config {
    pub config_data: [u8; 4],
    pub sample_rate_index: u8,
    pub channel_config_index: u8,
    pub frame_bytes: usize,
    pub superframe_index: u8,

    pub sample_rate: u32,
    pub blocks: &'static [BlockType],
    pub channel_count: usize,
    pub frames_per_superframe: usize,
    pub superframe_bytes: usize,
    pub frame_samples_power: u32,
    pub frame_samples: usize,
    pub superframe_samples: usize,
    /// Sample rate indices above 7 use the reduced high-rate grammar.
    pub high_sample_rate: bool,
}

impl Atrac9Config {
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let Ok(config_data) = <[u8; 4]>::try_from(data) else {
            bail!(ConfigError::InvalidLength(data.len()));
        };

        let mut reader = BsIoSliceReader::from_slice(&config_data);

        let header = reader.get_n(8)? as u8;
        if header != CONFIG_HEADER {
            bail!(ConfigError::InvalidHeader(header));
        }

        let sample_rate_index = reader.get_n(4)? as u8;
        let channel_config_index = reader.get_n(3)? as u8;

        if reader.get()? {
            bail!(ConfigError::ValidationBitSet);
        }

        let frame_bytes = reader.get_n(11)? as usize + 1;
        let superframe_index = reader.get_n(2)? as u8;

        let Some(&blocks) = CHANNEL_CONFIGS.get(channel_config_index as usize) else {
            bail!(ConfigError::ReservedChannelConfig(channel_config_index));
        };

        let frame_samples_power = FRAME_SAMPLES_POWER[sample_rate_index as usize];
        let frames_per_superframe = 1usize << superframe_index;
        let frame_samples = 1usize << frame_samples_power;

        let config = Self {
            config_data,
            sample_rate_index,
            channel_config_index,
            frame_bytes,
            superframe_index,
            sample_rate: SAMPLE_RATES[sample_rate_index as usize],
            blocks,
            channel_count: blocks.iter().map(|b| b.channel_count()).sum(),
            frames_per_superframe,
            superframe_bytes: frame_bytes << superframe_index,
            frame_samples_power,
            frame_samples,
            superframe_samples: frame_samples * frames_per_superframe,
            high_sample_rate: sample_rate_index > 7,
        };

        debug!(
            "ATRAC9 config {:02X?}: {} Hz, {} channel(s) {:?}, {} frame(s) x {} bytes",
            config.config_data,
            config.sample_rate,
            config.channel_count,
            config.blocks,
            config.frames_per_superframe,
            config.frame_bytes,
        );

        Ok(config)
    }

    /// Re-encodes the descriptor fields into the 4-byte form.
    ///
    /// The three trailing bits carry no field and are kept as read.
    pub fn to_bytes(&self) -> [u8; 4] {
        let frame_bytes = (self.frame_bytes - 1) as u32 & 0x7FF;

        let word = (CONFIG_HEADER as u32) << 24
            | (self.sample_rate_index as u32 & 0xF) << 20
            | (self.channel_config_index as u32 & 0x7) << 17
            | frame_bytes << 5
            | (self.superframe_index as u32 & 0x3) << 3
            | (self.config_data[3] as u32 & 0x7);

        word.to_be_bytes()
    }

    /// Total bitrate in bits per second.
    pub fn bitrate(&self) -> u64 {
        self.superframe_bytes as u64 * 8 * self.sample_rate as u64
            / self.superframe_samples as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::{ErrorKind, error_kind};

    #[test]
    fn test_parse_stereo_48k() -> Result<()> {
        // 48 kHz stereo, 0x100 frame bytes, 4 frames per superframe
        let config = Atrac9Config::from_bytes(&[0xFE, 0x74, 0x1F, 0xF0])?;

        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.blocks, &[BlockType::Stereo]);
        assert_eq!(config.channel_count, 2);
        assert_eq!(config.frame_bytes, 256);
        assert_eq!(config.frames_per_superframe, 4);
        assert_eq!(config.superframe_bytes, 1024);
        assert_eq!(config.frame_samples, 256);
        assert_eq!(config.superframe_samples, 1024);
        assert!(!config.high_sample_rate);

        Ok(())
    }

    #[test]
    fn test_parse_surround_layouts() -> Result<()> {
        let config = Atrac9Config::from_bytes(&[0xFE, 0x76, 0x00, 0x00])?;
        assert_eq!(config.channel_count, 6);
        assert_eq!(config.blocks.len(), 4);

        let config = Atrac9Config::from_bytes(&[0xFE, 0x78, 0x00, 0x00])?;
        assert_eq!(config.channel_count, 8);
        assert_eq!(config.frame_bytes, 1);
        assert_eq!(config.frames_per_superframe, 1);

        Ok(())
    }

    #[test]
    fn test_high_sample_rate() -> Result<()> {
        let config = Atrac9Config::from_bytes(&[0xFE, 0xC4, 0x00, 0x08])?;
        assert_eq!(config.sample_rate, 96000);
        assert_eq!(config.frame_samples, 128);
        assert_eq!(config.frames_per_superframe, 2);
        assert!(config.high_sample_rate);

        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        for bytes in [
            [0xFE, 0x74, 0x1F, 0xF0],
            [0xFE, 0x00, 0x00, 0x00],
            [0xFE, 0xFA, 0xFF, 0xF8],
            [0xFE, 0x52, 0x0B, 0x48],
            [0xFE, 0x74, 0x1F, 0xF1],
            [0xFE, 0x70, 0x07, 0xE7],
        ] {
            let config = Atrac9Config::from_bytes(&bytes)?;
            assert_eq!(config.to_bytes(), bytes);
        }

        Ok(())
    }

    #[test]
    fn test_rejects_invalid_descriptors() {
        let cases: [&[u8]; 5] = [
            &[0xFE, 0x74, 0x1F],
            &[0xFE, 0x74, 0x1F, 0xF0, 0x00],
            &[0xFF, 0x74, 0x1F, 0xF0],
            &[0xFE, 0x75, 0x1F, 0xF0],
            &[0xFE, 0x7C, 0x1F, 0xF0],
        ];

        for data in cases {
            let err = Atrac9Config::from_bytes(data).unwrap_err();
            assert_eq!(error_kind(&err), ErrorKind::ConfigInvalid, "{data:02X?}");
        }
    }

    #[test]
    fn test_bitrate() -> Result<()> {
        let config = Atrac9Config::from_bytes(&[0xFE, 0x74, 0x1F, 0xF0])?;
        assert_eq!(config.bitrate(), 384_000);

        Ok(())
    }
}
