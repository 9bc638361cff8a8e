//! Frames: one time slice of every block in the stream.

use anyhow::Result;

use crate::structs::block::Block;
use crate::structs::channel::Channel;
use crate::structs::config::Atrac9Config;
use crate::utils::bitstream_io::BsIoSliceReader;

/// The block tree for one stream.
///
/// Sized once from the config and reused for every frame. Blocks keep their
/// state between frames.
#[derive(Debug, Clone)]
pub struct Frame {
    pub config: Atrac9Config,
    /// Position of the frame within its superframe.
    pub frame_index: usize,
    pub blocks: Vec<Block>,
}

impl Frame {
    pub fn new(config: Atrac9Config) -> Self {
        let blocks = config
            .blocks
            .iter()
            .enumerate()
            .map(|(index, &block_type)| Block::new(block_type, index, config.frame_samples_power))
            .collect();

        Self {
            config,
            frame_index: 0,
            blocks,
        }
    }

    /// Unpacks every block of the frame.
    pub fn read(&mut self, reader: &mut BsIoSliceReader) -> Result<()> {
        for block in &mut self.blocks {
            block.read(reader, &self.config, self.frame_index)?;
        }

        Ok(())
    }

    /// Channels in output order.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.blocks.iter().flat_map(|block| &block.channels)
    }
}
