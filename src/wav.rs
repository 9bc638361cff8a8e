use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::ops::Range;

use atrac9d_macros::{ToBytes, riff_chunk};

use crate::byteorder::WriteBytesLe;

pub const WAVE_FORMAT_PCM: u16 = 0x0001;
pub const WAVE_FORMAT_IEEE_FLOAT: u16 = 0x0003;

pub trait RiffChunk {
    fn chunk_id(&self) -> &[u8; 4];
    fn chunk_data(&self) -> Vec<u8>;

    /// Writes id, little-endian size and body, padded to an even length.
    fn write_all<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.chunk_id())?;

        let data = self.chunk_data();
        writer.write_all(&(data.len() as u32).to_le_bytes())?;
        writer.write_all(&data)?;
        if data.len() & 1 == 1 {
            writer.write_all(&[0])?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, ToBytes)]
#[riff_chunk(b"fmt ")]
pub struct WaveFormat {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub avg_bytes_per_sec: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

/// Sample frame count, required for non-PCM formats.
#[derive(Debug, Clone, ToBytes)]
#[riff_chunk(b"fact")]
pub struct WaveFact {
    pub sample_frames: u32,
}

/// Sample types the writer accepts, with their `fmt ` description.
pub trait WavSample: WriteBytesLe + Copy + Send + 'static {
    const FORMAT_TAG: u16;
    const BITS: u16;
}

impl WavSample for i16 {
    const FORMAT_TAG: u16 = WAVE_FORMAT_PCM;
    const BITS: u16 = 16;
}

impl WavSample for f32 {
    const FORMAT_TAG: u16 = WAVE_FORMAT_IEEE_FLOAT;
    const BITS: u16 = 32;
}

/// Appends `range` of each planar channel buffer to `dst`, interleaved.
pub fn interleave_le<S: WriteBytesLe>(channels: &[Vec<S>], range: Range<usize>, dst: &mut Vec<u8>) {
    for i in range {
        for channel in channels {
            channel[i].write_le(dst);
        }
    }
}

/// RIFF/WAVE writer for 16-bit integer or 32-bit float PCM
pub struct WAVWriter<W: Write + Seek> {
    writer: BufWriter<W>,
    format: WaveFormat,
    riff_size_position: u64,
    fact_position: Option<u64>,
    data_size_position: u64,
    data_written: u64,
    scratch: Vec<u8>,
}

impl<W: Write + Seek> WAVWriter<W> {
    pub fn new<S: WavSample>(writer: W, sample_rate: u32, channels: u16) -> Self {
        let block_align = channels * (S::BITS / 8);

        Self {
            writer: BufWriter::new(writer),
            format: WaveFormat {
                format_tag: S::FORMAT_TAG,
                channels,
                sample_rate,
                avg_bytes_per_sec: sample_rate * block_align as u32,
                block_align,
                bits_per_sample: S::BITS,
            },
            riff_size_position: 0,
            fact_position: None,
            data_size_position: 0,
            data_written: 0,
            scratch: Vec::new(),
        }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(b"RIFF")?;
        self.riff_size_position = self.writer.stream_position()?;
        self.writer.write_all(&0u32.to_le_bytes())?; // patched in finish()
        self.writer.write_all(b"WAVE")?;

        self.format.write_all(&mut self.writer)?;

        if self.format.format_tag != WAVE_FORMAT_PCM {
            self.fact_position = Some(self.writer.stream_position()? + 8);
            WaveFact { sample_frames: 0 }.write_all(&mut self.writer)?;
        }

        self.writer.write_all(b"data")?;
        self.data_size_position = self.writer.stream_position()?;
        self.writer.write_all(&0u32.to_le_bytes())?;

        Ok(())
    }

    /// Interleaves and writes `range` of each planar channel buffer.
    pub fn write_planar<S: WavSample>(
        &mut self,
        channels: &[Vec<S>],
        range: Range<usize>,
    ) -> io::Result<()> {
        if S::FORMAT_TAG != self.format.format_tag {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Sample type does not match the configured format",
            ));
        }

        self.scratch.clear();
        interleave_le(channels, range, &mut self.scratch);
        self.writer.write_all(&self.scratch)?;
        self.data_written += self.scratch.len() as u64;

        Ok(())
    }

    /// Back-patches the RIFF, data and fact sizes.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.data_written & 1 == 1 {
            self.writer.write_all(&[0])?;
        }
        self.writer.flush()?;

        let end = self.writer.stream_position()?;

        self.writer.seek(SeekFrom::Start(self.riff_size_position))?;
        self.writer.write_all(&((end - 8) as u32).to_le_bytes())?;

        self.writer.seek(SeekFrom::Start(self.data_size_position))?;
        self.writer
            .write_all(&(self.data_written as u32).to_le_bytes())?;

        if let Some(position) = self.fact_position {
            let frames = self.data_written / self.format.block_align as u64;
            self.writer.seek(SeekFrom::Start(position))?;
            self.writer.write_all(&(frames as u32).to_le_bytes())?;
        }

        self.writer.seek(SeekFrom::Start(end))?;
        self.writer.flush()?;

        Ok(())
    }

    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }

    pub fn stats(&self) -> WAVStats {
        WAVStats {
            data_written: self.data_written,
            sample_rate: self.format.sample_rate,
            channels: self.format.channels,
            bits_per_sample: self.format.bits_per_sample,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WAVStats {
    pub data_written: u64,
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}
