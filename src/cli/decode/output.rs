use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::cli::command::AudioFormat;
use crate::wav::{WAVWriter, WavSample, interleave_le};

pub fn create_path_with_extension(base_path: &Path, expected_ext: &str) -> PathBuf {
    let mut path = base_path.to_path_buf();
    if base_path.extension().is_some_and(|ext| ext == expected_ext) {
        path
    } else {
        path.set_extension(expected_ext);
        path
    }
}

/// Resolves the output path, deriving it from the input when not given.
pub fn output_path(
    input: &Path,
    output_path: Option<&Path>,
    format: AudioFormat,
    is_pipe: bool,
) -> Result<PathBuf> {
    match output_path {
        Some(path) => Ok(path.to_path_buf()),
        None if is_pipe => bail!("--output-path is required when reading from stdin"),
        None => Ok(create_path_with_extension(input, format.extension())),
    }
}

pub enum AudioWriter {
    Pcm(BufWriter<File>, Vec<u8>),
    Wav(WAVWriter<File>),
}

impl AudioWriter {
    pub fn create<S: WavSample>(
        path: &Path,
        format: AudioFormat,
        sample_rate: u32,
        channels: u16,
    ) -> Result<Self> {
        let file = File::create(path)?;

        let writer = match format {
            AudioFormat::Pcm => AudioWriter::Pcm(BufWriter::new(file), Vec::new()),
            AudioFormat::Wav | AudioFormat::WavFloat => {
                let mut wav = WAVWriter::new::<S>(file, sample_rate, channels);
                wav.write_header()?;
                AudioWriter::Wav(wav)
            }
        };

        Ok(writer)
    }

    pub fn write_planar<S: WavSample>(&mut self, pcm: &[Vec<S>], range: Range<usize>) -> Result<()> {
        match self {
            AudioWriter::Pcm(writer, scratch) => {
                scratch.clear();
                interleave_le(pcm, range, scratch);
                writer.write_all(scratch)?;
            }
            AudioWriter::Wav(writer) => writer.write_planar(pcm, range)?,
        }
        Ok(())
    }

    pub fn finish(&mut self) -> Result<()> {
        match self {
            AudioWriter::Pcm(writer, _) => writer.flush()?,
            AudioWriter::Wav(writer) => {
                writer.finish()?;
                log::debug!("WAV data written: {:?}", writer.stats());
            }
        }
        Ok(())
    }
}
