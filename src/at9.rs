//! AT9 container parsing.
//!
//! An AT9 file is a RIFF/WAVE file whose `fmt ` chunk uses the extensible
//! format with the ATRAC9 SubFormat GUID. The codec descriptor sits in the
//! extension, and the `fact` chunk carries the sample count and the encoder
//! delay. The `data` chunk is a run of fixed-size superframes.

use std::ops::Range;

use anyhow::{Context, Result, anyhow, bail};
use atrac9::structs::config::Atrac9Config;
use log::{debug, warn};

pub const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// SubFormat GUID `47E142D2-36BA-4D8D-88FC-61654F8C836C`, as stored on disk.
#[rustfmt::skip]
pub const ATRAC9_SUBFORMAT: [u8; 16] = [
    0xD2, 0x42, 0xE1, 0x47, 0xBA, 0x36, 0x8D, 0x4D,
    0x88, 0xFC, 0x61, 0x65, 0x4F, 0x8C, 0x83, 0x6C,
];

#[derive(Debug, Clone)]
pub struct At9Format {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub avg_bytes_per_sec: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub valid_bits_per_sample: u16,
    pub channel_mask: u32,
    pub version: i32,
    pub config_data: [u8; 4],
}

#[derive(Debug, Clone, Copy)]
pub struct At9Fact {
    pub sample_count: i32,
    pub input_overlap_delay: i32,
    pub encoder_delay: i32,
}

/// Loop points in output samples, with the encoder delay removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopPoints {
    pub start: u64,
    pub end: u64,
}

#[derive(Debug, Clone)]
pub struct At9File {
    pub format: At9Format,
    pub fact: At9Fact,
    pub loop_points: Option<LoopPoints>,
    pub config: Atrac9Config,
    pub superframe_count: usize,
    data: Vec<u8>,
}

impl At9File {
    pub fn parse(file: &[u8]) -> Result<Self> {
        let mut reader = ChunkReader::new(file);

        let riff = reader.bytes(4).context("File too short for a RIFF header")?;
        if riff != b"RIFF" {
            bail!("Not a RIFF file");
        }
        let riff_size = reader.u32()? as usize;
        if reader.bytes(4)? != b"WAVE" {
            bail!("Not a valid WAVE file");
        }

        let riff_end = (8 + riff_size).min(file.len());

        let mut format = None;
        let mut fact = None;
        let mut smpl_loop = None;
        let mut data_range = None;

        while reader.position + 8 <= riff_end {
            let id: [u8; 4] = reader.array()?;
            let size = reader.u32()? as usize;
            let start = reader.position;
            let declared_end = start + size;

            debug!(
                "RIFF chunk '{}' at {start}, {size} bytes",
                String::from_utf8_lossy(&id)
            );

            if &id == b"data" {
                // trust the descriptor over the declared size
                data_range = Some(start..declared_end.min(file.len()));
            } else {
                if declared_end > file.len() {
                    bail!(
                        "Truncated '{}' chunk: {size} bytes declared, {} available",
                        String::from_utf8_lossy(&id),
                        file.len() - start
                    );
                }

                let mut body = ChunkReader::new(&file[start..declared_end]);
                match &id {
                    b"fmt " => format = Some(parse_format(&mut body)?),
                    b"fact" => fact = Some(parse_fact(&mut body)?),
                    b"smpl" => smpl_loop = parse_smpl(&mut body)?,
                    _ => {}
                }
            }

            // subchunks are 2-byte aligned
            reader.position = declared_end + (declared_end & 1);
        }

        let format = format.ok_or_else(|| anyhow!("File must have a valid fmt chunk"))?;
        let fact = fact.ok_or_else(|| anyhow!("File must have a valid fact chunk"))?;
        let data_range = data_range.ok_or_else(|| anyhow!("File must have a valid data chunk"))?;

        if format.channels == 0 {
            bail!("Channel count must not be zero");
        }

        let config = Atrac9Config::from_bytes(&format.config_data)
            .context("Invalid ATRAC9 config descriptor")?;

        let sample_count = fact.sample_count.max(0) as u64;
        let encoder_delay = fact.encoder_delay.max(0) as u64;
        let needed = (sample_count + encoder_delay).div_ceil(config.superframe_samples as u64) as usize;
        let available = data_range.len() / config.superframe_bytes;

        let superframe_count = if needed > available {
            warn!(
                "Data chunk holds {available} superframes, {needed} expected from the sample count"
            );
            available
        } else {
            needed
        };

        let data_range = data_range.start..data_range.start + superframe_count * config.superframe_bytes;

        let loop_points = smpl_loop.and_then(|(start, end): (i32, i32)| {
            let start = start as i64 - encoder_delay as i64;
            let end = end as i64 - encoder_delay as i64;
            (start >= 0 && end > start).then_some(LoopPoints {
                start: start as u64,
                end: end as u64,
            })
        });

        Ok(Self {
            format,
            fact,
            loop_points,
            config,
            superframe_count,
            data: file[data_range].to_vec(),
        })
    }

    pub fn sample_count(&self) -> u64 {
        self.fact.sample_count.max(0) as u64
    }

    pub fn encoder_delay(&self) -> u64 {
        self.fact.encoder_delay.max(0) as u64
    }

    pub fn superframe(&self, index: usize) -> &[u8] {
        let size = self.config.superframe_bytes;
        &self.data[index * size..(index + 1) * size]
    }

    pub fn duration_secs(&self) -> f64 {
        self.sample_count() as f64 / self.config.sample_rate as f64
    }
}

fn parse_format(body: &mut ChunkReader) -> Result<At9Format> {
    let format_tag = body.u16()?;
    let channels = body.u16()?;
    let sample_rate = body.u32()?;
    let avg_bytes_per_sec = body.u32()?;
    let block_align = body.u16()?;
    let bits_per_sample = body.u16()?;

    if format_tag != WAVE_FORMAT_EXTENSIBLE {
        bail!("Unsupported format tag {format_tag:#06X}, expected WAVE_FORMAT_EXTENSIBLE");
    }

    let _extension_size = body.u16().context("File must have a format chunk extension")?;
    let valid_bits_per_sample = body.u16()?;
    let channel_mask = body.u32()?;
    let sub_format: [u8; 16] = body.array()?;

    if sub_format != ATRAC9_SUBFORMAT {
        bail!("Must contain ATRAC9 data. Has unsupported SubFormat {sub_format:02X?}");
    }

    let version = body.i32()?;
    let config_data = body.array()?;

    Ok(At9Format {
        format_tag,
        channels,
        sample_rate,
        avg_bytes_per_sec,
        block_align,
        bits_per_sample,
        valid_bits_per_sample,
        channel_mask,
        version,
        config_data,
    })
}

fn parse_fact(body: &mut ChunkReader) -> Result<At9Fact> {
    Ok(At9Fact {
        sample_count: body.i32()?,
        input_overlap_delay: body.i32()?,
        encoder_delay: body.i32()?,
    })
}

/// Returns the start and end of the first sample loop, if any.
fn parse_smpl(body: &mut ChunkReader) -> Result<Option<(i32, i32)>> {
    // manufacturer .. smpte offset
    body.skip(7 * 4)?;
    let loop_count = body.i32()?;
    body.skip(4)?;

    if loop_count <= 0 {
        return Ok(None);
    }

    // cue point id, type
    body.skip(2 * 4)?;
    let start = body.i32()?;
    let end = body.i32()?;

    Ok(Some((start, end)))
}

struct ChunkReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ChunkReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    fn range(&self, len: usize) -> Result<Range<usize>> {
        let end = self.position + len;
        if end > self.data.len() {
            bail!(
                "Unexpected end of chunk: {len} bytes needed at offset {}",
                self.position
            );
        }
        Ok(self.position..end)
    }

    fn bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let range = self.range(len)?;
        self.position = range.end;
        Ok(&self.data[range])
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.bytes(N)?);
        Ok(out)
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        self.bytes(len).map(|_| ())
    }

    fn u16(&mut self) -> Result<u16> {
        self.array().map(u16::from_le_bytes)
    }

    fn u32(&mut self) -> Result<u32> {
        self.array().map(u32::from_le_bytes)
    }

    fn i32(&mut self) -> Result<i32> {
        self.array().map(i32::from_le_bytes)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct TestFile {
        pub config: [u8; 4],
        pub sample_count: i32,
        pub encoder_delay: i32,
        pub loop_points: Option<(i32, i32)>,
        pub superframes: Vec<Vec<u8>>,
    }

    fn chunk(out: &mut Vec<u8>, id: &[u8; 4], body: &[u8]) {
        out.extend_from_slice(id);
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend_from_slice(body);
        if body.len() & 1 == 1 {
            out.push(0);
        }
    }

    impl TestFile {
        pub(crate) fn build(&self) -> Vec<u8> {
            let config = Atrac9Config::from_bytes(&self.config).unwrap();
            let le32 = |v: i32| v.to_le_bytes();

            let mut fmt = Vec::new();
            fmt.extend_from_slice(&WAVE_FORMAT_EXTENSIBLE.to_le_bytes());
            fmt.extend_from_slice(&(config.channel_count as u16).to_le_bytes());
            fmt.extend_from_slice(&config.sample_rate.to_le_bytes());
            fmt.extend_from_slice(&(config.bitrate() as u32 / 8).to_le_bytes());
            fmt.extend_from_slice(&(config.superframe_bytes as u16).to_le_bytes());
            fmt.extend_from_slice(&0u16.to_le_bytes());
            fmt.extend_from_slice(&34u16.to_le_bytes());
            fmt.extend_from_slice(&(config.superframe_samples as u16).to_le_bytes());
            fmt.extend_from_slice(&0x3u32.to_le_bytes());
            fmt.extend_from_slice(&ATRAC9_SUBFORMAT);
            fmt.extend_from_slice(&le32(1));
            fmt.extend_from_slice(&self.config);
            fmt.extend_from_slice(&le32(0));

            let mut fact = Vec::new();
            for v in [self.sample_count, 0, self.encoder_delay] {
                fact.extend_from_slice(&le32(v));
            }

            let mut body = b"WAVE".to_vec();
            chunk(&mut body, b"fmt ", &fmt);
            chunk(&mut body, b"fact", &fact);

            if let Some((start, end)) = self.loop_points {
                let mut smpl = Vec::new();
                for v in [0, 0, 0, 60, 0, 0, 0, 1, 0, 0, 0, start, end, 0, 0] {
                    smpl.extend_from_slice(&le32(v));
                }
                chunk(&mut body, b"smpl", &smpl);
            }

            chunk(&mut body, b"data", &self.superframes.concat());

            let mut file = b"RIFF".to_vec();
            file.extend_from_slice(&(body.len() as u32).to_le_bytes());
            file.extend_from_slice(&body);
            file
        }
    }

    fn test_file(superframes: usize) -> TestFile {
        TestFile {
            // 48 kHz mono, 64-byte frames, one frame per superframe
            config: [0xFE, 0x70, 0x07, 0xE0],
            sample_count: 1000,
            encoder_delay: 100,
            loop_points: Some((300, 900)),
            superframes: (0..superframes).map(|i| vec![i as u8; 64]).collect(),
        }
    }

    #[test]
    fn test_parse_at9() -> Result<()> {
        let file = At9File::parse(&test_file(5).build())?;

        assert_eq!(file.format.channels, 1);
        assert_eq!(file.format.config_data, [0xFE, 0x70, 0x07, 0xE0]);
        assert_eq!(file.sample_count(), 1000);
        assert_eq!(file.encoder_delay(), 100);
        // ceil(1100 / 256)
        assert_eq!(file.superframe_count, 5);
        assert_eq!(file.superframe(3), &[3u8; 64]);
        assert_eq!(
            file.loop_points,
            Some(LoopPoints {
                start: 200,
                end: 800
            })
        );

        Ok(())
    }

    #[test]
    fn test_missing_superframes_are_clamped() -> Result<()> {
        let file = At9File::parse(&test_file(3).build())?;
        assert_eq!(file.superframe_count, 3);

        Ok(())
    }

    #[test]
    fn test_loop_before_delay_is_ignored() -> Result<()> {
        let mut test = test_file(5);
        test.loop_points = Some((50, 900));
        assert_eq!(At9File::parse(&test.build())?.loop_points, None);

        test.loop_points = Some((900, 900));
        assert_eq!(At9File::parse(&test.build())?.loop_points, None);

        Ok(())
    }

    #[test]
    fn test_rejects_other_formats() {
        let mut bytes = test_file(5).build();
        // first byte of the SubFormat GUID
        let guid = bytes
            .windows(16)
            .position(|w| w == ATRAC9_SUBFORMAT)
            .unwrap();
        bytes[guid] ^= 0xFF;

        let err = At9File::parse(&bytes).unwrap_err();
        assert!(err.to_string().contains("SubFormat"));

        assert!(At9File::parse(b"RIFX\0\0\0\0WAVE").is_err());
        assert!(At9File::parse(b"RIFF").is_err());
    }

    #[test]
    fn test_missing_fact_chunk() {
        let bytes = test_file(5).build();
        let fact = bytes.windows(4).position(|w| w == b"fact").unwrap();

        let mut renamed = bytes.clone();
        renamed[fact..fact + 4].copy_from_slice(b"junk");

        let err = At9File::parse(&renamed).unwrap_err();
        assert!(err.to_string().contains("fact"));
    }
}
