use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use serde::Serialize;

use super::command::InfoArgs;
use crate::at9::At9File;
use crate::input::InputReader;
use crate::timestamp::time_str;

pub fn cmd_info(args: &InfoArgs, multi: Option<&MultiProgress>) -> Result<()> {
    log::info!("Analyzing AT9 file: {}", args.input.display());

    let pb = match multi {
        Some(multi) => {
            let pb = multi.add(ProgressBar::new_spinner());
            pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb.set_message("Reading file...");
            Some(pb)
        }
        None => None,
    };

    let data = InputReader::new(&args.input)?.read_all()?;
    let file = At9File::parse(&data)?;
    let report = StreamReport::new(&file, data.len());

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if args.yaml {
        print!("{}", serde_yaml_ng::to_string(&report)?);
    } else {
        display_report(&report);
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct StreamReport {
    container: ContainerInfo,
    codec: CodecInfo,
    stream: StreamInfo,
}

#[derive(Debug, Serialize)]
struct ContainerInfo {
    format_tag: String,
    channels: u16,
    sample_rate: u32,
    avg_bytes_per_sec: u32,
    block_align: u16,
    bits_per_sample: u16,
    valid_bits_per_sample: u16,
    channel_mask: String,
    version: i32,
    file_size: usize,
}

#[derive(Debug, Serialize)]
struct CodecInfo {
    config_data: String,
    sample_rate: u32,
    channel_config: String,
    block_layout: Vec<String>,
    channels: usize,
    frame_bytes: usize,
    superframe_bytes: usize,
    frames_per_superframe: usize,
    samples_per_superframe: usize,
}

#[derive(Debug, Serialize)]
struct StreamInfo {
    sample_count: u64,
    encoder_delay: u64,
    input_overlap_delay: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    loop_start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loop_end: Option<u64>,
    superframe_count: usize,
    duration: String,
    bitrate_kbps: f64,
}

fn channel_config_name(index: u8) -> &'static str {
    match index {
        0 => "Mono",
        1 => "Dual mono",
        2 => "Stereo",
        3 => "5.1",
        4 => "7.1",
        5 => "Quad",
        _ => "Reserved",
    }
}

impl StreamReport {
    fn new(file: &At9File, file_size: usize) -> Self {
        let format = &file.format;
        let config = &file.config;

        let config_data = config
            .config_data
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            container: ContainerInfo {
                format_tag: format!("{:#06X}", format.format_tag),
                channels: format.channels,
                sample_rate: format.sample_rate,
                avg_bytes_per_sec: format.avg_bytes_per_sec,
                block_align: format.block_align,
                bits_per_sample: format.bits_per_sample,
                valid_bits_per_sample: format.valid_bits_per_sample,
                channel_mask: format!("{:#010X}", format.channel_mask),
                version: format.version,
                file_size,
            },
            codec: CodecInfo {
                config_data,
                sample_rate: config.sample_rate,
                channel_config: channel_config_name(config.channel_config_index).to_string(),
                block_layout: config.blocks.iter().map(ToString::to_string).collect(),
                channels: config.channel_count,
                frame_bytes: config.frame_bytes,
                superframe_bytes: config.superframe_bytes,
                frames_per_superframe: config.frames_per_superframe,
                samples_per_superframe: config.superframe_samples,
            },
            stream: StreamInfo {
                sample_count: file.sample_count(),
                encoder_delay: file.encoder_delay(),
                input_overlap_delay: file.fact.input_overlap_delay,
                loop_start: file.loop_points.map(|l| l.start),
                loop_end: file.loop_points.map(|l| l.end),
                superframe_count: file.superframe_count,
                duration: time_str(file.duration_secs()),
                bitrate_kbps: config.bitrate() as f64 / 1000.0,
            },
        }
    }
}

fn display_report(report: &StreamReport) {
    let container = &report.container;
    let codec = &report.codec;
    let stream = &report.stream;

    println!();
    println!("ATRAC9 Stream Information");
    println!("=========================");
    println!();

    println!("Container");
    println!("  Format tag                {}", container.format_tag);
    println!("  Channels                  {}", container.channels);
    println!("  Sampling rate             {} Hz", container.sample_rate);
    println!("  Average byte rate         {} B/s", container.avg_bytes_per_sec);
    println!("  Block align               {}", container.block_align);
    println!("  Channel mask              {}", container.channel_mask);
    println!("  Version                   {}", container.version);
    println!("  Size                      {} bytes", container.file_size);
    println!();

    println!("Codec");
    println!("  Config data               {}", codec.config_data);
    println!("  Sampling rate             {} Hz", codec.sample_rate);
    println!("  Channel configuration     {}", codec.channel_config);
    println!("  Block layout              {}", codec.block_layout.join(", "));
    println!("  Channels                  {}", codec.channels);
    println!("  Frame size                {} bytes", codec.frame_bytes);
    println!("  Superframe size           {} bytes", codec.superframe_bytes);
    println!("  Frames per superframe     {}", codec.frames_per_superframe);
    println!("  Samples per superframe    {}", codec.samples_per_superframe);
    println!();

    println!("Stream");
    println!("  Samples                   {}", stream.sample_count);
    println!("  Encoder delay             {}", stream.encoder_delay);
    if let (Some(start), Some(end)) = (stream.loop_start, stream.loop_end) {
        println!("  Loop                      {start} - {end}");
    }
    println!("  Superframes               {}", stream.superframe_count);
    println!("  Duration                  {}", stream.duration);
    println!("  Bitrate                   {:.1} kbps", stream.bitrate_kbps);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::at9::tests::TestFile;

    #[test]
    fn test_report_yaml() -> Result<()> {
        let test = TestFile {
            config: [0xFE, 0x74, 0x0F, 0xE0],
            sample_count: 48000,
            encoder_delay: 256,
            loop_points: None,
            superframes: vec![vec![0; 128]; 190],
        };
        let bytes = test.build();
        let file = At9File::parse(&bytes)?;
        let report = StreamReport::new(&file, bytes.len());

        assert_eq!(report.codec.channel_config, "Stereo");
        assert_eq!(report.codec.block_layout, vec!["Stereo".to_string()]);
        assert_eq!(report.stream.duration, "00:00:01.000");
        // ceil((48000 + 256) / 256), the extra superframe is ignored
        assert_eq!(report.stream.superframe_count, 189);

        let yaml = serde_yaml_ng::to_string(&report)?;
        assert!(yaml.contains("config_data: FE 74 0F E0"));
        assert!(yaml.contains("sample_count: 48000"));
        assert!(!yaml.contains("loop_start"));

        Ok(())
    }
}
