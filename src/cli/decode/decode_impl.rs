use std::sync::{Arc, mpsc};

use anyhow::{Result, anyhow};
use atrac9::process::decode::{Decoder, PcmSample};
use indicatif::MultiProgress;
use log::Level;

use super::decoder_thread::{DecoderThreadConfig, ThreadState, spawn_decoder_thread};
use super::output::{AudioWriter, output_path};
use super::progress::{create_progress_bar, finalize_progress_bar};
use super::schedule::Schedule;
use crate::at9::At9File;
use crate::cli::command::{AudioFormat, Cli, DecodeArgs};
use crate::input::InputReader;
use crate::wav::WavSample;

pub fn cmd_decode(args: &DecodeArgs, cli: &Cli, multi: Option<&MultiProgress>) -> Result<()> {
    log::info!(
        "Decoding AT9 file: {} (strict mode: {}, format: {:?}, loops: {})",
        args.input.display(),
        cli.strict,
        args.format,
        args.loops
    );

    let mut input = InputReader::new(&args.input)?;
    let path = output_path(
        &args.input,
        args.output_path.as_deref(),
        args.format,
        input.is_pipe(),
    )?;
    log::info!("Output path: {}", path.display());

    let file = At9File::parse(&input.read_all()?)?;

    match args.format {
        AudioFormat::Wav | AudioFormat::Pcm => decode_to::<i16>(file, args, cli, multi, &path),
        AudioFormat::WavFloat => decode_to::<f32>(file, args, cli, multi, &path),
    }
}

fn decode_to<S>(
    file: At9File,
    args: &DecodeArgs,
    cli: &Cli,
    multi: Option<&MultiProgress>,
    path: &std::path::Path,
) -> Result<()>
where
    S: PcmSample + WavSample,
{
    let file = Arc::new(file);
    let config = &file.config;

    if file.loop_points.is_none() && args.loops > 0 {
        log::warn!("--loops {} ignored, the file has no loop region", args.loops);
    }

    let schedule = Schedule::new(&file, args.loops);
    log::info!(
        "{} Hz, {} channel(s), {} superframes to decode, {} output samples",
        config.sample_rate,
        config.channel_count,
        schedule.superframe_count(),
        schedule.output_samples()
    );

    let pb = multi
        .map(|multi| create_progress_bar(multi, schedule.superframe_count()))
        .transpose()?;

    // Configure fail level based on strict mode
    let fail_level = if cli.strict {
        Level::Warn
    } else {
        Level::Error
    };

    let mut decoder = Decoder::default();
    decoder.set_fail_level(fail_level);
    decoder.initialize(&file.format.config_data)?;

    let mut writer = AudioWriter::create::<S>(
        path,
        args.format,
        config.sample_rate,
        config.channel_count as u16,
    )?;

    let (tx, rx) = mpsc::channel();
    let decode_thread = spawn_decoder_thread(DecoderThreadConfig {
        file: Arc::clone(&file),
        schedule,
        decoder,
        state: ThreadState { fail_level },
        tx,
        pb_clone: pb.clone(),
    });

    if let Some(pb) = &pb {
        pb.set_message("decoding");
    }

    let start_time = std::time::Instant::now();
    let mut decoded_samples = 0u64;

    while let Ok(decoded) = rx.recv() {
        log::trace!(
            "Writing superframe {} samples {:?}",
            decoded.index,
            decoded.window
        );
        decoded_samples += decoded.window.len() as u64;
        writer.write_planar::<S>(&decoded.pcm, decoded.window)?;
    }

    writer.finish()?;

    match decode_thread.join() {
        Ok(Ok(())) => {
            finalize_progress_bar(&pb, decoded_samples, config.sample_rate, start_time);
            log::info!(
                "Decoding completed successfully: {decoded_samples} samples written to {}",
                path.display()
            );
        }
        Ok(Err(e)) => {
            if let Some(pb) = pb {
                pb.finish_with_message("decode failed");
            }
            return Err(e);
        }
        Err(_) => {
            if let Some(pb) = pb {
                pb.finish_with_message("decode thread panicked");
            }
            return Err(anyhow!("Decode thread panicked"));
        }
    }

    Ok(())
}
