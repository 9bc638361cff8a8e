use std::ops::Range;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use anyhow::{Result, anyhow};
use atrac9::log_or_err;
use atrac9::process::decode::{Decoder, PcmSample};
use indicatif::ProgressBar;
use log::Level;

use super::schedule::Schedule;
use crate::at9::At9File;

/// One decoded superframe and the part of it that belongs in the output.
pub struct DecodedSuperframe<S> {
    pub index: usize,
    pub pcm: Vec<Vec<S>>,
    pub window: Range<usize>,
}

pub struct ThreadState {
    pub fail_level: Level,
}

pub struct DecoderThreadConfig<S> {
    pub file: Arc<At9File>,
    pub schedule: Schedule,
    pub decoder: Decoder,
    pub state: ThreadState,
    pub tx: mpsc::Sender<DecodedSuperframe<S>>,
    pub pb_clone: Option<ProgressBar>,
}

pub fn spawn_decoder_thread<S>(config: DecoderThreadConfig<S>) -> thread::JoinHandle<Result<()>>
where
    S: PcmSample + Send + 'static,
{
    thread::spawn(move || -> Result<()> {
        let DecoderThreadConfig {
            file,
            schedule,
            mut decoder,
            state,
            tx,
            pb_clone,
        } = config;

        let channels = file.config.channel_count;
        let samples = file.config.superframe_samples;
        let silence = S::from_decoded(0.0);

        let mut superframes = 0u64;
        let mut corrupt = 0u64;

        for (pass_index, pass) in schedule.passes.iter().enumerate() {
            if pass_index > 0 {
                log::debug!(
                    "Loop pass {pass_index}: superframes {}..{}",
                    pass.superframes.start,
                    pass.superframes.end
                );
            }

            for index in pass.superframes.clone() {
                let mut pcm = vec![vec![silence; samples]; channels];

                if let Err(e) = decoder.decode(file.superframe(index), &mut pcm) {
                    let e = anyhow!("Superframe {index}: {e:#}");
                    log_or_err!(state, Level::Warn, e);

                    corrupt += 1;
                    pcm.iter_mut().for_each(|channel| channel.fill(silence));
                }

                let decoded = DecodedSuperframe {
                    index,
                    pcm,
                    window: pass.window(index, samples),
                };

                if tx.send(decoded).is_err() {
                    log::debug!("Output closed, stopping decoder");
                    return Ok(());
                }

                superframes += 1;
                if let Some(pb) = &pb_clone {
                    pb.inc(1);
                }
            }
        }

        if corrupt > 0 {
            log::warn!("{corrupt} corrupt superframe(s) replaced with silence");
        }
        log::info!("Processing complete: {superframes} superframes");
        Ok(())
    })
}
