use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

pub fn create_progress_bar(multi: &MultiProgress, total_superframes: u64) -> Result<ProgressBar> {
    let pb = multi.add(ProgressBar::new(total_superframes));
    pb.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} superframes ({percent}%)\n{msg} | elapsed: {elapsed_precise} | ETA: {eta_precise}",
    )?);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message("initializing decoder");

    Ok(pb)
}

pub fn finalize_progress_bar(
    pb: &Option<ProgressBar>,
    decoded_samples: u64,
    sample_rate: u32,
    start_time: std::time::Instant,
) {
    if let Some(pb) = pb {
        let elapsed = start_time.elapsed();
        let audio_duration_secs = decoded_samples as f64 / sample_rate as f64;
        let realtime_multiplier = audio_duration_secs / elapsed.as_secs_f64();
        let final_time_str = crate::timestamp::time_str(audio_duration_secs);

        pb.set_style(
            ProgressStyle::with_template(
                "{bar:40.cyan/blue} {pos}/{len} superframes ({percent}%)\n{msg} | elapsed: {elapsed_precise}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        pb.finish_with_message(format!(
            "speed: {realtime_multiplier:.1}x | timestamp: {final_time_str}"
        ));
    }
}
