//! Superframe playback order, with optional loop repetition.
//!
//! Output sample `n` is stream sample `n + encoder_delay`. A pass decodes the
//! superframes covering a run of output samples and keeps only that run.
//! Jumping back to the loop start does not reset the decoder, so the first
//! superframe of every repeat overlaps with whatever was decoded before it.

use std::ops::Range;

use crate::at9::At9File;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
    pub superframes: Range<usize>,
    /// Stream samples kept, encoder delay included.
    pub samples: Range<u64>,
}

impl Pass {
    fn new(output: Range<u64>, delay: u64, superframe_samples: u64) -> Self {
        let samples = output.start + delay..output.end + delay;
        let first = samples.start / superframe_samples;
        let last = samples.end.div_ceil(superframe_samples);

        Self {
            superframes: first as usize..last as usize,
            samples,
        }
    }

    /// Samples of `superframe` inside this pass, relative to its start.
    pub fn window(&self, superframe: usize, superframe_samples: usize) -> Range<usize> {
        let base = (superframe * superframe_samples) as u64;
        let end = base + superframe_samples as u64;

        let start = self.samples.start.clamp(base, end);
        let stop = self.samples.end.clamp(base, end);

        (start - base) as usize..(stop - base) as usize
    }
}

#[derive(Debug, Clone)]
pub struct Schedule {
    pub passes: Vec<Pass>,
    pub superframe_samples: usize,
}

impl Schedule {
    /// Builds the passes for `loops` repetitions of the file's loop region.
    ///
    /// With no loop region or `loops == 0` the file plays once.
    pub fn new(file: &At9File, loops: u32) -> Self {
        let superframe_samples = file.config.superframe_samples;
        let samples_per = superframe_samples as u64;
        let delay = file.encoder_delay();

        // never schedule past the superframes the file holds
        let available = (file.superframe_count as u64 * samples_per).saturating_sub(delay);
        let end = file.sample_count().min(available);

        let pass = |range: Range<u64>| {
            Pass::new(range.start.min(end)..range.end.min(end), delay, samples_per)
        };

        let passes = match file.loop_points {
            Some(points) if loops > 0 => {
                // loop end is inclusive
                let loop_end = points.end + 1;

                let mut passes = vec![pass(0..loop_end)];
                passes.extend((1..loops).map(|_| pass(points.start..loop_end)));
                passes.push(pass(points.start..end));
                passes
            }
            _ => vec![pass(0..end)],
        };

        Self {
            passes,
            superframe_samples,
        }
    }

    pub fn superframe_count(&self) -> u64 {
        self.passes.iter().map(|p| p.superframes.len() as u64).sum()
    }

    pub fn output_samples(&self) -> u64 {
        self.passes
            .iter()
            .map(|p| p.samples.end - p.samples.start)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::at9::tests::TestFile;
    use anyhow::Result;

    fn file(loop_points: Option<(i32, i32)>) -> Result<At9File> {
        let test = TestFile {
            config: [0xFE, 0x70, 0x07, 0xE0],
            sample_count: 1000,
            encoder_delay: 100,
            loop_points,
            superframes: vec![vec![0; 64]; 5],
        };
        At9File::parse(&test.build())
    }

    #[test]
    fn test_single_pass_trims_delay() -> Result<()> {
        let schedule = Schedule::new(&file(None)?, 3);

        assert_eq!(schedule.passes.len(), 1);
        let pass = &schedule.passes[0];
        assert_eq!(pass.superframes, 0..5);
        assert_eq!(pass.samples, 100..1100);
        assert_eq!(pass.window(0, 256), 100..256);
        assert_eq!(pass.window(2, 256), 0..256);
        assert_eq!(pass.window(4, 256), 0..76);
        assert_eq!(schedule.output_samples(), 1000);

        Ok(())
    }

    #[test]
    fn test_loop_passes() -> Result<()> {
        // loop [200, 800] in output samples
        let schedule = Schedule::new(&file(Some((300, 900)))?, 2);

        let passes: Vec<_> = schedule
            .passes
            .iter()
            .map(|p| (p.superframes.clone(), p.samples.clone()))
            .collect();

        assert_eq!(
            passes,
            vec![
                (0..4, 100..901),
                (1..4, 300..901),
                (1..5, 300..1100),
            ]
        );
        assert_eq!(schedule.superframe_count(), 11);
        assert_eq!(schedule.output_samples(), 801 + 601 + 800);

        Ok(())
    }

    #[test]
    fn test_zero_loops_plays_once() -> Result<()> {
        let schedule = Schedule::new(&file(Some((300, 900)))?, 0);
        assert_eq!(schedule.passes.len(), 1);
        assert_eq!(schedule.output_samples(), 1000);

        Ok(())
    }

    #[test]
    fn test_truncated_data_shortens_output() -> Result<()> {
        let test = TestFile {
            config: [0xFE, 0x70, 0x07, 0xE0],
            sample_count: 1000,
            encoder_delay: 100,
            loop_points: None,
            superframes: vec![vec![0; 64]; 3],
        };
        let schedule = Schedule::new(&At9File::parse(&test.build())?, 0);

        assert_eq!(schedule.passes[0].superframes, 0..3);
        assert_eq!(schedule.output_samples(), 768 - 100);

        Ok(())
    }
}
