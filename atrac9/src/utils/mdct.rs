//! Inverse MDCT with overlap-add.
//!
//! The transform is a radix-2 DCT-IV followed by a windowed fold into the
//! time domain. Each [`Imdct`] keeps the second half of its previous output
//! for overlap-add with the next frame.

use std::sync::LazyLock;

use crate::utils::tables::TABLES;

const MAX_BITS: usize = 8;

struct TrigTables {
    sin: Vec<Vec<f64>>,
    cos: Vec<Vec<f64>>,
    shuffle: Vec<Vec<usize>>,
}

static TRIG_TABLES: LazyLock<TrigTables> = LazyLock::new(|| {
    let mut tables = TrigTables {
        sin: Vec::with_capacity(MAX_BITS + 1),
        cos: Vec::with_capacity(MAX_BITS + 1),
        shuffle: Vec::with_capacity(MAX_BITS + 1),
    };

    for bits in 0..=MAX_BITS as u32 {
        let size = 1usize << bits;
        let angles = (0..size)
            .map(|i| std::f64::consts::PI * (4 * i + 1) as f64 / (4 * size) as f64);

        tables.sin.push(angles.clone().map(f64::sin).collect());
        tables.cos.push(angles.map(f64::cos).collect());
        tables.shuffle.push(
            (0..size)
                .map(|i| bit_reverse(i ^ (i >> 1), bits))
                .collect(),
        );
    }

    tables
});

fn bit_reverse(value: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    value.reverse_bits() >> (usize::BITS - bits)
}

#[derive(Debug, Clone)]
pub struct Imdct {
    bits: u32,
    window: &'static [f64],
    previous: Vec<f64>,
    dct_out: Vec<f64>,
    dct_tmp: Vec<f64>,
}

impl Imdct {
    /// Creates a transform for frames of `1 << bits` samples, `bits` in 6..=8.
    pub fn new(bits: u32) -> Self {
        let size = 1usize << bits;

        Self {
            bits,
            window: &TABLES.imdct_windows[bits as usize - 6],
            previous: vec![0.0; size],
            dct_out: vec![0.0; size],
            dct_tmp: vec![0.0; size],
        }
    }

    pub fn size(&self) -> usize {
        1 << self.bits
    }

    /// Transforms one frame of spectrum into `output`, overlapping with the
    /// previous frame.
    pub fn run(&mut self, input: &[f64], output: &mut [f64]) {
        let size = self.size();
        let half = size / 2;

        dct4(self.bits, &input[..size], &mut self.dct_out, &mut self.dct_tmp);

        let window = self.window;
        let dct = &self.dct_out;
        let previous = &mut self.previous;

        for i in 0..half {
            output[i] = window[i] * dct[i + half] + previous[i];
            output[i + half] = window[i + half] * -dct[size - 1 - i] - previous[i + half];
            previous[i] = window[size - 1 - i] * -dct[half - i - 1];
            previous[i + half] = window[half - i - 1] * dct[i];
        }
    }
}

/// Unnormalized DCT-IV: `out[k] = sum(in[n] * cos(pi / N * (n + 0.5) * (k + 0.5)))`.
fn dct4(bits: u32, input: &[f64], output: &mut [f64], tmp: &mut [f64]) {
    let trig = &*TRIG_TABLES;
    let size = 1usize << bits;
    let half = size >> 1;

    let (sin, cos) = (&trig.sin[bits as usize], &trig.cos[bits as usize]);
    for i in 0..half {
        let a = input[2 * i];
        let b = input[size - 1 - 2 * i];
        tmp[2 * i] = a * cos[i] + b * sin[i];
        tmp[2 * i + 1] = a * sin[i] - b * cos[i];
    }

    let stage_count = bits.saturating_sub(1);
    for stage in 0..stage_count {
        let block_count = 1usize << stage;
        let block_size_bits = stage_count - stage;
        let block_half_bits = block_size_bits - 1;
        let block_size = 1usize << block_size_bits;
        let block_half = 1usize << block_half_bits;

        let (sin, cos) = (
            &trig.sin[block_half_bits as usize],
            &trig.cos[block_half_bits as usize],
        );

        for block in 0..block_count {
            for i in 0..block_half {
                let front = (block * block_size + i) * 2;
                let back = front + block_size;

                let a = tmp[front] - tmp[back];
                let b = tmp[front + 1] - tmp[back + 1];

                tmp[front] += tmp[back];
                tmp[front + 1] += tmp[back + 1];
                tmp[back] = a * cos[i] + b * sin[i];
                tmp[back + 1] = a * sin[i] - b * cos[i];
            }
        }
    }

    let shuffle = &trig.shuffle[bits as usize];
    for (out, &index) in output.iter_mut().zip(shuffle) {
        *out = tmp[index];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signal(size: usize, seed: u32) -> Vec<f64> {
        let mut state = seed;
        (0..size)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (state >> 8) as f64 / (1u32 << 24) as f64 * 2.0 - 1.0
            })
            .collect()
    }

    #[test]
    fn test_dct4_matches_direct_formula() {
        for bits in 6..=8u32 {
            let size = 1usize << bits;
            let input = test_signal(size, bits);
            let mut output = vec![0.0; size];
            let mut tmp = vec![0.0; size];
            dct4(bits, &input, &mut output, &mut tmp);

            for (k, &value) in output.iter().enumerate() {
                let expected: f64 = input
                    .iter()
                    .enumerate()
                    .map(|(n, &x)| {
                        x * (std::f64::consts::PI / size as f64
                            * (n as f64 + 0.5)
                            * (k as f64 + 0.5))
                            .cos()
                    })
                    .sum();
                assert!((value - expected).abs() < 1e-9, "bits {bits}, bin {k}");
            }
        }
    }

    #[test]
    fn test_zero_spectrum_gives_zero_pcm() {
        let mut imdct = Imdct::new(7);
        let spectrum = [0.0; 128];
        let mut pcm = [1.0; 128];

        for _ in 0..3 {
            imdct.run(&spectrum, &mut pcm);
            assert!(pcm.iter().all(|&x| x == 0.0));
        }
    }

    #[test]
    fn test_history_spans_exactly_one_frame() {
        let mut imdct = Imdct::new(6);
        let spectrum = test_signal(64, 7);
        let silence = [0.0; 64];
        let mut pcm = [0.0; 64];

        imdct.run(&spectrum, &mut pcm);
        imdct.run(&silence, &mut pcm);
        assert!(pcm.iter().any(|&x| x != 0.0));
        imdct.run(&silence, &mut pcm);
        assert!(pcm.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_overlap_add_is_continuous_across_frames() {
        let first = test_signal(256, 1);
        let second = test_signal(256, 2);
        let silence = [0.0; 256];

        let mut tail = [0.0; 256];
        let mut imdct = Imdct::new(8);
        imdct.run(&first, &mut tail);
        imdct.run(&silence, &mut tail);

        let mut fresh = [0.0; 256];
        Imdct::new(8).run(&second, &mut fresh);

        let mut joined = [0.0; 256];
        let mut imdct = Imdct::new(8);
        imdct.run(&first, &mut joined);
        imdct.run(&second, &mut joined);

        for i in 0..256 {
            assert!((joined[i] - (fresh[i] + tail[i])).abs() < 1e-9, "sample {i}");
        }
    }

    #[test]
    fn test_bit_reverse() {
        assert_eq!(bit_reverse(0b001, 3), 0b100);
        assert_eq!(bit_reverse(0b110, 3), 0b011);
        assert_eq!(bit_reverse(5, 0), 0);
    }
}
