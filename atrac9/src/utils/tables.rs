//! Constant lookup tables.
//!
//! Plain tables are `const` items. Tables derived from formulas, the IMDCT
//! windows and the expanded Huffman codebooks live in [`TABLES`], built once
//! per process on first use.

use std::sync::LazyLock;

use crate::utils::huffman::HuffmanCodebook;
use crate::utils::huffman_tables::{
    SCALE_FACTOR_SIGNED, SCALE_FACTOR_UNSIGNED, SPECTRUM_A, SPECTRUM_B,
};

/// Highest quantization unit count a block can carry.
pub const MAX_QUANT_UNITS: usize = 30;

/// Largest frame size in samples.
pub const MAX_FRAME_SAMPLES: usize = 256;

/// Length of the main gradient curve, also the bound on gradient units.
pub const GRADIENT_CURVE_LEN: usize = 48;

#[rustfmt::skip]
pub const SAMPLE_RATES: [u32; 16] = [
    11025, 12000, 16000, 22050, 24000, 32000, 44100, 48000,
    44100, 48000, 64000, 88200, 96000, 128000, 176400, 192000,
];

#[rustfmt::skip]
pub const FRAME_SAMPLES_POWER: [u32; 16] = [6, 6, 7, 7, 7, 8, 8, 8, 6, 6, 7, 7, 7, 8, 8, 8];

#[rustfmt::skip]
pub const MAX_BAND_COUNT: [usize; 16] = [8, 8, 12, 12, 12, 18, 18, 18, 8, 8, 12, 12, 12, 16, 16, 16];

#[rustfmt::skip]
pub const BAND_TO_QUANT_UNIT_COUNT: [usize; 19] = [
    0, 4, 8, 10, 12, 13, 14, 15, 16, 18, 20, 21, 22, 23, 24, 25, 26, 28, 30,
];

#[rustfmt::skip]
pub const QUANT_UNIT_TO_COEFF_COUNT: [usize; 30] = [
     2,  2,  2,  2,  2,  2,  2,  2,  4,  4,  4,  4,  8,  8,  8,
     8,  8,  8,  8,  8, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
];

#[rustfmt::skip]
pub const QUANT_UNIT_TO_COEFF_INDEX: [usize; 31] = [
      0,   2,   4,   6,   8,  10,  12,  14,  16,  20,  24,  28,  32,  40,  48,  56,
     64,  72,  80,  88,  96, 112, 128, 144, 160, 176, 192, 208, 224, 240, 256,
];

#[rustfmt::skip]
pub const QUANT_UNIT_TO_CODEBOOK_INDEX: [usize; 30] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2,
    2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
];

#[rustfmt::skip]
const GRADIENT_CURVE: [i32; GRADIENT_CURVE_LEN] = [
     1,  1,  1,  1,  2,  2,  2,  2,  3,  3,  3,  4,  4,  5,  5,  6,
     7,  8,  9, 10, 11, 12, 13, 15, 16, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 26, 27, 27, 28, 28, 28, 29, 29, 29, 29, 30, 30, 30, 30,
];

pub fn max_huff_precision(high_sample_rate: bool) -> usize {
    if high_sample_rate { 1 } else { 7 }
}

pub fn min_band_count(high_sample_rate: bool) -> usize {
    if high_sample_rate { 1 } else { 3 }
}

pub fn max_extension_band(high_sample_rate: bool) -> usize {
    if high_sample_rate { 16 } else { 18 }
}

/// Per-unit offsets subtracted from delta-coded scale factors.
#[rustfmt::skip]
pub const SCALE_FACTOR_WEIGHTS: [[i32; 32]; 8] = [
    [ 0,  0,  0,  1,  1,  2,  2,  2,  2,  2,  2,  3,  2,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  6,  6,  7,  7,  8, 10, 12, 12, 12],
    [ 3,  2,  2,  1,  1,  1,  1,  1,  0,  1,  1,  1,  0,  0,  0,  1,  0,  1,  1,  1,  1,  1,  1,  2,  3,  3,  4,  5,  7, 10, 10, 10],
    [ 0,  2,  4,  5,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  8,  9, 12, 12, 12],
    [ 0,  1,  1,  2,  2,  2,  3,  3,  3,  3,  3,  4,  4,  4,  5,  5,  5,  6,  6,  6,  6,  7,  8,  8, 10, 11, 11, 12, 13, 13, 13, 13],
    [ 0,  2,  2,  3,  3,  4,  4,  5,  4,  5,  5,  5,  5,  6,  7,  8,  8,  8,  8,  9,  9,  9, 10, 10, 11, 12, 12, 13, 13, 14, 14, 14],
    [ 1,  1,  0,  0,  0,  0,  1,  0,  0,  1,  1,  1,  1,  1,  2,  2,  2,  2,  2,  3,  3,  3,  4,  4,  5,  6,  7,  7,  9, 11, 11, 11],
    [ 0,  5,  8, 10, 11, 11, 12, 12, 12, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 12, 12, 12, 12, 13, 15, 15, 15],
    [ 0,  2,  3,  4,  5,  6,  6,  7,  7,  8,  8,  8,  9,  9, 10, 10, 10, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 13, 13, 15, 15, 15],
];

/// Band extension groups `[group B unit, group C unit, band class]`, indexed by `units - 13`.
#[rustfmt::skip]
pub const BEX_GROUP_INFO: [[usize; 3]; 8] = [
    [16, 21,  0],
    [18, 22,  1],
    [20, 22,  2],
    [21, 22,  3],
    [21, 22,  3],
    [23, 24,  4],
    [23, 24,  4],
    [24, 24,  5],
];

/// Number of encoded values per `[mode][band class]`.
#[rustfmt::skip]
pub const BEX_ENCODED_VALUE_COUNTS: [[usize; 6]; 5] = [
    [0, 0, 0, 4, 4, 2],
    [0, 0, 0, 0, 0, 0],
    [0, 0, 0, 2, 2, 1],
    [0, 0, 0, 2, 2, 2],
    [1, 1, 1, 0, 0, 0],
];

/// Bit widths of each encoded value per `[mode][band class][value]`.
#[rustfmt::skip]
pub const BEX_DATA_LENGTHS: [[[u32; 4]; 6]; 5] = [
    [
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [5, 4, 3, 3],
        [4, 4, 3, 4],
        [4, 5, 0, 0],
    ],
    [
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [6, 6, 0, 0],
        [6, 6, 0, 0],
        [6, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [4, 4, 0, 0],
        [4, 4, 0, 0],
        [4, 4, 0, 0],
    ],
    [
        [3, 0, 0, 0],
        [3, 0, 0, 0],
        [3, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
];

/// Mode 0 gains for band class 3.
#[rustfmt::skip]
pub const BEX_MODE0_BANDS3: [&[f64]; 5] = [
    &[
        0.0,       0.198822,  0.2514343, 0.296051,  0.326355,  0.3771362, 0.3786926, 0.4540405,
        0.4877625, 0.5262451, 0.5447083, 0.5737,    0.6212158, 0.6222839, 0.6560974, 0.6896667,
        0.7555542, 0.7677917, 0.7918091, 0.7971497, 0.8188171, 0.8446045, 0.9790649, 0.9822083,
        0.9846191, 0.9859314, 0.9863586, 0.9863892, 0.9873352, 0.9881287, 0.9898682, 0.991333,
    ],
    &[
        0.0,        0.998291,   0.07592773, 0.7179565,  0.9851379,  0.5340271,  0.9013672,  0.6349182,
        0.7226257,  0.1948547,  0.7628174,  0.9873657,  0.8112183,  0.2715454,  0.9734192,  0.1443787,
        0.4640198,  0.3249207,  0.3790894,  0.08276367, 0.595459,   0.286438,   0.9806824,  0.7929077,
        0.6292114,  0.4887085,  0.2905273,  0.130188,   0.3140869,  0.5482483,  0.4210815,  0.1182861,
    ],
    &[
        0.0,        0.03155518, 0.08581543, 0.1364746,  0.1858826,  0.2368469,  0.2888184,  0.3432617,
        0.4012451,  0.4623108,  0.5271301,  0.5954895,  0.6681213,  0.7448425,  0.8245239,  0.909729,
    ],
    &[
        0.0,        0.04418945, 0.1303711,  0.227356,   0.3395996,  0.4735718,  0.626709,   0.8003845,
    ],
    &[
        0.0,        0.02804565, 0.09683228, 0.1849976,  0.3005981,  0.447052,   0.6168518,  0.8007813,
    ],
];

/// Mode 0 gains for band class 4.
#[rustfmt::skip]
pub const BEX_MODE0_BANDS4: [&[f64]; 5] = [
    &[
        0.0,       0.270874,  0.3479614, 0.3578186, 0.5083618, 0.5299072, 0.5819092, 0.6381836,
        0.7276917, 0.759552,  0.7878723, 0.9707336, 0.9713135, 0.9736023, 0.9759827, 0.9832458,
    ],
    &[
        0.0,       0.2330627, 0.5891418, 0.717041,  0.2036438, 0.1613464, 0.6668701, 0.9481201,
        0.9769897, 0.5111694, 0.3522644, 0.8209534, 0.293396,  0.975769,  0.5289917, 0.4372253,
    ],
    &[
        0.0,        0.04360962, 0.1056519,  0.1590576,  0.2078857,  0.2572937,  0.3082581,  0.3616028,
        0.4191589,  0.4792175,  0.5438538,  0.6125183,  0.6841125,  0.7589417,  0.8365173,  0.9148254,
    ],
    &[
        0.0,        0.04074097, 0.1164551,  0.2077026,  0.3184509,  0.4532166,  0.6124268,  0.7932129,
    ],
    &[
        0.0,         0.008880615, 0.02932739,  0.05593872,  0.08825684,  0.1259155,   0.1721497,   0.2270813,
        0.2901611,   0.3579712,   0.4334106,   0.5147095,   0.6023254,   0.6956177,   0.7952881,   0.8977356,
    ],
];

/// Mode 0 gains for band class 5.
#[rustfmt::skip]
pub const BEX_MODE0_BANDS5: [&[f64]; 3] = [
    &[
        0.0,       0.0737915, 0.1806335, 0.2687073, 0.3407898, 0.4047546, 0.4621887, 0.5168762,
        0.5703125, 0.6237488, 0.6763611, 0.7288208, 0.7808533, 0.8337708, 0.8874512, 0.941803,
    ],
    &[
        0.0,        0.07980347, 0.1615295,  0.1665649,  0.1822205,  0.2185669,  0.2292175,  0.2456665,
        0.2666321,  0.330658,   0.3330688,  0.3765259,  0.4085083,  0.4400024,  0.4407654,  0.4817505,
        0.4924011,  0.532074,   0.589386,   0.6131287,  0.6212463,  0.6278076,  0.6308899,  0.7660828,
        0.7850647,  0.7910461,  0.7929382,  0.803833,   0.98349,    0.9846191,  0.9852295,  0.9862671,
    ],
    &[
        0.0,        0.608429,   0.3672791,  0.3151855,  0.1488953,  0.2571716,  0.5103455,  0.3311157,
        0.05426025, 0.4254456,  0.7998352,  0.787323,   0.5418701,  0.292511,   0.08468628, 0.1410522,
        0.9819641,  0.960907,   0.03530884, 0.09729004, 0.5758362,  0.9941711,  0.7215576,  0.7183228,
        0.2028809,  0.09588623, 0.2032166,  0.1338806,  0.5003357,  0.187439,   0.9804993,  0.1107788,
    ],
];

/// Mode 2 flat gains.
#[rustfmt::skip]
pub const BEX_MODE2_SCALE: [f64; 64] = [
    0.0004272461, 0.001312256,  0.002441406,  0.003692627,  0.00491333,   0.006134033,  0.007507324,  0.008972168,
    0.01049805,   0.01223755,   0.0140686,    0.01599121,   0.01800537,   0.02026367,   0.02264404,   0.025177,
    0.02792358,   0.0307312,    0.03344727,   0.03631592,   0.03952026,   0.04275513,   0.04608154,   0.04968262,
    0.05355835,   0.05783081,   0.06195068,   0.06677246,   0.07196045,   0.07745361,   0.08319092,   0.0899353,
    0.09759521,   0.1056213,    0.1138916,    0.1236267,    0.1348267,    0.1470337,    0.1603394,    0.1755676,
    0.1905823,    0.2071228,    0.2245178,    0.2444153,    0.2658997,    0.2897644,    0.3146057,    0.3450012,
    0.3766174,    0.412262,     0.4505615,    0.4893799,    0.5305481,    0.5731201,    0.6157837,    0.6580811,
    0.6985168,    0.7435303,    0.7865906,    0.8302612,    0.8718567,    0.9125671,    0.9575806,    0.9996643,
];

/// Mode 3 starting gain.
#[rustfmt::skip]
pub const BEX_MODE3_INITIAL: [f64; 16] = [
    0.3491211, 0.5371094, 0.6782227, 0.7910156, 0.9057617, 1.024902,  1.15625,   1.290527,
    1.458984,  1.664551,  1.929688,  2.27832,   2.831543,  3.65918,   5.257813,  8.373047,
];

/// Mode 3 per-bin gain exponent (base 2).
#[rustfmt::skip]
pub const BEX_MODE3_RATE: [f64; 16] = [
    -0.2913818,   -0.2541504,   -0.1664429,   -0.147644,    -0.1342163,   -0.1220703,   -0.1117554,   -0.1026611,
    -0.09436035,  -0.08483887,  -0.07476807,  -0.06304932,  -0.04492188,  -0.0244751,   0.0001831055, 0.04174805,
];

/// Mode 4 multiplier applied to the three fixed group gains.
#[rustfmt::skip]
pub const BEX_MODE4_MULTIPLIER: [f64; 8] = [
    0.03610229, 0.1260681,  0.2227478,  0.3338318,  0.466217,   0.6221313,  0.7989197,  0.9939575,
];

/// Tables built once per process.
pub struct Tables {
    /// `2^(x - 15)`, indexed by scale factor.
    pub spectrum_scale: [f64; 32],
    pub quantizer_step_size: [f64; 16],
    pub quantizer_fine_step_size: [f64; 16],
    /// `gradient_curves[len - 1][i]` for `i < len`.
    pub gradient_curves: [[i32; GRADIENT_CURVE_LEN]; GRADIENT_CURVE_LEN],
    /// Synthesis windows for frame powers 6, 7 and 8.
    pub imdct_windows: [Vec<f64>; 3],
    /// Spectrum codebooks indexed `[set][precision][codebook]`.
    pub spectrum: [[[Option<HuffmanCodebook>; 4]; 8]; 2],
    pub scale_factor_unsigned: [Option<HuffmanCodebook>; 7],
    pub scale_factor_signed: [Option<HuffmanCodebook>; 6],
}

pub static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

impl Tables {
    fn build() -> Self {
        let spectrum_scale = std::array::from_fn(|x| 2f64.powi(x as i32 - 15));
        let quantizer_step_size: [f64; 16] =
            std::array::from_fn(|x| 2.0 / ((1u32 << (x + 1)) - 1) as f64);
        let quantizer_fine_step_size = quantizer_step_size.map(|step| step / 65535.0);

        let mut gradient_curves = [[0; GRADIENT_CURVE_LEN]; GRADIENT_CURVE_LEN];
        for (len, curve) in (1..=GRADIENT_CURVE_LEN).zip(gradient_curves.iter_mut()) {
            for (i, value) in curve.iter_mut().take(len).enumerate() {
                *value = GRADIENT_CURVE[i * GRADIENT_CURVE_LEN / len];
            }
        }

        let sets = [&SPECTRUM_A, &SPECTRUM_B];
        let spectrum = std::array::from_fn(|set| {
            std::array::from_fn(|precision| {
                std::array::from_fn(|index| {
                    sets[set][precision][index]
                        .as_ref()
                        .map(HuffmanCodebook::new)
                })
            })
        });

        log::trace!("Built constant tables");

        Self {
            spectrum_scale,
            quantizer_step_size,
            quantizer_fine_step_size,
            gradient_curves,
            imdct_windows: [imdct_window(6), imdct_window(7), imdct_window(8)],
            spectrum,
            scale_factor_unsigned: std::array::from_fn(|i| {
                SCALE_FACTOR_UNSIGNED[i].as_ref().map(HuffmanCodebook::new)
            }),
            scale_factor_signed: std::array::from_fn(|i| {
                SCALE_FACTOR_SIGNED[i].as_ref().map(HuffmanCodebook::new)
            }),
        }
    }
}

fn mdct_window(frame_size_power: u32) -> Vec<f64> {
    let size = 1usize << frame_size_power;

    (0..size)
        .map(|i| {
            let x = ((i as f64 + 0.5) / size as f64 - 0.5) * std::f64::consts::PI;
            (x.sin() + 1.0) * 0.5
        })
        .collect()
}

fn imdct_window(frame_size_power: u32) -> Vec<f64> {
    let window = mdct_window(frame_size_power);
    let size = window.len();

    (0..size)
        .map(|i| {
            let mirror = window[size - 1 - i];
            window[i] / (mirror * mirror + window[i] * window[i])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quant_unit_tables_agree() {
        for unit in 0..MAX_QUANT_UNITS {
            assert_eq!(
                QUANT_UNIT_TO_COEFF_INDEX[unit] + QUANT_UNIT_TO_COEFF_COUNT[unit],
                QUANT_UNIT_TO_COEFF_INDEX[unit + 1]
            );
        }
        assert_eq!(QUANT_UNIT_TO_COEFF_INDEX[MAX_QUANT_UNITS], MAX_FRAME_SAMPLES);
    }

    #[test]
    fn test_derived_scalars() {
        let tables = &*TABLES;
        assert_eq!(tables.spectrum_scale[15], 1.0);
        assert_eq!(tables.spectrum_scale[16], 2.0);
        assert_eq!(tables.quantizer_step_size[0], 2.0);
        assert!((tables.quantizer_step_size[1] - 2.0 / 3.0).abs() < 1e-15);
        assert!((tables.quantizer_fine_step_size[0] - 2.0 / 65535.0).abs() < 1e-15);
    }

    #[test]
    fn test_gradient_curves() {
        let curves = &TABLES.gradient_curves;
        assert_eq!(curves[GRADIENT_CURVE_LEN - 1], GRADIENT_CURVE);
        assert_eq!(curves[0][0], 1);
        assert_eq!(&curves[1][..2], &[1, 16]);
        for (len, curve) in (1..=GRADIENT_CURVE_LEN).zip(curves) {
            assert!(curve[..len].windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_imdct_window_is_power_complementary() {
        for (power, window) in (6..=8).zip(&TABLES.imdct_windows) {
            assert_eq!(window.len(), 1 << power);
            let analysis = mdct_window(power);
            let n = window.len();
            for i in 0..n {
                let sum = analysis[i] * window[i] + analysis[n - 1 - i] * window[n - 1 - i];
                assert!((sum - 1.0).abs() < 1e-12, "power {power}, bin {i}");
            }
        }
    }

    #[test]
    fn test_codebooks_present_where_used() {
        let tables = &*TABLES;
        for precision in 2..=7 {
            for index in 0..4 {
                assert!(tables.spectrum[0][precision][index].is_some());
            }
            for index in 1..4 {
                assert!(tables.spectrum[1][precision][index].is_some());
            }
        }
        assert!(tables.scale_factor_unsigned[1..].iter().all(Option::is_some));
        assert!(tables.scale_factor_signed[2..].iter().all(Option::is_some));
    }
}
