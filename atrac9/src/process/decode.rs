use anyhow::{Result, anyhow, bail};
use log::Level::Warn;
use log::{debug, trace};

use crate::log_or_err;
use crate::process::{band_extension, quantization, stereo};
use crate::structs::block::Block;
use crate::structs::config::Atrac9Config;
use crate::structs::frame::Frame;
use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::DecodeError;

/// Output sample format for [`Decoder::decode`].
pub trait PcmSample: Copy {
    /// Converts a decoded sample on the 16-bit integer scale.
    fn from_decoded(value: f64) -> Self;
}

impl PcmSample for f32 {
    #[inline(always)]
    fn from_decoded(value: f64) -> Self {
        (value / 32767.0) as f32
    }
}

impl PcmSample for i16 {
    #[inline(always)]
    fn from_decoded(value: f64) -> Self {
        (value + 0.5).floor().clamp(i16::MIN as f64, i16::MAX as f64) as i16
    }
}

/// Decodes ATRAC9 superframes to planar PCM.
///
/// A decoder starts uninitialized. [`Decoder::initialize`] takes the 4-byte
/// config descriptor and builds the per-stream state, after which each call
/// to [`Decoder::decode`] turns one superframe into
/// [`Atrac9Config::superframe_samples`] samples per channel.
///
/// ```rust,no_run
/// use atrac9::process::decode::Decoder;
///
/// let mut decoder = Decoder::default();
/// decoder.initialize(&[0xFE, 0x74, 0x1F, 0xF0])?;
///
/// let config = decoder.config().cloned().expect("initialized");
/// let mut pcm = vec![vec![0i16; config.superframe_samples]; config.channel_count];
///
/// let superframe = std::fs::read("superframe.bin")?;
/// decoder.decode(&superframe, &mut pcm)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Default)]
pub struct Decoder {
    state: DecoderState,
}

#[derive(Debug)]
pub struct DecoderState {
    pub fail_level: log::Level,
    pub frame: Option<Frame>,
}

impl Default for DecoderState {
    fn default() -> Self {
        Self {
            fail_level: log::Level::Error,
            frame: None,
        }
    }
}

impl Decoder {
    /// Parses the config descriptor and resets all decoding history.
    ///
    /// On failure the decoder is left uninitialized.
    pub fn initialize(&mut self, config_data: &[u8]) -> Result<()> {
        self.state.frame = None;

        let config = Atrac9Config::from_bytes(config_data)?;
        debug!(
            "Initializing decoder: {} block(s), {} samples per superframe",
            config.blocks.len(),
            config.superframe_samples
        );

        self.state.frame = Some(Frame::new(config));

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.frame.is_some()
    }

    pub fn config(&self) -> Option<&Atrac9Config> {
        self.state.frame.as_ref().map(|frame| &frame.config)
    }

    /// Sets the failure level for validation errors.
    ///
    /// - `log::Level::Error`: Only fail on Error level messages (default)
    /// - `log::Level::Warn`: Fail on Warning level and above (strict mode)
    pub fn set_fail_level(&mut self, level: log::Level) {
        self.state.fail_level = level;
    }

    /// Decodes one superframe into `pcm`, one buffer per channel in block order.
    ///
    /// Samples are written at `[0, superframe_samples)` of each buffer. If an
    /// error is returned, the contents of `pcm` are unspecified.
    pub fn decode<S, B>(&mut self, superframe: &[u8], pcm: &mut [B]) -> Result<()>
    where
        S: PcmSample,
        B: AsMut<[S]>,
    {
        let Some(frame) = self.state.frame.as_mut() else {
            bail!(DecodeError::NotInitialized);
        };

        validate_buffers::<S, B>(&frame.config, superframe, pcm)?;

        let mut reader = BsIoSliceReader::from_slice(superframe);
        let frame_samples = frame.config.frame_samples;

        for frame_index in 0..frame.config.frames_per_superframe {
            frame.frame_index = frame_index;
            frame.read(&mut reader)?;

            for block in &mut frame.blocks {
                decode_block(block)?;
            }

            let start = frame_index * frame_samples;
            for (channel, out) in frame.channels().zip(pcm.iter_mut()) {
                let out = &mut out.as_mut()[start..start + frame_samples];
                for (dest, &value) in out.iter_mut().zip(&channel.pcm) {
                    *dest = S::from_decoded(value);
                }
            }

            reader.align(8)?;
        }

        trace!(
            "Decoded superframe: {} of {} bits used",
            reader.position()?,
            reader.len()
        );

        let overrun = reader.overrun();
        if overrun > 0 {
            log_or_err!(
                self.state,
                Warn,
                anyhow!(DecodeError::SuperframeOverrun {
                    overrun,
                    len: reader.len(),
                })
            );
        }

        Ok(())
    }
}

fn validate_buffers<S, B>(config: &Atrac9Config, superframe: &[u8], pcm: &mut [B]) -> Result<()>
where
    B: AsMut<[S]>,
{
    if superframe.len() < config.superframe_bytes {
        bail!(DecodeError::SuperframeTooSmall {
            expected: config.superframe_bytes,
            actual: superframe.len(),
        });
    }

    if pcm.len() < config.channel_count {
        bail!(DecodeError::PcmChannelsTooFew {
            expected: config.channel_count,
            actual: pcm.len(),
        });
    }

    for (channel, buffer) in pcm.iter_mut().take(config.channel_count).enumerate() {
        let actual = buffer.as_mut().len();
        if actual < config.superframe_samples {
            bail!(DecodeError::PcmBufferTooSmall {
                channel,
                expected: config.superframe_samples,
                actual,
            });
        }
    }

    Ok(())
}

fn decode_block(block: &mut Block) -> Result<()> {
    quantization::dequantize_spectra(block);
    stereo::apply_intensity_stereo(block);
    quantization::scale_spectrum(block);
    band_extension::apply_band_extension(block)?;

    for channel in &mut block.channels {
        channel.imdct.run(&channel.spectra, &mut channel.pcm);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bitstream_io::{pack_bits, sign_extend};
    use crate::utils::errors::{ErrorKind, error_kind};
    use crate::utils::huffman::HuffmanSource;
    use crate::utils::huffman_tables::{SPECTRUM_A, SPECTRUM_B};
    use crate::utils::mdct::Imdct;
    use crate::utils::tables::{
        BEX_MODE2_SCALE, BEX_MODE4_MULTIPLIER, QUANT_UNIT_TO_CODEBOOK_INDEX,
        QUANT_UNIT_TO_COEFF_INDEX, TABLES,
    };

    /// 48 kHz mono, 64-byte frames, one frame per superframe.
    const MONO: [u8; 4] = [0xFE, 0x70, 0x07, 0xE0];
    /// 48 kHz mono, 16-byte frames.
    const MONO_SHORT: [u8; 4] = [0xFE, 0x70, 0x01, 0xE0];
    /// 48 kHz dual mono, 128-byte frames, two frames per superframe.
    const DUAL_MONO: [u8; 4] = [0xFE, 0x72, 0x0F, 0xE8];
    /// 48 kHz stereo, 128-byte frames.
    const STEREO: [u8; 4] = [0xFE, 0x74, 0x0F, 0xE0];
    /// 48 kHz mono, 256-byte frames.
    const MONO_LONG: [u8; 4] = [0xFE, 0x70, 0x1F, 0xE0];

    /// Coarse and fine precision for a unit under a flat zero gradient.
    fn precision(sf: i32) -> (i32, i32) {
        let p = sf.clamp(1, 30);
        if p > 15 { (15, p - 15) } else { (p, 0) }
    }

    /// Source of the Huffman codebook a unit is coded with, if any.
    fn spectrum_source(unit: usize, set: usize, coarse: i32) -> Option<HuffmanSource> {
        let bits = coarse as usize + 1;
        if bits > 7 {
            return None;
        }
        let family = if set == 0 { &SPECTRUM_A } else { &SPECTRUM_B };
        family[bits][QUANT_UNIT_TO_CODEBOOK_INDEX[unit]]
    }

    fn value_bits(source: &HuffmanSource) -> u32 {
        source.codes.len().trailing_zeros() >> source.value_count_power
    }

    #[derive(Clone)]
    struct TestChannel {
        sf: Vec<i32>,
        /// Codebook family per unit, as the decoder should pick it.
        sets: Vec<usize>,
        coarse: Vec<i32>,
        fine: Vec<i32>,
    }

    impl TestChannel {
        fn new(sf: &[i32], seed: i32) -> Self {
            Self::with_sets(sf, &vec![0; sf.len()], seed)
        }

        fn with_sets(sf: &[i32], sets: &[usize], seed: i32) -> Self {
            let mut coarse = vec![0; 256];
            let mut fine = vec![0; 256];

            for (unit, &value) in sf.iter().enumerate() {
                let (p, pf) = precision(value);
                let range = QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1];

                if let Some(source) = spectrum_source(unit, sets[unit], p) {
                    // any symbol the codebook can code, unpacked low bits first
                    let bits = value_bits(&source);
                    let symbols = source.codes.len();
                    let per_symbol = 1 << source.value_count_power;
                    for (group, values) in coarse[range].chunks_mut(per_symbol).enumerate() {
                        let start = (unit * 7 + group * 13 + seed as usize * 5) % symbols;
                        let symbol = (start..start + symbols)
                            .map(|s| s % symbols)
                            .find(|&s| source.bits[s] != 0)
                            .expect("codebook has symbols");
                        for (k, value) in values.iter_mut().enumerate() {
                            let raw = (symbol as u32 >> (k as u32 * bits)) & ((1 << bits) - 1);
                            *value = sign_extend(raw, bits);
                        }
                    }
                    continue;
                }

                for bin in range {
                    let pattern = (bin as i32 * 37 + seed * 11) % 200 - 100;
                    coarse[bin] = pattern.clamp(-(1 << p), (1 << p) - 1);
                    if pf > 0 {
                        fine[bin] = (pattern / 3).clamp(-(1 << pf), (1 << pf) - 1);
                    }
                }
            }

            Self {
                sf: sf.to_vec(),
                sets: sets.to_vec(),
                coarse,
                fine,
            }
        }

        /// Dequantized, unscaled spectrum of the first `coded` units.
        fn dequantized(&self, coded: usize) -> [f64; 256] {
            let mut spectrum = [0.0; 256];
            for unit in 0..coded {
                let (p, pf) = precision(self.sf[unit]);
                let step = TABLES.quantizer_step_size[p as usize];
                let step_fine = TABLES.quantizer_fine_step_size[pf as usize];
                for bin in QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1] {
                    spectrum[bin] = self.coarse[bin] as f64 * step + self.fine[bin] as f64 * step_fine;
                }
            }
            spectrum
        }
    }

    fn signed(value: i32, bits: i32) -> (u32, u32) {
        (bits as u32, value as u32 & ((1u32 << bits) - 1))
    }

    fn push_block_start(bits: &mut Vec<(u32, u32)>, first: bool, reuse: bool) {
        bits.push((1, !first as u32));
        bits.push((1, reuse as u32));
    }

    /// Flat gradient at value 0 over units 1..1, no boundary boost.
    fn push_flat_gradient(bits: &mut Vec<(u32, u32)>) {
        bits.extend([(2, 0), (6, 1), (6, 0), (5, 0), (5, 0), (4, 0)]);
    }

    fn push_clc_scale_factors(bits: &mut Vec<(u32, u32)>, channel: &TestChannel) {
        // mode 1, 5-bit values without a base
        bits.extend([(2, 1), (2, 3)]);
        bits.extend(channel.sf.iter().map(|&sf| (5, sf as u32)));
    }

    /// Zero distances from a baseline with the 2-bit signed codebook.
    fn push_zero_distances(bits: &mut Vec<(u32, u32)>, mode: u32, units: usize) {
        bits.extend([(2, mode), (2, 0)]);
        bits.extend(std::iter::repeat_n((1, 0), units));
    }

    fn push_coefficients(bits: &mut Vec<(u32, u32)>, channel: &TestChannel, coded: usize) {
        for unit in 0..coded {
            let (p, _) = precision(channel.sf[unit]);
            let range = QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1];

            let Some(source) = spectrum_source(unit, channel.sets[unit], p) else {
                bits.extend(range.map(|bin| signed(channel.coarse[bin], p + 1)));
                continue;
            };

            let width = value_bits(&source);
            let mask = (1u32 << width) - 1;
            for values in channel.coarse[range].chunks(1 << source.value_count_power) {
                let symbol = values
                    .iter()
                    .enumerate()
                    .fold(0, |acc, (k, &v)| acc | (v as u32 & mask) << (k as u32 * width));
                let symbol = symbol as usize;
                bits.push((source.bits[symbol] as u32, source.codes[symbol] as u32));
            }
        }
        for unit in 0..coded {
            let (_, pf) = precision(channel.sf[unit]);
            if pf == 0 {
                continue;
            }
            for bin in QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1] {
                bits.push(signed(channel.fine[bin], pf + 1));
            }
        }
    }

    /// A mono block with 10 quantization units.
    fn mono_block(channel: &TestChannel, first: bool, reuse: bool) -> Vec<u8> {
        let mut bits = Vec::new();
        push_block_start(&mut bits, first, reuse);
        if !reuse {
            // band 3 (10 units), no band extension
            bits.extend([(4, 0), (1, 0)]);
        }
        push_flat_gradient(&mut bits);
        // no extension data
        bits.push((1, 0));

        if first {
            push_clc_scale_factors(&mut bits, channel);
        } else {
            push_zero_distances(&mut bits, 2, channel.sf.len());
        }
        push_coefficients(&mut bits, channel, channel.sf.len());

        pack_bits(&bits)
    }

    fn superframe(blocks: &[Vec<u8>], len: usize) -> Vec<u8> {
        let mut data = blocks.concat();
        assert!(data.len() <= len);
        data.resize(len, 0);
        data
    }

    fn scaled(mut spectrum: [f64; 256], sf: &[i32]) -> [f64; 256] {
        for (unit, &value) in sf.iter().enumerate() {
            let scale = TABLES.spectrum_scale[value as usize];
            for bin in QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1] {
                spectrum[bin] *= scale;
            }
        }
        spectrum
    }

    fn synthesize(imdct: &mut Imdct, spectrum: &[f64; 256]) -> Vec<f32> {
        let mut pcm = [0.0; 256];
        imdct.run(spectrum, &mut pcm);
        pcm.iter().map(|&x| f32::from_decoded(x)).collect()
    }

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() <= 1e-6, "sample {i}: {a} != {e}");
        }
    }

    const MONO_SF: [i32; 10] = [22, 18, 12, 9, 7, 7, 8, 10, 7, 7];

    #[test]
    fn test_decode_before_initialize() {
        let mut decoder = Decoder::default();
        let mut pcm = vec![vec![0f32; 256]];

        let err = decoder.decode(&[0u8; 64], &mut pcm).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::NotInitialized);
        assert!(!decoder.is_initialized());
    }

    #[test]
    fn test_failed_initialize_resets_decoder() -> Result<()> {
        let mut decoder = Decoder::default();
        decoder.initialize(&MONO)?;
        assert!(decoder.is_initialized());

        let err = decoder.initialize(&[0xFE, 0x71, 0x07, 0xE0]).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::ConfigInvalid);
        assert!(!decoder.is_initialized());
        assert!(decoder.config().is_none());

        Ok(())
    }

    #[test]
    fn test_buffer_validation() -> Result<()> {
        let mut decoder = Decoder::default();
        decoder.initialize(&STEREO)?;

        let mut pcm = vec![vec![0i16; 256]; 2];
        let err = decoder.decode(&[0u8; 127], &mut pcm).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::BufferTooSmall);

        let mut pcm = vec![vec![0i16; 256]; 1];
        let err = decoder.decode(&[0u8; 128], &mut pcm).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::BufferTooSmall);

        let mut pcm = vec![vec![0i16; 256], vec![0i16; 255]];
        let err = decoder.decode(&[0u8; 128], &mut pcm).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::BufferTooSmall);

        Ok(())
    }

    #[test]
    fn test_invalid_block_header() -> Result<()> {
        let mut decoder = Decoder::default();
        decoder.initialize(&MONO)?;

        // first frame flagged as a continuation
        let mut data = vec![0u8; 64];
        data[0] = 0x80;
        let mut pcm = vec![vec![0f32; 256]];
        let err = decoder.decode(&data, &mut pcm).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::InvalidData);

        Ok(())
    }

    #[test]
    fn test_mono_superframe() -> Result<()> {
        let channel = TestChannel::new(&MONO_SF, 1);
        let data = superframe(&[mono_block(&channel, true, false)], 64);

        let mut decoder = Decoder::default();
        decoder.initialize(&MONO)?;
        let mut pcm = vec![vec![0f32; 256]];
        decoder.decode(&data, &mut pcm)?;

        let spectrum = scaled(channel.dequantized(10), &channel.sf);
        let expected = synthesize(&mut Imdct::new(8), &spectrum);
        assert!(expected.iter().any(|&x| x != 0.0));
        assert_close(&pcm[0], &expected);

        Ok(())
    }

    #[test]
    fn test_dual_mono_with_prediction() -> Result<()> {
        let left = TestChannel::new(&MONO_SF, 2);
        let right = TestChannel::new(&[7, 7, 9, 9, 11, 11, 13, 13, 16, 20], 3);
        let left_next = TestChannel::new(&MONO_SF, 4);
        let right_next = TestChannel { coarse: vec![0; 256], fine: vec![0; 256], ..right.clone() };

        let data = superframe(
            &[
                mono_block(&left, true, false),
                mono_block(&right, true, false),
                mono_block(&left_next, false, true),
                mono_block(&right_next, false, true),
            ],
            256,
        );

        let mut decoder = Decoder::default();
        decoder.initialize(&DUAL_MONO)?;
        let mut pcm = vec![vec![0f32; 512]; 2];
        decoder.decode(&data, &mut pcm)?;

        for (out, frames) in pcm.iter().zip([[&left, &left_next], [&right, &right_next]]) {
            let mut imdct = Imdct::new(8);
            let mut expected = Vec::new();
            for channel in frames {
                let spectrum = scaled(channel.dequantized(10), &channel.sf);
                expected.extend(synthesize(&mut imdct, &spectrum));
            }
            assert_close(out, &expected);
        }

        // the right channel's second frame carries only the overlap tail
        assert!(pcm[1][256..].iter().any(|&x| x != 0.0));

        Ok(())
    }

    #[test]
    fn test_stereo_superframe() -> Result<()> {
        let sf = [22, 18, 12, 9, 7, 7, 8, 10, 7, 7, 16, 8];
        let primary = TestChannel::new(&sf, 5);
        let secondary = TestChannel::new(&sf, 6);

        let mut bits = Vec::new();
        push_block_start(&mut bits, true, false);
        // band 4 (12 units), stereo band 3 (10 units), no band extension
        bits.extend([(4, 1), (4, 0), (1, 0)]);
        push_flat_gradient(&mut bits);
        // primary channel 0, signs for units 10 and 11
        bits.extend([(1, 0), (1, 1), (1, 1), (1, 0)]);
        bits.push((1, 0));
        push_clc_scale_factors(&mut bits, &primary);
        push_coefficients(&mut bits, &primary, 12);
        // second channel takes its scale factors from the first
        push_zero_distances(&mut bits, 1, 12);
        push_coefficients(&mut bits, &secondary, 10);

        let data = superframe(&[pack_bits(&bits)], 128);

        let mut decoder = Decoder::default();
        decoder.initialize(&STEREO)?;
        let mut pcm = vec![vec![0f32; 256]; 2];
        decoder.decode(&data, &mut pcm)?;

        let first = primary.dequantized(12);
        let mut second = secondary.dequantized(10);
        for bin in QUANT_UNIT_TO_COEFF_INDEX[10]..QUANT_UNIT_TO_COEFF_INDEX[11] {
            second[bin] = -first[bin];
        }
        for bin in QUANT_UNIT_TO_COEFF_INDEX[11]..QUANT_UNIT_TO_COEFF_INDEX[12] {
            second[bin] = first[bin];
        }

        let expected_first = synthesize(&mut Imdct::new(8), &scaled(first, &sf));
        let expected_second = synthesize(&mut Imdct::new(8), &scaled(second, &sf));
        assert_close(&pcm[0], &expected_first);
        assert_close(&pcm[1], &expected_second);

        Ok(())
    }

    #[test]
    fn test_overrun_is_reported_per_fail_level() -> Result<()> {
        let channel = TestChannel::new(&MONO_SF, 1);
        let mut data = mono_block(&channel, true, false);
        data.truncate(16);

        let mut decoder = Decoder::default();
        decoder.initialize(&MONO_SHORT)?;
        let mut pcm = vec![vec![0i16; 256]];
        decoder.decode(&data, &mut pcm)?;

        decoder.set_fail_level(log::Level::Warn);
        let err = decoder.decode(&data, &mut pcm).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::InvalidData);

        Ok(())
    }

    #[test]
    fn test_huffman_coded_units() -> Result<()> {
        // units 2 to 9 sit at precisions coded through the spectrum codebooks,
        // the peak at unit 8 switches it to the second family
        let sf = [9, 8, 3, 5, 6, 4, 2, 2, 6, 2];
        let sets = [0, 0, 0, 0, 0, 0, 0, 0, 1, 0];
        let channel = TestChannel::with_sets(&sf, &sets, 7);
        let data = superframe(&[mono_block(&channel, true, false)], 64);

        let mut decoder = Decoder::default();
        decoder.initialize(&MONO)?;
        let mut pcm = vec![vec![0f32; 256]];
        decoder.decode(&data, &mut pcm)?;

        let frame = decoder.state.frame.as_ref().expect("initialized");
        let decoded = &frame.blocks[0].channels[0];
        assert_eq!(&decoded.codebook_set[..10], &sets);
        assert_eq!(&decoded.quantized_spectra[..24], &channel.coarse[..24]);
        assert!(channel.coarse[4..24].iter().any(|&v| v != 0));

        let spectrum = scaled(channel.dequantized(10), &channel.sf);
        let expected = synthesize(&mut Imdct::new(8), &spectrum);
        assert_close(&pcm[0], &expected);

        Ok(())
    }

    #[test]
    fn test_precision_capped_before_fine_split() -> Result<()> {
        let mut bits = Vec::new();
        push_block_start(&mut bits, true, false);
        bits.extend([(4, 0), (1, 0)]);
        // zero gradient, unit 0 boosted by the boundary
        bits.extend([(2, 0), (6, 1), (6, 0), (5, 0), (5, 0), (4, 1)]);
        bits.push((1, 0));
        bits.extend([(2, 1), (2, 3)]);
        bits.extend([(5, 31); 10]);

        // 31 and 32 both split into 15 coarse and 15 fine bits
        let coarse: Vec<i32> = (0..24).map(|bin| bin * 1000 - 12000).collect();
        let fine: Vec<i32> = (0..24).map(|bin| bin * 100 - 500).collect();
        bits.extend(coarse.iter().map(|&v| signed(v, 16)));
        bits.extend(fine.iter().map(|&v| signed(v, 16)));

        let data = superframe(&[pack_bits(&bits)], 256);

        let mut decoder = Decoder::default();
        decoder.initialize(&MONO_LONG)?;
        let mut pcm = vec![vec![0f32; 256]];
        decoder.decode(&data, &mut pcm)?;

        let frame = decoder.state.frame.as_ref().expect("initialized");
        let decoded = &frame.blocks[0].channels[0];
        assert_eq!(&decoded.precisions[..10], &[15; 10]);
        assert_eq!(&decoded.precisions_fine[..10], &[15; 10]);

        let step = TABLES.quantizer_step_size[15];
        let step_fine = TABLES.quantizer_fine_step_size[15];
        let mut spectrum = [0.0; 256];
        for bin in 0..24 {
            spectrum[bin] = coarse[bin] as f64 * step + fine[bin] as f64 * step_fine;
        }
        let expected = synthesize(&mut Imdct::new(8), &scaled(spectrum, &[31; 10]));
        assert_close(&pcm[0], &expected);

        Ok(())
    }

    fn mirror(spectrum: &mut [f64; 256], bins: [usize; 4]) {
        for edge in bins.windows(2) {
            for i in 0..edge[1] - edge[0] {
                spectrum[edge[0] + i] = spectrum[edge[0] - i - 1];
            }
        }
    }

    fn gain_bins(spectrum: &mut [f64; 256], range: std::ops::Range<usize>, gain: f64) {
        for value in &mut spectrum[range] {
            *value *= gain;
        }
    }

    /// A mono block with band extension up to `extension_band`.
    fn extension_block(
        channel: &TestChannel,
        band: u32,
        extension_band: u32,
        extension: &[(u32, u32)],
        coded: usize,
    ) -> Vec<u8> {
        let mut bits = Vec::new();
        push_block_start(&mut bits, true, false);
        bits.extend([(4, band - 3), (1, 1), (4, extension_band - 3)]);
        push_flat_gradient(&mut bits);
        // unused flag of mono blocks, then extension data
        bits.extend([(1, 0), (1, 1)]);
        bits.extend_from_slice(extension);
        push_clc_scale_factors(&mut bits, channel);
        push_coefficients(&mut bits, channel, coded);

        pack_bits(&bits)
    }

    #[test]
    fn test_band_extension_across_superframes() -> Result<()> {
        // 16 coded units extended to 20, mode 2 with gains 40 and 20
        let first_sf = [22, 18, 12, 9, 7, 7, 8, 10, 7, 7, 9, 8, 8, 7, 7, 7, 9, 9, 8, 8];
        let first = TestChannel::new(&first_sf, 8);
        let first_data = superframe(
            &[extension_block(&first, 8, 10, &[(2, 2), (5, 12), (6, 40), (6, 20)], 16)],
            256,
        );

        // 13 coded units fall back to mode 4 and send no values
        let second = TestChannel::new(&[20, 16, 12, 10, 9, 8, 8, 8, 7, 7, 7, 7, 7, 8, 8, 8], 9);
        let second_data = superframe(&[extension_block(&second, 5, 8, &[(2, 0), (5, 0)], 13)], 256);

        let mut decoder = Decoder::default();
        decoder.initialize(&MONO_LONG)?;
        let mut pcm = vec![vec![0f32; 256]];
        let mut imdct = Imdct::new(8);

        decoder.decode(&first_data, &mut pcm)?;
        let mut spectrum = scaled(first.dequantized(16), &first.sf);
        mirror(&mut spectrum, [64, 112, 128, 128]);
        gain_bins(&mut spectrum, 64..112, BEX_MODE2_SCALE[40]);
        gain_bins(&mut spectrum, 112..128, BEX_MODE2_SCALE[20]);
        assert_close(&pcm[0], &synthesize(&mut imdct, &spectrum));

        decoder.decode(&second_data, &mut pcm)?;
        let frame = decoder.state.frame.as_ref().expect("initialized");
        let decoded = &frame.blocks[0].channels[0];
        assert_eq!(decoded.bex_mode, 4);
        assert_eq!(decoded.bex_values, [0; 4]);

        let multiplier = BEX_MODE4_MULTIPLIER[0];
        let mut spectrum = scaled(second.dequantized(13), &second.sf);
        mirror(&mut spectrum, [40, 64, 112, 128]);
        gain_bins(&mut spectrum, 40..64, 0.7079468 * multiplier);
        gain_bins(&mut spectrum, 64..112, 0.5011902 * multiplier);
        gain_bins(&mut spectrum, 112..128, 0.3548279 * multiplier);
        assert_close(&pcm[0], &synthesize(&mut imdct, &spectrum));

        Ok(())
    }

    #[test]
    fn test_pcm_sample_conversion() {
        assert_eq!(i16::from_decoded(1.5), 2);
        assert_eq!(i16::from_decoded(-1.5), -1);
        assert_eq!(i16::from_decoded(-1.6), -2);
        assert_eq!(i16::from_decoded(40000.0), i16::MAX);
        assert_eq!(i16::from_decoded(-40000.0), i16::MIN);
        assert_eq!(f32::from_decoded(32767.0), 1.0);
        assert_eq!(f32::from_decoded(0.0), 0.0);
    }
}
