//! Scale factor decoding.
//!
//! Each channel selects one of four coding modes with a 2-bit field. The
//! meaning of the mode depends on the channel's position in its block: the
//! first channel may predict from its own previous frame, the second may also
//! predict from the first channel of the same frame.

use anyhow::{Result, anyhow, bail};
use log::trace;

use crate::structs::block::BlockHeader;
use crate::structs::channel::{Channel, SCALE_FACTOR_SLOTS};
use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::ScaleFactorError;
use crate::utils::huffman::HuffmanCodebook;
use crate::utils::tables::{SCALE_FACTOR_WEIGHTS, TABLES};

pub const MAX_SCALE_FACTOR: i32 = 31;

type ScaleFactors = [i32; SCALE_FACTOR_SLOTS];

/// Reads the scale factors of `channel` and updates its prediction baseline.
///
/// `first_channel` holds the scale factors of the block's first channel when
/// `channel` is the second channel of a stereo block.
pub fn read(
    reader: &mut BsIoSliceReader,
    header: &BlockHeader,
    channel: &mut Channel,
    first_channel: Option<&ScaleFactors>,
) -> Result<()> {
    let units = header.extension_unit;
    channel.scale_factors.fill(0);

    let mode = reader.get_n(2)?;
    channel.scale_factor_coding_mode = mode;

    let baseline_unavailable = || ScaleFactorError::BaselineUnavailable {
        mode,
        channel: channel.channel_index,
    };

    let prev = channel.scale_factors_prev;
    let prev_len = header.quantization_units_prev;
    let sf = &mut channel.scale_factors;

    match (first_channel, mode) {
        (_, 0) => read_vlc_delta_offset(reader, sf, units)?,
        (None, 1) => read_clc_offset(reader, sf, units)?,
        (None, 2) | (Some(_), 3) => {
            if header.first_in_superframe {
                bail!(baseline_unavailable());
            }
            read_vlc_distance_to_baseline(reader, sf, units, &prev, prev_len)?
        }
        (None, 3) => {
            if header.first_in_superframe {
                bail!(baseline_unavailable());
            }
            read_vlc_delta_offset_with_baseline(reader, sf, units, &prev, prev_len)?
        }
        (Some(first), 1) => read_vlc_distance_to_baseline(reader, sf, units, first, units)?,
        (Some(first), 2) => {
            read_vlc_delta_offset_with_baseline(reader, sf, units, first, units)?
        }
        _ => unreachable!("2-bit mode"),
    }

    if let Some((unit, &value)) = sf[..units]
        .iter()
        .enumerate()
        .find(|&(_, &value)| !(0..=MAX_SCALE_FACTOR).contains(&value))
    {
        bail!(ScaleFactorError::OutOfRange { unit, value });
    }

    trace!(
        "Channel {} scale factors (mode {mode}): {:?}",
        channel.channel_index,
        &sf[..units]
    );

    channel.scale_factors_prev = channel.scale_factors;

    Ok(())
}

fn unsigned_codebook(bits: u32) -> Result<&'static HuffmanCodebook> {
    TABLES.scale_factor_unsigned[bits as usize]
        .as_ref()
        .ok_or_else(|| anyhow!(ScaleFactorError::MissingCodebook(bits)))
}

fn signed_codebook(bits: u32) -> Result<&'static HuffmanCodebook> {
    TABLES.scale_factor_signed[bits as usize]
        .as_ref()
        .ok_or_else(|| anyhow!(ScaleFactorError::MissingCodebook(bits)))
}

/// Fixed-length values on top of a common base.
fn read_clc_offset(reader: &mut BsIoSliceReader, sf: &mut ScaleFactors, units: usize) -> Result<()> {
    const MAX_BITS: u32 = 5;

    let bit_length = reader.get_n(2)? + 2;
    let base = if bit_length < MAX_BITS {
        reader.get_n(MAX_BITS)? as i32
    } else {
        0
    };

    for value in &mut sf[..units] {
        *value = reader.get_n(bit_length)? as i32 + base;
    }

    Ok(())
}

/// Huffman-coded deltas between neighbouring units, offset by a weight curve.
fn read_vlc_delta_offset(
    reader: &mut BsIoSliceReader,
    sf: &mut ScaleFactors,
    units: usize,
) -> Result<()> {
    let weights = &SCALE_FACTOR_WEIGHTS[reader.get_n(3)? as usize];
    let base = reader.get_n(5)? as i32;
    let bit_length = reader.get_n(2)? + 3;
    let codebook = unsigned_codebook(bit_length)?;

    read_deltas(reader, codebook, bit_length, &mut sf[..units])?;

    for (value, &weight) in sf[..units].iter_mut().zip(weights) {
        *value += base - weight;
    }

    Ok(())
}

/// Signed Huffman-coded distance from a baseline, raw values past its end.
fn read_vlc_distance_to_baseline(
    reader: &mut BsIoSliceReader,
    sf: &mut ScaleFactors,
    units: usize,
    baseline: &ScaleFactors,
    baseline_len: usize,
) -> Result<()> {
    let bit_length = reader.get_n(2)? + 2;
    let codebook = signed_codebook(bit_length)?;
    let predicted = units.min(baseline_len);

    for (value, &base) in sf[..predicted].iter_mut().zip(baseline) {
        let distance = codebook.read_signed(reader)?;
        *value = (base + distance) & MAX_SCALE_FACTOR;
    }

    for value in &mut sf[predicted..units] {
        *value = reader.get_n(5)? as i32;
    }

    Ok(())
}

/// Huffman-coded deltas added onto a baseline, raw values past its end.
fn read_vlc_delta_offset_with_baseline(
    reader: &mut BsIoSliceReader,
    sf: &mut ScaleFactors,
    units: usize,
    baseline: &ScaleFactors,
    baseline_len: usize,
) -> Result<()> {
    let base = reader.get_offset_binary(5, 0)?;
    let bit_length = reader.get_n(2)? + 1;
    let codebook = unsigned_codebook(bit_length)?;
    let predicted = units.min(baseline_len);

    read_deltas(reader, codebook, bit_length, &mut sf[..predicted])?;

    for (value, &prev) in sf[..predicted].iter_mut().zip(baseline) {
        *value += base + prev;
    }

    for value in &mut sf[predicted..units] {
        *value = reader.get_n(5)? as i32;
    }

    Ok(())
}

/// First value raw, then wrapping Huffman deltas.
fn read_deltas(
    reader: &mut BsIoSliceReader,
    codebook: &HuffmanCodebook,
    bit_length: u32,
    out: &mut [i32],
) -> Result<()> {
    let mask = codebook.value_max as i32 - 1;

    // the leading value is present even when no units follow
    let mut value = reader.get_n(bit_length)? as i32;
    let Some((first, rest)) = out.split_first_mut() else {
        return Ok(());
    };

    *first = value;
    for slot in rest {
        value = (value + codebook.read(reader)? as i32) & mask;
        *slot = value;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bitstream_io::pack_bits;
    use crate::utils::errors::{ErrorKind, error_kind};

    fn header(units: usize, first: bool) -> BlockHeader {
        BlockHeader {
            first_in_superframe: first,
            quantization_unit_count: units,
            extension_unit: units,
            quantization_units_prev: units,
            ..Default::default()
        }
    }

    fn read_bits(
        fields: &[(u32, u32)],
        header: &BlockHeader,
        channel: &mut Channel,
        first_channel: Option<&ScaleFactors>,
    ) -> Result<()> {
        let data = pack_bits(fields);
        let mut reader = BsIoSliceReader::from_slice(&data);
        read(&mut reader, header, channel, first_channel)
    }

    #[test]
    fn test_clc_offset() -> Result<()> {
        let mut channel = Channel::new(0, 8);
        let fields = [(2, 1), (2, 0), (5, 10), (2, 0), (2, 1), (2, 2), (2, 3)];
        read_bits(&fields, &header(4, true), &mut channel, None)?;

        assert_eq!(&channel.scale_factors[..5], &[10, 11, 12, 13, 0]);
        assert_eq!(channel.scale_factors_prev, channel.scale_factors);

        Ok(())
    }

    #[test]
    fn test_vlc_delta_offset() -> Result<()> {
        let mut channel = Channel::new(0, 8);
        // weights 0, base 10, 3-bit deltas: 5, +1, +7 (wraps to -1), +0
        let fields = [
            (2, 0),
            (3, 0),
            (5, 10),
            (2, 0),
            (3, 5),
            (2, 0b01),
            (2, 0b10),
            (2, 0b00),
        ];
        read_bits(&fields, &header(4, true), &mut channel, None)?;

        assert_eq!(&channel.scale_factors[..4], &[15, 16, 15, 14]);

        Ok(())
    }

    #[test]
    fn test_distance_to_previous_frame() -> Result<()> {
        let mut channel = Channel::new(0, 8);
        channel.scale_factors_prev[..4].copy_from_slice(&[5, 5, 5, 0]);

        let mut header = header(5, false);
        header.quantization_units_prev = 4;

        // distances 0, +1, -1, -1 then one raw value past the baseline
        let fields = [
            (2, 2),
            (2, 0),
            (1, 0),
            (2, 0b11),
            (2, 0b10),
            (2, 0b10),
            (5, 17),
        ];
        read_bits(&fields, &header, &mut channel, None)?;

        assert_eq!(&channel.scale_factors[..5], &[5, 6, 4, 31, 17]);

        Ok(())
    }

    #[test]
    fn test_second_channel_predicts_from_first() -> Result<()> {
        let mut first = [0; SCALE_FACTOR_SLOTS];
        first[..3].copy_from_slice(&[9, 8, 7]);

        let mut channel = Channel::new(1, 8);
        let fields = [(2, 1), (2, 0), (1, 0), (2, 0b11), (1, 0)];
        read_bits(&fields, &header(3, true), &mut channel, Some(&first))?;

        assert_eq!(&channel.scale_factors[..3], &[9, 9, 7]);

        Ok(())
    }

    #[test]
    fn test_prediction_needs_previous_frame() {
        let mut channel = Channel::new(0, 8);
        for mode in [2, 3] {
            let err = read_bits(&[(2, mode)], &header(4, true), &mut channel, None).unwrap_err();
            assert_eq!(error_kind(&err), ErrorKind::InvalidData);
        }

        let first = [0; SCALE_FACTOR_SLOTS];
        let mut channel = Channel::new(1, 8);
        let err = read_bits(&[(2, 3)], &header(4, true), &mut channel, Some(&first)).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::InvalidData);
    }

    #[test]
    fn test_out_of_range_scale_factor() {
        let mut channel = Channel::new(0, 8);
        // 4-bit values on a base of 31
        let fields = [(2, 1), (2, 2), (5, 31), (4, 0), (4, 15)];
        let err = read_bits(&fields, &header(2, true), &mut channel, None).unwrap_err();

        assert_eq!(error_kind(&err), ErrorKind::InvalidData);
        assert!(matches!(
            err.downcast_ref::<ScaleFactorError>(),
            Some(ScaleFactorError::OutOfRange { unit: 1, value: 46 })
        ));
    }

    #[test]
    fn test_delta_offset_on_previous_frame() -> Result<()> {
        let mut channel = Channel::new(0, 8);
        channel.scale_factors_prev[..3].copy_from_slice(&[10, 12, 20]);

        let mut header = header(5, false);
        header.quantization_units_prev = 3;

        // base 14 - 16 = -2, 3-bit deltas: 1, +7 (wraps to 0), +1,
        // then two raw values past the baseline
        let fields = [
            (2, 3),
            (5, 14),
            (2, 2),
            (3, 1),
            (2, 0b10),
            (2, 0b01),
            (5, 4),
            (5, 30),
        ];
        read_bits(&fields, &header, &mut channel, None)?;

        assert_eq!(&channel.scale_factors[..5], &[9, 10, 19, 4, 30]);

        Ok(())
    }

    #[test]
    fn test_second_channel_delta_offset_on_first() -> Result<()> {
        let mut first = [0; SCALE_FACTOR_SLOTS];
        first[..3].copy_from_slice(&[9, 8, 7]);

        // base 0, 1-bit deltas: 1, +1 (wraps to 0), +0
        let mut channel = Channel::new(1, 8);
        let fields = [(2, 2), (5, 16), (2, 0), (1, 1), (1, 1), (1, 0)];
        read_bits(&fields, &header(3, true), &mut channel, Some(&first))?;

        assert_eq!(&channel.scale_factors[..3], &[10, 8, 7]);

        Ok(())
    }
}
