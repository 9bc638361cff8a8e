//! Band extension.
//!
//! Above the coded bands, the spectrum is rebuilt by mirroring lower bins
//! into three groups (A, B and C) and shaping them with transmitted gains or
//! generated noise.

use anyhow::{Result, anyhow};

use crate::structs::block::Block;
use crate::structs::channel::Channel;
use crate::utils::errors::BlockError;
use crate::utils::rng::Atrac9Rng;
use crate::utils::tables::{
    BEX_GROUP_INFO, BEX_MODE0_BANDS3, BEX_MODE0_BANDS4, BEX_MODE0_BANDS5, BEX_MODE2_SCALE,
    BEX_MODE3_INITIAL, BEX_MODE3_RATE, BEX_MODE4_MULTIPLIER, QUANT_UNIT_TO_COEFF_COUNT,
    QUANT_UNIT_TO_COEFF_INDEX, TABLES,
};

/// Units the extension always reaches, regardless of group C.
const MIN_TOTAL_UNITS: usize = 22;

/// Returns `[group B unit, group C unit, band class]` for a coded unit count.
pub fn bex_group_info(quant_units: usize) -> Result<[usize; 3]> {
    quant_units
        .checked_sub(13)
        .and_then(|index| BEX_GROUP_INFO.get(index))
        .copied()
        .ok_or_else(|| anyhow!(BlockError::UnsupportedExtensionUnits(quant_units)))
}

pub fn apply_band_extension(block: &mut Block) -> Result<()> {
    if !block.header.band_extension_enabled || !block.header.has_extension_data {
        return Ok(());
    }

    let group_a_unit = block.header.quantization_unit_count;
    let groups = bex_group_info(group_a_unit)?;

    for channel in &mut block.channels {
        apply_channel(channel, group_a_unit, groups)?;
    }

    Ok(())
}

/// Looks up the gain for a transmitted value.
fn gain(table: &[f64], mode: usize, value: u32) -> Result<f64> {
    let value = value as usize;
    table
        .get(value)
        .copied()
        .ok_or_else(|| anyhow!(BlockError::ExtensionValueOutOfRange { mode, value }))
}

fn apply_channel(channel: &mut Channel, group_a_unit: usize, groups: [usize; 3]) -> Result<()> {
    let [group_b_unit, group_c_unit, band_class] = groups;
    let total_units = group_c_unit.max(MIN_TOTAL_UNITS);

    let group_a_bin = QUANT_UNIT_TO_COEFF_INDEX[group_a_unit];
    let group_b_bin = QUANT_UNIT_TO_COEFF_INDEX[group_b_unit];
    let group_c_bin = QUANT_UNIT_TO_COEFF_INDEX[group_c_unit];
    let total_bins = QUANT_UNIT_TO_COEFF_INDEX[total_units];

    fill_high_frequencies(
        &mut channel.spectra,
        [group_a_bin, group_b_bin, group_c_bin, total_bins],
    );

    let mode = channel.bex_mode;
    let values = channel.bex_values;
    let spectrum_scale = &TABLES.spectrum_scale;

    match mode {
        0 => {
            let scales = &mut channel.bex_scales;
            match band_class {
                3 | 4 => {
                    let gains = if band_class == 3 {
                        &BEX_MODE0_BANDS3
                    } else {
                        &BEX_MODE0_BANDS4
                    };
                    scales[0] = gain(gains[0], mode, values[0])?;
                    scales[1] = gain(gains[1], mode, values[0])?;
                    scales[2] = gain(gains[2], mode, values[1])?;
                    scales[3] = gain(gains[3], mode, values[2])?;
                    scales[4] = gain(gains[4], mode, values[3])?;
                }
                5 => {
                    scales[0] = gain(BEX_MODE0_BANDS5[0], mode, values[0])?;
                    scales[1] = gain(BEX_MODE0_BANDS5[1], mode, values[1])?;
                    scales[2] = gain(BEX_MODE0_BANDS5[2], mode, values[1])?;
                }
                _ => {}
            }

            let bex_units = total_units - group_a_unit;
            scales[bex_units - 1] = spectrum_scale[channel.scale_factors[group_a_unit] as usize];

            add_noise(
                channel,
                QUANT_UNIT_TO_COEFF_INDEX[total_units - 1],
                QUANT_UNIT_TO_COEFF_COUNT[total_units - 1],
            );
            scale_units(channel, group_a_unit, total_units);
        }
        1 => {
            for unit in group_a_unit..total_units {
                channel.bex_scales[unit - group_a_unit] =
                    spectrum_scale[channel.scale_factors[unit] as usize];
            }

            add_noise(channel, group_a_bin, total_bins - group_a_bin);
            scale_units(channel, group_a_unit, total_units);
        }
        2 => {
            let low = gain(&BEX_MODE2_SCALE, mode, values[0])?;
            let high = gain(&BEX_MODE2_SCALE, mode, values[1])?;
            let spectra = &mut channel.spectra;
            scale_bins(&mut spectra[group_a_bin..group_b_bin], low);
            scale_bins(&mut spectra[group_b_bin..group_c_bin], high);
        }
        3 => {
            let rate = 2f64.powf(gain(&BEX_MODE3_RATE, mode, values[1])?);
            let mut scale = gain(&BEX_MODE3_INITIAL, mode, values[0])?;
            for value in &mut channel.spectra[group_a_bin..total_bins] {
                scale *= rate;
                *value *= scale;
            }
        }
        4 => {
            let multiplier = gain(&BEX_MODE4_MULTIPLIER, mode, values[0])?;
            let spectra = &mut channel.spectra;
            scale_bins(&mut spectra[group_a_bin..group_b_bin], 0.7079468 * multiplier);
            scale_bins(&mut spectra[group_b_bin..group_c_bin], 0.5011902 * multiplier);
            scale_bins(&mut spectra[group_c_bin..total_bins], 0.3548279 * multiplier);
        }
        _ => {}
    }

    Ok(())
}

/// Mirrors the bins below each group boundary into the group above it.
fn fill_high_frequencies(spectra: &mut [f64], bins: [usize; 4]) {
    for edge in bins.windows(2) {
        let (start, end) = (edge[0], edge[1]);
        for i in 0..end - start {
            spectra[start + i] = spectra[start - i - 1];
        }
    }
}

fn add_noise(channel: &mut Channel, index: usize, count: usize) {
    let sf = &channel.scale_factors;
    let rng = channel.rng.get_or_insert_with(|| {
        let seed = 543 * (sf[8] + sf[12] + sf[15] + 1);
        Atrac9Rng::new(seed as u16)
    });

    for value in &mut channel.spectra[index..index + count] {
        *value = rng.next_noise();
    }
}

fn scale_units(channel: &mut Channel, start_unit: usize, total_units: usize) {
    for unit in start_unit..total_units {
        let range = QUANT_UNIT_TO_COEFF_INDEX[unit]..QUANT_UNIT_TO_COEFF_INDEX[unit + 1];
        scale_bins(&mut channel.spectra[range], channel.bex_scales[unit - start_unit]);
    }
}

#[inline(always)]
fn scale_bins(bins: &mut [f64], scale: f64) {
    for value in bins {
        *value *= scale;
    }
}
