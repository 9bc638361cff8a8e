//! Bit allocation.
//!
//! The number of bits spent on each quantization unit is not transmitted
//! directly. It is derived from the scale factors, a transmitted gradient
//! curve and a masking estimate between neighbouring units.

use crate::structs::block::BlockHeader;
use crate::structs::channel::Channel;
use crate::utils::tables::TABLES;

/// Precision above which the remainder goes to the fine quantizer.
pub const MAX_COARSE_PRECISION: i32 = 15;

/// Highest total precision, split evenly between coarse and fine.
pub const MAX_PRECISION: i32 = 2 * MAX_COARSE_PRECISION;

/// Fills `header.gradient` from the gradient parameters.
pub fn create_gradient(header: &mut BlockHeader) {
    let start_unit = header.gradient_start_unit;
    let end_unit = header.gradient_end_unit;
    let start_value = header.gradient_start_value;
    let value_count = header.gradient_end_value - start_value;
    let unit_count = end_unit as isize - start_unit as isize;

    let gradient = &mut header.gradient;
    gradient[..end_unit].fill(start_value);
    if end_unit <= header.quantization_unit_count {
        gradient[end_unit..=header.quantization_unit_count].fill(header.gradient_end_value);
    }

    if unit_count <= 0 || value_count == 0 {
        return;
    }

    let curve = &TABLES.gradient_curves[unit_count as usize - 1];
    let ramp = gradient[start_unit..end_unit].iter_mut().zip(curve);

    if value_count < 0 {
        let scale = (-value_count - 1) as f64 / 31.0;
        for (value, &step) in ramp {
            *value = start_value - 1 - (step as f64 * scale).floor() as i32;
        }
    } else {
        let scale = (value_count - 1) as f64 / 31.0;
        for (value, &step) in ramp {
            *value = start_value + 1 + (step as f64 * scale).floor() as i32;
        }
    }
}

/// Raises the precision of units next to a steep scale factor change.
pub fn calculate_mask(channel: &mut Channel, units: usize) {
    let mask = &mut channel.precision_mask;
    let sf = &channel.scale_factors;

    mask.fill(0);
    for i in 1..units {
        let delta = sf[i] - sf[i - 1];
        if delta > 1 {
            mask[i] += (delta - 1).min(5);
        } else if delta < -1 {
            mask[i - 1] += (-delta - 1).min(5);
        }
    }
}

pub fn calculate_precisions(channel: &mut Channel, header: &BlockHeader) {
    let units = header.quantization_unit_count;
    let gradient = &header.gradient;

    for i in 0..units {
        let sf = channel.scale_factors[i];
        channel.precisions[i] = if header.gradient_mode == 0 {
            sf - gradient[i]
        } else {
            let precision = sf + channel.precision_mask[i] - gradient[i];
            match header.gradient_mode {
                _ if precision <= 0 => precision,
                1 => precision / 2,
                2 => 3 * precision / 8,
                _ => precision / 4,
            }
        };
    }

    for precision in &mut channel.precisions[..units] {
        *precision = (*precision).max(1);
    }

    for precision in &mut channel.precisions[..header.gradient_boundary] {
        *precision += 1;
    }

    for (precision, fine) in channel.precisions[..units]
        .iter_mut()
        .zip(&mut channel.precisions_fine)
    {
        *fine = 0;
        *precision = (*precision).min(MAX_PRECISION);
        if *precision > MAX_COARSE_PRECISION {
            *fine = *precision - MAX_COARSE_PRECISION;
            *precision = MAX_COARSE_PRECISION;
        }
    }
}
