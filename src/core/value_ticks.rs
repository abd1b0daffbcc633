use serde::{Deserialize, Serialize};
use tracing::warn;

/// Grid lines closer than this make the axis too busy.
pub const MIN_GRID_SPACING_PX: f64 = 23.0;
/// Grid lines further apart than this leave the axis too sparse.
pub const MAX_GRID_SPACING_PX: f64 = 60.0;

const CANDIDATE_STEPS: [i64; 3] = [1, 2, 5];
const MAX_GRID_SCALE: i32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub value: f64,
    pub label: String,
    pub major: bool,
}

/// Ticks for a value axis spanning `min..max` drawn over `pixel_height`.
///
/// Steps are 1, 2 or 5 times a power of ten, chosen so grid lines fall
/// between 23 and 60 px apart. Ticks lie strictly inside the range; every
/// tenth base unit is major.
#[must_use]
pub fn compute_value_ticks(min: f64, max: f64, pixel_height: f64) -> Vec<ValueTick> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Vec::new();
    }
    if !pixel_height.is_finite() || pixel_height <= 0.0 {
        return Vec::new();
    }

    // Normalize the range to about three integer digits before fitting steps.
    let range = max - min;
    let range_scale = range.log10().round() as i32;
    let normalizing_scale = 3 - range_scale;
    let normalized_range = (range * 10f64.powi(normalizing_scale)).round();

    let min_lines = pixel_height / MAX_GRID_SPACING_PX;
    let max_lines = pixel_height / MIN_GRID_SPACING_PX;
    let Some((step, grid_scale)) = fit_grid_lines(min_lines, max_lines, normalized_range) else {
        warn!(min, max, pixel_height, "no usable value-axis step; suppressing ticks");
        return Vec::new();
    };

    let unit_exponent = grid_scale - normalizing_scale;
    let unit = 10f64.powi(unit_exponent);
    let first = (min / (10.0 * unit)).floor() as i64 * 10;

    let mut ticks = Vec::new();
    let mut index = first;
    loop {
        let value = index as f64 * unit;
        if value >= max {
            break;
        }
        if value > min {
            ticks.push(ValueTick {
                value,
                label: value_label(index, unit_exponent),
                major: index % 10 == 0,
            });
        }
        index += step;
    }
    ticks
}

/// First `(step, scale)` whose `step × 10^scale` splits `range` into an
/// acceptable number of grid lines; `None` once steps grow too coarse.
fn fit_grid_lines(min_lines: f64, max_lines: f64, range: f64) -> Option<(i64, i32)> {
    for scale in 0..=MAX_GRID_SCALE {
        let magnitude = 10f64.powi(scale);
        for step in CANDIDATE_STEPS {
            let fit = range / (step as f64 * magnitude);
            if fit > min_lines && fit < max_lines {
                return Some((step, scale));
            }
            if fit < min_lines {
                return None;
            }
        }
    }
    Some((1, 0))
}

fn value_label(index: i64, unit_exponent: i32) -> String {
    if unit_exponent.abs() > 3 {
        format!("{:.1}e{}", index as f64 / 10.0, unit_exponent + 1)
    } else {
        let decimals = usize::try_from(-unit_exponent).unwrap_or(0);
        format!("{:.*}", decimals, index as f64 * 10f64.powi(unit_exponent))
    }
}
