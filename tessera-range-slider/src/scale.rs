//! Value scales mapping a track fraction onto domain values.
//!
//! The default [`Scale::Linear`] spreads `[min, max]` evenly along the track
//! and quantizes to `step`. [`Scale::Discrete`] distributes an arbitrary
//! sorted list of values at evenly spaced knots and interpolates between
//! them, which gives non-linear scales (price brackets, log-ish ranges)
//! without touching thumb constraints or drag handling.

use crate::error::SliderError;

/// Tolerance for treating a knot fraction as landing exactly on a knot.
const KNOT_EPSILON: f64 = 1e-9;

/// Largest number of decimals kept when tidying quantized values.
const MAX_DECIMALS: i32 = 12;

/// How positions along the track translate into domain values.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Scale {
    /// Evenly spaced values from `min` to `max`, quantized to `step`.
    #[default]
    Linear,
    /// Sorted, deduplicated values placed at evenly spaced knots.
    Discrete(Vec<f64>),
}

impl Scale {
    /// Builds a discrete scale, sorting and deduplicating `values`.
    ///
    /// At least two distinct finite values are required.
    pub fn discrete(values: impl IntoIterator<Item = f64>) -> Result<Self, SliderError> {
        let mut values: Vec<f64> = values.into_iter().collect();
        if values.iter().any(|v| !v.is_finite()) {
            return Err(SliderError::NonFinite("scale value"));
        }
        values.sort_by(f64::total_cmp);
        values.dedup();
        if values.len() < 2 {
            return Err(SliderError::InvalidScale(format!(
                "need at least two distinct values, got {}",
                values.len()
            )));
        }
        Ok(Scale::Discrete(values))
    }

    /// Number of snap intervals between the first and the last position.
    ///
    /// Zero means the slider is a single point.
    pub fn step_count(&self, min: f64, max: f64, step: f64) -> u64 {
        match self {
            Scale::Linear => {
                let range = max - min;
                if range <= 0.0 || step <= 0.0 || !range.is_finite() || !step.is_finite() {
                    return 0;
                }
                (range / step).round() as u64
            }
            Scale::Discrete(values) => values.len().saturating_sub(1) as u64,
        }
    }

    /// Domain value at `fraction` (0 = track start, 1 = end of travel).
    pub(crate) fn value_at(&self, fraction: f64, min: f64, max: f64, step: f64) -> f64 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Scale::Linear => {
                if fraction >= 1.0 {
                    return max;
                }
                quantize_linear(min + fraction * (max - min), min, max, step)
            }
            Scale::Discrete(values) => interpolate(values, fraction),
        }
    }

    /// Track fraction at which `value` sits; the inverse of `value_at`.
    pub(crate) fn fraction_of(&self, value: f64, min: f64, max: f64) -> f64 {
        match self {
            Scale::Linear => {
                let range = max - min;
                if range <= 0.0 {
                    return 0.0;
                }
                ((value.clamp(min, max) - min) / range).clamp(0.0, 1.0)
            }
            Scale::Discrete(values) => locate(values, value),
        }
    }

    /// Snaps a programmatic value onto the scale.
    ///
    /// Linear scales quantize to the `step` grid measured from `min`;
    /// discrete scales pick the nearest entry.
    pub fn snap(&self, value: f64, min: f64, max: f64, step: f64) -> f64 {
        match self {
            Scale::Linear => quantize_linear(value, min, max, step),
            Scale::Discrete(values) => nearest(values, value),
        }
    }

    /// Domain bounds implied by the scale, if it defines its own.
    pub(crate) fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            Scale::Linear => None,
            Scale::Discrete(values) => Some((*values.first()?, *values.last()?)),
        }
    }
}

/// Rounds `value` to the `step` grid anchored at `min` and clamps it into the
/// domain. The result is tidied to the precision of `step` and `min` so that
/// `0.1 * 3` reads back as `0.3`.
pub(crate) fn quantize_linear(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if max <= min {
        return min;
    }
    let clamped = value.clamp(min, max);
    if step <= 0.0 || !step.is_finite() {
        return clamped;
    }
    let index = ((clamped - min) / step).round();
    if !index.is_finite() {
        return clamped;
    }
    let snapped = (min + index * step).clamp(min, max);
    tidy(snapped, decimals(step).max(decimals(min)))
}

fn decimals(value: f64) -> i32 {
    let mut scaled = value.abs();
    for d in 0..MAX_DECIMALS {
        if (scaled - scaled.round()).abs() < 1e-9 * scaled.max(1.0) {
            return d;
        }
        scaled *= 10.0;
    }
    MAX_DECIMALS
}

fn tidy(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn interpolate(values: &[f64], fraction: f64) -> f64 {
    let Some(last) = values.len().checked_sub(1) else {
        return 0.0;
    };
    if last == 0 {
        return values[0];
    }
    let mut position = fraction * last as f64;
    if (position - position.round()).abs() < KNOT_EPSILON {
        position = position.round();
    }
    let index = (position.floor() as usize).min(last);
    if index == last {
        return values[last];
    }
    let t = position - index as f64;
    values[index] + (values[index + 1] - values[index]) * t
}

fn locate(values: &[f64], value: f64) -> f64 {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return 0.0;
    };
    let knots = (values.len() - 1) as f64;
    if knots == 0.0 || value <= first {
        return 0.0;
    }
    if value >= last {
        return 1.0;
    }
    // First index whose value exceeds `value`; the segment starts one before.
    let upper = values.partition_point(|v| *v <= value);
    let lower = upper - 1;
    let span = values[upper] - values[lower];
    let t = if span > 0.0 {
        (value - values[lower]) / span
    } else {
        0.0
    };
    (lower as f64 + t) / knots
}

fn nearest(values: &[f64], value: f64) -> f64 {
    values
        .iter()
        .copied()
        .min_by(|a, b| (a - value).abs().total_cmp(&(b - value).abs()))
        .unwrap_or(value)
}
