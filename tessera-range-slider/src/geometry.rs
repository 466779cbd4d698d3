//! Track geometry and the position/value transform.
//!
//! A thumb's position is the offset of its left edge from the start of the
//! track. It can travel `track_width - thumb_width` pixels, and that travel is
//! divided into `step_count` equal intervals of `position_step` pixels. Every
//! position the slider reports sits on that grid.
//!
//! Rounding is half away from zero ([`f64::round`]) throughout, so the two
//! ends of the travel always map back to `min` and `max` exactly.
//!
//! When travel, domain range or step count is zero the geometry is
//! degenerate: every position collapses to `0` and every value to `min`.

use crate::{config::SliderConfig, error::SliderError, px::Px, px::PX_EPSILON};

/// Layout measurements queried from the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackMeasurements {
    /// Width of the track element.
    pub track_width: Px,
    /// Width of a thumb element.
    pub thumb_width: Px,
}

impl TrackMeasurements {
    /// Creates measurements from raw pixel widths.
    pub fn new(track_width: f64, thumb_width: f64) -> Self {
        Self {
            track_width: Px(track_width),
            thumb_width: Px(thumb_width),
        }
    }

    /// Rejects negative or non-finite widths.
    pub fn validate(self) -> Result<Self, SliderError> {
        for (what, px) in [("track width", self.track_width), ("thumb width", self.thumb_width)] {
            if !px.is_finite() || px < Px::ZERO {
                return Err(SliderError::InvalidMeasurement {
                    what,
                    value: px.raw(),
                });
            }
        }
        Ok(self)
    }
}

/// Geometry derived from the measurements and the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Width of the track.
    pub track_width: Px,
    /// Width of a thumb; also the minimum gap between the two thumbs' left edges.
    pub thumb_width: Px,
    /// Distance a thumb's left edge can move, never negative.
    pub travel: Px,
    /// `max - min`.
    pub domain_range: f64,
    /// Number of snap intervals along the travel.
    pub step_count: u64,
    /// Pixel width of one snap interval; zero when degenerate.
    pub position_step: Px,
}

impl TrackGeometry {
    /// Derives the geometry for `measurements` under `config`.
    pub fn new(measurements: TrackMeasurements, config: &SliderConfig) -> Self {
        let travel = (measurements.track_width - measurements.thumb_width).max(Px::ZERO);
        let domain_range = config.domain_range().max(0.0);
        let step_count = config.step_count();
        let position_step = if travel > Px::ZERO && domain_range > 0.0 && step_count > 0 {
            travel / step_count as f64
        } else {
            Px::ZERO
        };
        Self {
            track_width: measurements.track_width,
            thumb_width: measurements.thumb_width,
            travel,
            domain_range,
            step_count,
            position_step,
        }
    }

    /// Returns `true` when the slider collapses to a single point.
    pub fn is_degenerate(&self) -> bool {
        self.position_step <= Px::ZERO
    }

    /// Index of the grid point nearest to `position`.
    pub(crate) fn grid_index(&self, position: Px) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (position / self.position_step).round()
    }

    /// Grid position at `index`, never beyond the travel.
    pub(crate) fn grid_position(&self, index: f64) -> Px {
        if index >= self.step_count as f64 {
            return self.travel;
        }
        (self.position_step * index).clamp(Px::ZERO, self.travel)
    }
}

/// Smallest meaningful pixel increment: `travel / round(domain_range / step)`.
pub fn position_step_px(geometry: &TrackGeometry) -> Px {
    geometry.position_step
}

/// Snaps `position` to the nearest grid point inside `[0, travel]`.
pub fn snap_to_grid(position: Px, geometry: &TrackGeometry) -> Px {
    if geometry.is_degenerate() {
        return Px::ZERO;
    }
    let index = geometry.grid_index(position.clamp(Px::ZERO, geometry.travel));
    geometry.grid_position(index)
}

/// Snaps `position` to a grid point inside `[lo, hi]`.
///
/// Prefers the nearest grid point, moving inward when the nearest one falls
/// outside the bounds. When no grid point fits, the position is only
/// clamped.
pub(crate) fn snap_within(position: Px, lo: Px, hi: Px, geometry: &TrackGeometry) -> Px {
    if geometry.is_degenerate() {
        return Px::ZERO;
    }
    let bounded = position.clamp(lo, hi);
    let step = geometry.position_step;
    let lo_index = (lo / step - PX_EPSILON).ceil();
    let hi_index = (hi / step + PX_EPSILON).floor();
    if lo_index > hi_index {
        return bounded;
    }
    let index = geometry.grid_index(bounded).clamp(lo_index, hi_index);
    geometry.grid_position(index)
}

/// Converts a track position into a domain value.
///
/// Positions on the grid map to values on the step grid; the two ends of
/// the travel map to `min` and `max` exactly.
pub fn pixel_to_value(position: Px, geometry: &TrackGeometry, config: &SliderConfig) -> f64 {
    if geometry.is_degenerate() {
        return config.min;
    }
    let fraction = (position.clamp(Px::ZERO, geometry.travel) / geometry.travel).clamp(0.0, 1.0);
    config
        .scale
        .value_at(fraction, config.min, config.max, config.step)
}

/// Converts a domain value into a track position on the grid.
///
/// Out-of-range values are clamped into `[min, max]` first.
pub fn value_to_pixel(value: f64, geometry: &TrackGeometry, config: &SliderConfig) -> Px {
    if geometry.is_degenerate() || !value.is_finite() {
        return Px::ZERO;
    }
    let fraction = config.scale.fraction_of(value, config.min, config.max);
    snap_to_grid(geometry.travel * fraction, geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scale;

    fn config(min: f64, max: f64, step: f64) -> SliderConfig {
        SliderConfig::default()
            .min(min)
            .max(max)
            .step(step)
            .initial_min(min)
            .initial_max(max)
    }

    /// Track 200px with a 20px thumb: 180px of travel.
    fn geometry(config: &SliderConfig) -> TrackGeometry {
        TrackGeometry::new(TrackMeasurements::new(200.0, 20.0), config)
    }

    #[test]
    fn derives_travel_and_position_step() {
        let config = config(0.0, 100.0, 10.0);
        let geometry = geometry(&config);
        assert_eq!(geometry.travel, Px(180.0));
        assert_eq!(geometry.step_count, 10);
        assert_eq!(position_step_px(&geometry), Px(18.0));
        assert!(!geometry.is_degenerate());
    }

    #[test]
    fn quantizes_raw_position_to_nearest_step() {
        let config = config(0.0, 100.0, 10.0);
        let geometry = geometry(&config);
        let snapped = snap_to_grid(Px(65.0), &geometry);
        assert_eq!(snapped, Px(72.0));
        assert_eq!(pixel_to_value(snapped, &geometry, &config), 40.0);
    }

    #[test]
    fn boundaries_map_exactly() {
        let config = config(-50.0, 50.0, 3.0);
        let geometry = geometry(&config);
        assert_eq!(pixel_to_value(Px::ZERO, &geometry, &config), -50.0);
        assert_eq!(pixel_to_value(geometry.travel, &geometry, &config), 50.0);
        assert_eq!(value_to_pixel(-50.0, &geometry, &config), Px::ZERO);
        assert_eq!(value_to_pixel(50.0, &geometry, &config), geometry.travel);
    }

    #[test]
    fn value_to_pixel_clamps_out_of_range_values() {
        let config = config(0.0, 100.0, 10.0);
        let geometry = geometry(&config);
        assert_eq!(value_to_pixel(-30.0, &geometry, &config), Px::ZERO);
        assert_eq!(value_to_pixel(250.0, &geometry, &config), Px(180.0));
        assert_eq!(value_to_pixel(f64::NAN, &geometry, &config), Px::ZERO);
    }

    #[test]
    fn round_trips_every_aligned_value() {
        let cases = [
            (0.0, 100.0, 10.0, 200.0, 20.0),
            (0.0, 100.0, 1.0, 200.0, 20.0),
            (0.0, 1000.0, 1.0, 120.0, 20.0),
            (10.0, 20.0, 0.5, 333.0, 17.0),
            (-5.0, 5.0, 0.1, 640.0, 40.0),
        ];
        for (min, max, step, track, thumb) in cases {
            let config = config(min, max, step);
            let geometry = TrackGeometry::new(TrackMeasurements::new(track, thumb), &config);
            for index in 0..=geometry.step_count {
                let value = config.snap(min + index as f64 * step);
                let back = pixel_to_value(value_to_pixel(value, &geometry, &config), &geometry, &config);
                assert_eq!(back, value, "min={min} max={max} step={step} value={value}");
            }
        }
    }

    #[test]
    fn partial_last_step_round_trips_within_one_step() {
        let config = config(0.0, 100.0, 30.0);
        let geometry = geometry(&config);
        for value in [0.0, 30.0, 60.0, 90.0, 100.0] {
            let back = pixel_to_value(value_to_pixel(value, &geometry, &config), &geometry, &config);
            assert!((back - value).abs() <= config.step, "{value} -> {back}");
        }
    }

    #[test]
    fn degenerate_domain_collapses_to_min() {
        let config = config(7.0, 7.0, 1.0);
        let geometry = geometry(&config);
        assert!(geometry.is_degenerate());
        assert_eq!(position_step_px(&geometry), Px::ZERO);
        for input in [-10.0, 0.0, 55.0, 180.0, 999.0] {
            assert_eq!(pixel_to_value(Px(input), &geometry, &config), 7.0);
            assert_eq!(value_to_pixel(input, &geometry, &config), Px::ZERO);
            assert_eq!(snap_to_grid(Px(input), &geometry), Px::ZERO);
        }
    }

    #[test]
    fn zero_travel_is_degenerate() {
        let config = config(0.0, 100.0, 1.0);
        let geometry = TrackGeometry::new(TrackMeasurements::new(20.0, 20.0), &config);
        assert!(geometry.is_degenerate());
        assert_eq!(geometry.travel, Px::ZERO);
        let narrow = TrackGeometry::new(TrackMeasurements::new(10.0, 20.0), &config);
        assert_eq!(narrow.travel, Px::ZERO);
        assert_eq!(pixel_to_value(Px(5.0), &narrow, &config), 0.0);
    }

    #[test]
    fn snap_within_moves_inward_when_nearest_is_outside() {
        let config = config(0.0, 100.0, 10.0);
        let geometry = geometry(&config);
        // Nearest grid point to 100 is 108, which is fine for a lower bound.
        assert_eq!(snap_within(Px(100.0), Px(100.0), Px(180.0), &geometry), Px(108.0));
        // Nearest grid point to 60 is 54, below the lower bound of 60.
        assert_eq!(snap_within(Px(60.0), Px(60.0), Px(180.0), &geometry), Px(72.0));
        // Nearest grid point to 62 is 54, already inside.
        assert_eq!(snap_within(Px(62.0), Px::ZERO, Px(62.0), &geometry), Px(54.0));
        // Nearest grid point to 70 is 72, above the upper bound of 70.
        assert_eq!(snap_within(Px(70.0), Px::ZERO, Px(70.0), &geometry), Px(54.0));
    }

    #[test]
    fn snap_within_without_grid_point_only_clamps() {
        let config = config(0.0, 100.0, 10.0);
        let geometry = geometry(&config);
        assert_eq!(snap_within(Px(40.0), Px(55.0), Px(60.0), &geometry), Px(55.0));
    }

    #[test]
    fn measurements_reject_negative_and_non_finite() {
        assert!(TrackMeasurements::new(200.0, 20.0).validate().is_ok());
        assert_eq!(
            TrackMeasurements::new(-1.0, 20.0).validate(),
            Err(SliderError::InvalidMeasurement {
                what: "track width",
                value: -1.0
            })
        );
        assert!(TrackMeasurements::new(200.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn discrete_scale_uses_knots_as_grid() {
        let config = SliderConfig::default()
            .values([0.0, 10.0, 100.0, 1000.0])
            .unwrap()
            .initial_min(0.0)
            .initial_max(1000.0);
        assert!(matches!(config.scale, Scale::Discrete(_)));
        let geometry = TrackGeometry::new(TrackMeasurements::new(320.0, 20.0), &config);
        assert_eq!(geometry.position_step, Px(100.0));
        assert_eq!(pixel_to_value(Px(100.0), &geometry, &config), 10.0);
        assert_eq!(pixel_to_value(Px(200.0), &geometry, &config), 100.0);
        assert_eq!(value_to_pixel(100.0, &geometry, &config), Px(200.0));
        assert_eq!(value_to_pixel(40.0, &geometry, &config), Px(100.0));
        assert_eq!(pixel_to_value(snap_to_grid(Px(260.0), &geometry), &geometry, &config), 1000.0);
    }
}
