//! Keeps thumb candidates on the track and off each other.
//!
//! Clamping happens in pixel space rather than value space: the pixel grid
//! can be coarser than the value grid, and the thumbs must not overlap
//! visually even when their values coincide.

use crate::{
    geometry::{TrackGeometry, snap_within},
    px::Px,
    thumb::Thumb,
};

/// Legal `[lo, hi]` interval for `thumb` given its sibling's position.
///
/// The high thumb must stay at least one thumb width right of the low thumb
/// and vice versa. The interval is always inside `[0, travel]`; when the
/// sibling leaves no room the interval collapses onto the track edge.
pub fn legal_interval(thumb: Thumb, other_position: Px, geometry: &TrackGeometry) -> (Px, Px) {
    let travel = geometry.travel;
    match thumb {
        Thumb::High => {
            let lo = (other_position + geometry.thumb_width).clamp(Px::ZERO, travel);
            (lo, travel)
        }
        Thumb::Low => {
            let hi = (other_position - geometry.thumb_width).clamp(Px::ZERO, travel);
            (Px::ZERO, hi)
        }
    }
}

/// Clamps a candidate position for `thumb` and snaps it to the grid.
///
/// 1. Clamp into `[0, travel]`.
/// 2. Keep a thumb width of distance from the sibling at `other_position`.
/// 3. Snap to the nearest grid point that still satisfies 1 and 2.
///
/// Never fails. The result is always inside `[0, travel]`; the sibling gap
/// holds whenever the track has room for it.
pub fn clamp_candidate_position(
    candidate: Px,
    thumb: Thumb,
    other_position: Px,
    geometry: &TrackGeometry,
) -> Px {
    if geometry.is_degenerate() {
        return Px::ZERO;
    }
    let candidate = if candidate.is_finite() {
        candidate.clamp(Px::ZERO, geometry.travel)
    } else {
        Px::ZERO
    };
    let (lo, hi) = legal_interval(thumb, other_position, geometry);
    snap_within(candidate, lo, hi, geometry)
}

/// Returns `true` when the thumbs do not overlap: `low + thumb_width <= high`.
pub fn thumbs_separated(low: Px, high: Px, geometry: &TrackGeometry) -> bool {
    low + geometry.thumb_width <= high + Px(crate::px::PX_EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SliderConfig,
        geometry::{TrackMeasurements, pixel_to_value},
    };

    fn unit_geometry() -> (SliderConfig, TrackGeometry) {
        // 200px of travel, one value per pixel.
        let config = SliderConfig::default().min(0.0).max(200.0).step(1.0);
        let geometry = TrackGeometry::new(TrackMeasurements::new(220.0, 20.0), &config);
        (config, geometry)
    }

    fn stepped_geometry() -> (SliderConfig, TrackGeometry) {
        // 180px of travel in 18px steps.
        let config = SliderConfig::default().min(0.0).max(100.0).step(10.0);
        let geometry = TrackGeometry::new(TrackMeasurements::new(200.0, 20.0), &config);
        (config, geometry)
    }

    #[test]
    fn clamps_low_candidate_below_track_start() {
        let (_, geometry) = unit_geometry();
        assert_eq!(geometry.travel, Px(200.0));
        let position = clamp_candidate_position(Px(-50.0), Thumb::Low, Px(200.0), &geometry);
        assert_eq!(position, Px::ZERO);
    }

    #[test]
    fn clamps_high_candidate_beyond_travel() {
        let (_, geometry) = unit_geometry();
        let position = clamp_candidate_position(Px(400.0), Thumb::High, Px::ZERO, &geometry);
        assert_eq!(position, Px(200.0));
    }

    #[test]
    fn high_thumb_keeps_a_thumb_width_from_low() {
        let (_, geometry) = unit_geometry();
        let position = clamp_candidate_position(Px(70.0), Thumb::High, Px(80.0), &geometry);
        assert_eq!(position, Px(100.0));
    }

    #[test]
    fn low_thumb_keeps_a_thumb_width_from_high() {
        let (_, geometry) = unit_geometry();
        let position = clamp_candidate_position(Px(150.0), Thumb::Low, Px(120.0), &geometry);
        assert_eq!(position, Px(100.0));
    }

    #[test]
    fn snaps_inward_instead_of_into_the_sibling() {
        let (config, geometry) = stepped_geometry();
        // Low at 54: the high thumb may not go below 74, nearest legal grid point is 90.
        let high = clamp_candidate_position(Px(60.0), Thumb::High, Px(54.0), &geometry);
        assert_eq!(high, Px(90.0));
        assert_eq!(pixel_to_value(high, &geometry, &config), 50.0);
        // High at 90: the low thumb may not go above 70, nearest legal grid point is 54.
        let low = clamp_candidate_position(Px(71.0), Thumb::Low, Px(90.0), &geometry);
        assert_eq!(low, Px(54.0));
    }

    #[test]
    fn raw_position_snaps_to_the_nearest_step() {
        let (config, geometry) = stepped_geometry();
        let high = clamp_candidate_position(Px(65.0), Thumb::High, Px::ZERO, &geometry);
        assert_eq!(high, Px(72.0));
        assert_eq!(pixel_to_value(high, &geometry, &config), 40.0);
    }

    #[test]
    fn track_bounds_win_when_thumbs_cannot_fit() {
        let (_, geometry) = unit_geometry();
        let high = clamp_candidate_position(Px(10.0), Thumb::High, Px(195.0), &geometry);
        assert_eq!(high, Px(200.0));
        let low = clamp_candidate_position(Px(50.0), Thumb::Low, Px(5.0), &geometry);
        assert_eq!(low, Px::ZERO);
    }

    #[test]
    fn non_finite_candidates_fall_back_to_track_start() {
        let (_, geometry) = unit_geometry();
        assert_eq!(
            clamp_candidate_position(Px(f64::NAN), Thumb::Low, Px(100.0), &geometry),
            Px::ZERO
        );
        assert_eq!(
            clamp_candidate_position(Px(f64::NAN), Thumb::High, Px(30.0), &geometry),
            Px(50.0)
        );
    }

    #[test]
    fn ordering_holds_for_every_candidate_pair() {
        let (config, geometry) = stepped_geometry();
        let mut low = Px::ZERO;
        let mut high = geometry.travel;
        for step in 0..400 {
            let candidate = Px(step as f64 * 0.9 - 90.0);
            if step % 2 == 0 {
                low = clamp_candidate_position(candidate, Thumb::Low, high, &geometry);
            } else {
                high = clamp_candidate_position(candidate, Thumb::High, low, &geometry);
            }
            assert!(thumbs_separated(low, high, &geometry), "{low} {high}");
            assert!(
                pixel_to_value(low, &geometry, &config) <= pixel_to_value(high, &geometry, &config)
            );
        }
    }

    #[test]
    fn degenerate_geometry_pins_to_zero() {
        let config = SliderConfig::default();
        let geometry = TrackGeometry::new(TrackMeasurements::new(0.0, 0.0), &config);
        assert_eq!(
            clamp_candidate_position(Px(80.0), Thumb::High, Px::ZERO, &geometry),
            Px::ZERO
        );
    }
}
