//! The dual-thumb range slider.
//!
//! ## Usage
//!
//! Feed pointer events in, read thumb offsets and the range bar out.
//!
//! ```
//! use tessera_range_slider::{PointerEvent, RangeSlider, SliderConfig, Thumb, TrackMeasurements};
//!
//! let config = SliderConfig::default().step(10.0).initial_min(20.0).initial_max(80.0);
//! let mut slider = RangeSlider::initialize(config, TrackMeasurements::new(200.0, 20.0))?;
//!
//! slider.handle_pointer_down(&PointerEvent::down(Thumb::High, 190.0));
//! slider.handle_pointer_up(&PointerEvent::up());
//! assert_eq!(slider.values(), (20.0, 100.0));
//! # Ok::<(), tessera_range_slider::SliderError>(())
//! ```

use tracing::{debug, trace};

use crate::{
    config::SliderConfig,
    constraint::{clamp_candidate_position, thumbs_separated},
    drag::{DragState, DragStep},
    error::SliderError,
    event::{PointerEvent, PointerPhase},
    geometry::{TrackGeometry, TrackMeasurements, pixel_to_value, value_to_pixel},
    px::Px,
    thumb::{Thumb, ThumbState},
};

/// Highlighted extent between the two thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeBar {
    /// Offset of the bar's left edge from the track start.
    pub left: Px,
    /// Width of the bar, never negative.
    pub width: Px,
}

impl RangeBar {
    /// Bar from a quarter thumb into the low thumb to the high thumb's
    /// trailing edge, so its rounded ends stay tucked under the thumbs.
    pub fn between(low: Px, high: Px, thumb_width: Px) -> Self {
        let left = low + thumb_width / 4.0;
        let right = high + thumb_width;
        Self {
            left,
            width: (right - left).max(Px::ZERO),
        }
    }
}

/// Everything the rendering glue needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderState {
    /// Horizontal offset to apply to the low thumb.
    pub low: Px,
    /// Horizontal offset to apply to the high thumb.
    pub high: Px,
    /// Highlighted range between the thumbs.
    pub bar: RangeBar,
}

/// A dual-thumb range slider.
///
/// Owns both thumb states exclusively. All mutation happens synchronously
/// through `&mut self`; wrap it in [`SharedSlider`](crate::SharedSlider) when
/// the host needs a `Send + Sync` handle.
#[derive(Debug, Clone)]
pub struct RangeSlider {
    config: SliderConfig,
    measurements: TrackMeasurements,
    geometry: TrackGeometry,
    low: ThumbState,
    high: ThumbState,
    bar: RangeBar,
    drag: DragState,
}

impl RangeSlider {
    /// Validates `config` and `measurements`, places both thumbs at the
    /// initial values and notifies the observer once.
    ///
    /// Initial values closer than a thumb width are pushed apart.
    pub fn initialize(
        config: SliderConfig,
        measurements: TrackMeasurements,
    ) -> Result<Self, SliderError> {
        let config = config.validate()?;
        let measurements = measurements.validate()?;
        let geometry = TrackGeometry::new(measurements, &config);
        debug!(
            travel = %geometry.travel,
            position_step = %geometry.position_step,
            steps = geometry.step_count,
            "range slider initialized"
        );

        let mut slider = Self {
            low: ThumbState {
                position: Px::ZERO,
                value: config.initial_min,
            },
            high: ThumbState {
                position: Px::ZERO,
                value: config.initial_max,
            },
            config,
            measurements,
            geometry,
            bar: RangeBar::default(),
            drag: DragState::Idle,
        };
        slider.place_from_values();
        slider.sync();
        Ok(slider)
    }

    /// Sets both values programmatically.
    ///
    /// Values are snapped onto the scale and clamped into the domain; the
    /// thumbs are re-placed, pushed apart when they would overlap, and the
    /// observer is notified once with the resulting pair.
    pub fn set_values(&mut self, low: f64, high: f64) -> Result<(), SliderError> {
        if !low.is_finite() {
            return Err(SliderError::NonFinite("low value"));
        }
        if !high.is_finite() {
            return Err(SliderError::NonFinite("high value"));
        }
        if low > high {
            return Err(SliderError::InitialOutOfOrder { low, high });
        }
        self.low.value = self.config.snap(low);
        self.high.value = self.config.snap(high);
        self.place_from_values();
        self.sync();
        Ok(())
    }

    /// Re-derives the geometry after a layout change and re-snaps both thumbs.
    ///
    /// Values are kept and only positions rescaled, unless the new layout
    /// would make the thumbs overlap.
    pub fn recompute_geometry(&mut self, measurements: TrackMeasurements) -> Result<(), SliderError> {
        self.measurements = measurements.validate()?;
        self.geometry = TrackGeometry::new(self.measurements, &self.config);
        debug!(
            track = %self.measurements.track_width,
            travel = %self.geometry.travel,
            "range slider geometry recomputed"
        );
        self.place_from_values();
        self.sync();
        Ok(())
    }

    /// Dispatches `event` by phase.
    ///
    /// Returns `true` when a thumb moved.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Start => self.handle_pointer_down(event),
            PointerPhase::Move => self.handle_pointer_move(event),
            PointerPhase::End | PointerPhase::Cancel => {
                self.handle_pointer_up(event);
                false
            }
        }
    }

    /// Starts dragging the targeted thumb and moves it to the pointer.
    ///
    /// Returns `true` when the thumb moved.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> bool {
        let step = self.drag.pointer_down(event, &self.geometry);
        self.apply(step)
    }

    /// Moves the dragged thumb. Returns `true` when it moved.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
        let step = self.drag.pointer_move(event, &self.geometry);
        self.apply(step)
    }

    /// Ends the drag. Positions stay at their last accepted value.
    ///
    /// Returns `true` when a drag was running and has now ended.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> bool {
        matches!(self.drag.pointer_up(event), DragStep::Released { .. })
    }

    /// Same as [`handle_pointer_up`](Self::handle_pointer_up).
    pub fn handle_pointer_cancel(&mut self, event: &PointerEvent) -> bool {
        self.handle_pointer_up(event)
    }

    fn apply(&mut self, step: DragStep) -> bool {
        let DragStep::Move { thumb, candidate } = step else {
            return false;
        };
        if self.geometry.is_degenerate() {
            trace!(?thumb, "track has no travel, ignoring move");
            return false;
        }
        let other = self.thumb(thumb.other()).position;
        let position = clamp_candidate_position(candidate, thumb, other, &self.geometry);
        self.accept(thumb, position)
    }

    /// Applies an already clamped position. No-op when nothing changes.
    fn accept(&mut self, thumb: Thumb, position: Px) -> bool {
        let value = pixel_to_value(position, &self.geometry, &self.config);
        let state = self.thumb_mut(thumb);
        if state.position.approx_eq(position) && state.value == value {
            trace!(?thumb, %position, "position unchanged");
            return false;
        }
        state.position = position;
        state.value = value;
        trace!(?thumb, %position, value, "thumb moved");
        self.sync();
        true
    }

    /// Places both thumbs from their values, then runs them through the
    /// constraint engine: when the values sit closer than a thumb width the
    /// high thumb is pushed right, and the low thumb left if the high one is
    /// already at the end of the track. Pushed thumbs take the value of their
    /// new position.
    fn place_from_values(&mut self) {
        self.low.position = value_to_pixel(self.low.value, &self.geometry, &self.config);
        self.high.position = value_to_pixel(self.high.value, &self.geometry, &self.config);
        if self.geometry.is_degenerate()
            || thumbs_separated(self.low.position, self.high.position, &self.geometry)
        {
            return;
        }

        let high = clamp_candidate_position(
            self.high.position,
            Thumb::High,
            self.low.position,
            &self.geometry,
        );
        self.separate(Thumb::High, high);
        if !thumbs_separated(self.low.position, self.high.position, &self.geometry) {
            let low = clamp_candidate_position(
                self.low.position,
                Thumb::Low,
                self.high.position,
                &self.geometry,
            );
            self.separate(Thumb::Low, low);
        }
    }

    fn separate(&mut self, thumb: Thumb, position: Px) {
        let value = pixel_to_value(position, &self.geometry, &self.config);
        let state = self.thumb_mut(thumb);
        if state.position.approx_eq(position) {
            return;
        }
        debug!(?thumb, from = state.value, to = value, "pushed thumbs apart");
        state.position = position;
        state.value = value;
    }

    /// Recomputes the range bar and notifies the observer.
    fn sync(&mut self) {
        self.bar = RangeBar::between(
            self.low.position,
            self.high.position,
            self.geometry.thumb_width,
        );
        if let Some(on_change) = &self.config.on_change {
            on_change.call((self.low.value, self.high.value));
        }
    }

    /// State of `thumb`.
    pub fn thumb(&self, thumb: Thumb) -> ThumbState {
        match thumb {
            Thumb::Low => self.low,
            Thumb::High => self.high,
        }
    }

    fn thumb_mut(&mut self, thumb: Thumb) -> &mut ThumbState {
        match thumb {
            Thumb::Low => &mut self.low,
            Thumb::High => &mut self.high,
        }
    }

    /// Current `(low, high)` values.
    pub fn values(&self) -> (f64, f64) {
        (self.low.value, self.high.value)
    }

    /// Current `(low, high)` positions.
    pub fn positions(&self) -> (Px, Px) {
        (self.low.position, self.high.position)
    }

    /// Current range bar.
    pub fn range_bar(&self) -> RangeBar {
        self.bar
    }

    /// Offsets and bar for rendering.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            low: self.low.position,
            high: self.high.position,
            bar: self.bar,
        }
    }

    /// Current geometry.
    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    /// Last measurements.
    pub fn measurements(&self) -> TrackMeasurements {
        self.measurements
    }

    /// Validated configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Drag state.
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Returns `true` while a thumb is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Labels for both values, rendered by the configured formatter.
    pub fn labels(&self) -> (String, String) {
        (
            self.config.format(self.low.value),
            self.config.format(self.high.value),
        )
    }
}
