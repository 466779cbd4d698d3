//! Renderer-agnostic core of a dual-thumb range slider.
//!
//! The crate maps thumb positions on a track to a quantized `(low, high)`
//! value pair and back, and runs the drag state machine that keeps the two
//! thumbs on the track, snapped to the step grid and out of each other's way.
//!
//! It does not render anything. Hosts measure the track and thumbs, translate
//! their native pointer input into [`PointerEvent`]s and apply the offsets
//! from [`RenderState`] however they draw (CSS transforms, GPU quads, terminal
//! cells).
//!
//! # Pipeline
//!
//! ```text
//! PointerEvent -> DragState (page x -> raw track position)
//!              -> geometry   (raw position <-> value, snapping)
//!              -> constraint (track bounds, sibling gap)
//!              -> RangeSlider (values, range bar, observer)
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use tessera_range_slider::{PointerEvent, RangeSlider, SliderConfig, Thumb, TrackMeasurements};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let config = SliderConfig::default()
//!     .step(10.0)
//!     .on_change(move |pair| sink.lock().unwrap().push(pair));
//!
//! let mut slider = RangeSlider::initialize(config, TrackMeasurements::new(200.0, 20.0))?;
//! slider.handle_pointer_down(&PointerEvent::down(Thumb::High, 85.0));
//! slider.handle_pointer_up(&PointerEvent::up());
//!
//! assert_eq!(slider.values(), (0.0, 40.0));
//! assert_eq!(seen.lock().unwrap().last(), Some(&(0.0, 40.0)));
//! # Ok::<(), tessera_range_slider::SliderError>(())
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

pub mod callback;
pub mod config;
pub mod constraint;
pub mod drag;
pub mod error;
pub mod event;
pub mod geometry;
pub mod px;
pub mod scale;
pub mod shared;
pub mod slider;
pub mod thumb;

pub use callback::CallbackWith;
pub use config::{ChangeCallback, SliderConfig, SliderSpec, ValueFormatter};
pub use constraint::{clamp_candidate_position, thumbs_separated};
pub use drag::{DragSession, DragState, DragStep};
pub use error::SliderError;
pub use event::{EVENT_NAMES, PointerEvent, PointerPhase};
pub use geometry::{
    TrackGeometry, TrackMeasurements, pixel_to_value, position_step_px, snap_to_grid,
    value_to_pixel,
};
pub use px::Px;
pub use scale::Scale;
pub use shared::SharedSlider;
pub use slider::{RangeBar, RangeSlider, RenderState};
pub use thumb::{Thumb, ThumbState};
