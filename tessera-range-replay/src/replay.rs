//! Drives a [`SharedSlider`] through a recorded trace.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use anyhow::{Context, Result};
use tessera_range_slider::{
    PointerEvent, RangeSlider, RenderState, SharedSlider, SliderConfig, TrackMeasurements,
};
use tracing::{debug, warn};

use crate::trace::{ReplayConfig, TraceStep};

/// What a single trace step did to the slider.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A thumb moved and the observer fired.
    Moved,
    /// A drag ended.
    Released,
    /// Geometry or values were replaced.
    Updated,
    /// The slider ignored the event.
    Unchanged,
    /// The event name is not in the event table.
    UnknownEvent,
    /// The slider refused the step.
    Rejected(String),
}

/// Slider state after one trace step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub action: String,
    pub outcome: Outcome,
    pub render: RenderState,
    pub values: (f64, f64),
    pub labels: (String, String),
}

pub struct Replay {
    slider: SharedSlider,
    changes: Arc<AtomicUsize>,
}

impl Replay {
    pub fn new(config: ReplayConfig, measurements: TrackMeasurements) -> Result<Self> {
        let changes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&changes);
        let labels = config.labels.clone();
        let slider_config = SliderConfig::try_from(config.slider)
            .context("invalid slider config")?
            .formatter(move |value| labels.format(value))
            .on_change(move |(low, high)| {
                counter.fetch_add(1, Ordering::Relaxed);
                debug!(low, high, "values changed");
            });
        let slider = RangeSlider::initialize(slider_config, measurements)
            .context("failed to initialize the slider")?;
        Ok(Self {
            slider: SharedSlider::new(slider),
            changes,
        })
    }

    /// Number of observer notifications so far, including the initial one.
    pub fn changes(&self) -> usize {
        self.changes.load(Ordering::Relaxed)
    }

    pub fn apply(&self, index: usize, step: &TraceStep) -> Frame {
        let outcome = match step {
            TraceStep::Named(named) => match named.to_pointer_event() {
                Some(event) => self.pointer(&event),
                None => {
                    warn!(event = %named.event, "skipping unknown event name");
                    Outcome::UnknownEvent
                }
            },
            TraceStep::Pointer(event) => self.pointer(event),
            TraceStep::Resize { resize } => match self.slider.recompute_geometry(*resize) {
                Ok(()) => Outcome::Updated,
                Err(err) => Outcome::Rejected(err.to_string()),
            },
            TraceStep::SetValues { set_values: [low, high] } => {
                match self.slider.with_mut(|slider| slider.set_values(*low, *high)) {
                    Ok(()) => Outcome::Updated,
                    Err(err) => Outcome::Rejected(err.to_string()),
                }
            }
        };
        self.frame(index, step.describe(), outcome)
    }

    /// Current state, outside of any trace step.
    pub fn snapshot(&self, action: &str) -> Frame {
        self.frame(0, action.to_string(), Outcome::Updated)
    }

    fn pointer(&self, event: &PointerEvent) -> Outcome {
        let was_dragging = self.slider.with(|slider| slider.is_dragging());
        if self.slider.handle_event(event) {
            Outcome::Moved
        } else if was_dragging
            && event.phase.is_terminal()
            && !self.slider.with(|slider| slider.is_dragging())
        {
            Outcome::Released
        } else {
            Outcome::Unchanged
        }
    }

    fn frame(&self, index: usize, action: String, outcome: Outcome) -> Frame {
        self.slider.with(|slider| Frame {
            index,
            action,
            outcome,
            render: slider.render_state(),
            values: slider.values(),
            labels: slider.labels(),
        })
    }
}
