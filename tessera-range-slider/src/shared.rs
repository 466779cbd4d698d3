//! A cloneable handle around a [`RangeSlider`].
//!
//! Input callbacks in most UI hosts must be `Send + Sync + 'static`, which an
//! owned `&mut RangeSlider` cannot satisfy. `SharedSlider` wraps the slider
//! in an `Arc<Mutex<_>>` and exposes `with` / `with_mut` accessors. Events
//! are still handled one at a time, so the lock is never contended in
//! practice.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{error::SliderError, event::PointerEvent, geometry::TrackMeasurements, slider::RangeSlider};

/// Shared, cloneable handle to a [`RangeSlider`].
#[derive(Clone)]
pub struct SharedSlider {
    inner: Arc<Mutex<RangeSlider>>,
}

impl SharedSlider {
    /// Wraps an initialized slider.
    pub fn new(slider: RangeSlider) -> Self {
        Self {
            inner: Arc::new(Mutex::new(slider)),
        }
    }

    /// Runs `f` with shared access to the slider.
    pub fn with<R>(&self, f: impl FnOnce(&RangeSlider) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs `f` with exclusive access to the slider.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut RangeSlider) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Forwards a pointer event. Returns `true` when a thumb moved.
    ///
    /// The observer runs while the slider is locked; it must not call back
    /// into this handle.
    pub fn handle_event(&self, event: &PointerEvent) -> bool {
        self.with_mut(|slider| slider.handle_event(event))
    }

    /// Forwards a resize notification.
    pub fn recompute_geometry(&self, measurements: TrackMeasurements) -> Result<(), SliderError> {
        self.with_mut(|slider| slider.recompute_geometry(measurements))
    }

    /// Current `(low, high)` values.
    pub fn values(&self) -> (f64, f64) {
        self.with(|slider| slider.values())
    }
}

impl std::fmt::Debug for SharedSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSlider")
            .field("values", &self.values())
            .finish()
    }
}
