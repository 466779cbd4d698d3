//! Drag lifecycle: `Idle -> Dragging(thumb) -> Idle`.
//!
//! The state machine only decides *whether* an event moves a thumb and to
//! which raw track position. Clamping against the sibling thumb and value
//! synchronization happen in [`RangeSlider`](crate::RangeSlider).
//!
//! Every transition completes synchronously inside the handling of one
//! event; there is no buffering or waiting.

use tracing::{debug, trace};

use crate::{
    event::{PointerEvent, PointerPhase},
    geometry::TrackGeometry,
    px::Px,
    thumb::Thumb,
};

/// A drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Thumb being dragged.
    pub active_thumb: Thumb,
    /// Page offset of the track origin captured at pointer-down.
    pub origin_offset: Px,
    /// Touch identifier that started the drag.
    pub pointer_id: Option<u64>,
}

impl DragSession {
    fn owns(&self, event: &PointerEvent) -> bool {
        match (self.pointer_id, event.pointer_id) {
            (Some(session), Some(incoming)) => session == incoming,
            _ => true,
        }
    }
}

/// Current drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No pointer is pressed on a thumb.
    #[default]
    Idle,
    /// A thumb follows the pointer.
    Dragging(DragSession),
}

/// What the state machine made of an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragStep {
    /// Nothing to do.
    Ignored,
    /// `thumb` should move to `candidate` (before sibling clamping).
    Move {
        /// Thumb to move.
        thumb: Thumb,
        /// Raw track position derived from the pointer.
        candidate: Px,
    },
    /// The drag of `thumb` finished; positions stay where they are.
    Released {
        /// Thumb that was being dragged.
        thumb: Thumb,
    },
}

impl DragState {
    /// Returns the active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    /// Returns the thumb being dragged, if any.
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.session().map(|s| s.active_thumb)
    }

    /// Returns `true` while a thumb is being dragged.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Feeds one event through the state machine.
    pub fn handle(&mut self, event: &PointerEvent, geometry: &TrackGeometry) -> DragStep {
        match event.phase {
            PointerPhase::Start => self.pointer_down(event, geometry),
            PointerPhase::Move => self.pointer_move(event, geometry),
            PointerPhase::End | PointerPhase::Cancel => self.pointer_up(event),
        }
    }

    /// `Idle --down(on thumb)--> Dragging`, treating the press as the first move.
    ///
    /// A press while already dragging is ignored and the running session kept.
    pub fn pointer_down(&mut self, event: &PointerEvent, geometry: &TrackGeometry) -> DragStep {
        if let DragState::Dragging(session) = self {
            debug!(
                active = ?session.active_thumb,
                target = ?event.target,
                "ignoring pointer-down during an active drag"
            );
            return DragStep::Ignored;
        }
        let Some(thumb) = event.target else {
            trace!("ignoring pointer-down outside the thumbs");
            return DragStep::Ignored;
        };
        let Some(page_x) = event.coordinate() else {
            trace!(?thumb, "ignoring pointer-down without a coordinate");
            return DragStep::Ignored;
        };

        let session = DragSession {
            active_thumb: thumb,
            origin_offset: event.origin_offset().unwrap_or(Px::ZERO),
            pointer_id: event.pointer_id,
        };
        *self = DragState::Dragging(session);
        debug!(?thumb, origin = %session.origin_offset, "drag started");

        DragStep::Move {
            thumb,
            candidate: track_candidate(page_x, session.origin_offset, geometry),
        }
    }

    /// `Dragging --move--> Dragging`.
    pub fn pointer_move(&mut self, event: &PointerEvent, geometry: &TrackGeometry) -> DragStep {
        let DragState::Dragging(session) = self else {
            return DragStep::Ignored;
        };
        if !session.owns(event) {
            trace!(pointer_id = ?event.pointer_id, "ignoring move from another pointer");
            return DragStep::Ignored;
        }
        let Some(page_x) = event.coordinate() else {
            trace!("ignoring move without a coordinate");
            return DragStep::Ignored;
        };
        let origin = event.origin_offset().unwrap_or(session.origin_offset);
        DragStep::Move {
            thumb: session.active_thumb,
            candidate: track_candidate(page_x, origin, geometry),
        }
    }

    /// `Dragging --up|cancel--> Idle`.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> DragStep {
        let DragState::Dragging(session) = *self else {
            return DragStep::Ignored;
        };
        if !session.owns(event) {
            trace!(pointer_id = ?event.pointer_id, "ignoring release from another pointer");
            return DragStep::Ignored;
        }
        *self = DragState::Idle;
        debug!(thumb = ?session.active_thumb, phase = ?event.phase, "drag finished");
        DragStep::Released {
            thumb: session.active_thumb,
        }
    }
}

/// Converts a page coordinate into a raw thumb position.
///
/// The pointer is treated as grabbing the thumb's centre: half a thumb is
/// added, the result is capped at the track width, then a full thumb is
/// taken off and the result floored at zero.
pub fn track_candidate(page_x: Px, origin_offset: Px, geometry: &TrackGeometry) -> Px {
    let mut position = page_x - origin_offset;
    position += geometry.thumb_width.half();
    position = position.min(geometry.track_width);
    (position - geometry.thumb_width).max(Px::ZERO)
}
