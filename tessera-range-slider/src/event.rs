//! Pointer events as seen by the slider.
//!
//! Hosts translate their native input (DOM touch/mouse/pointer events, winit
//! cursor events, terminal mouse reports) into [`PointerEvent`]s. The
//! [`EVENT_NAMES`] table maps the usual web event names onto the four phases
//! the drag state machine understands.

use smallvec::SmallVec;

use crate::{px::Px, thumb::Thumb};

/// Lifecycle phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PointerPhase {
    /// Pointer pressed.
    Start,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    End,
    /// Interaction cancelled by the platform.
    Cancel,
}

/// Event names belonging to each phase.
pub const EVENT_NAMES: &[(PointerPhase, &[&str])] = &[
    (PointerPhase::Start, &["touchstart", "mousedown", "pointerdown"]),
    (PointerPhase::Move, &["touchmove", "mousemove", "pointermove"]),
    (PointerPhase::End, &["touchend", "mouseup", "pointerup"]),
    (PointerPhase::Cancel, &["touchcancel", "pointercancel"]),
];

impl PointerPhase {
    /// Looks up the phase for a native event name.
    pub fn from_event_name(name: &str) -> Option<Self> {
        EVENT_NAMES
            .iter()
            .find(|(_, names)| names.contains(&name))
            .map(|(phase, _)| *phase)
    }

    /// Native event names that map to this phase.
    pub fn event_names(self) -> &'static [&'static str] {
        EVENT_NAMES
            .iter()
            .find(|(phase, _)| *phase == self)
            .map(|(_, names)| *names)
            .unwrap_or(&[])
    }

    /// `End` and `Cancel` both finish a drag.
    pub fn is_terminal(self) -> bool {
        matches!(self, PointerPhase::End | PointerPhase::Cancel)
    }
}

/// A single pointer event delivered to the slider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    /// Which part of the interaction this is.
    pub phase: PointerPhase,
    /// Absolute horizontal page coordinate; `None` when the event carried none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub page_x: Option<Px>,
    /// Thumb the event was dispatched on, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<Thumb>,
    /// `offsetLeft` of the target and each offset parent up to the page.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ancestor_offsets: SmallVec<[Px; 4]>,
    /// Touch identifier, when the platform provides one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pointer_id: Option<u64>,
}

impl PointerEvent {
    /// Creates an event with no coordinate, target or offsets.
    pub fn new(phase: PointerPhase) -> Self {
        Self {
            phase,
            page_x: None,
            target: None,
            ancestor_offsets: SmallVec::new(),
            pointer_id: None,
        }
    }

    /// Pointer pressed on `thumb` at `page_x`.
    pub fn down(thumb: Thumb, page_x: f64) -> Self {
        Self::new(PointerPhase::Start).at(page_x).on(thumb)
    }

    /// Pointer moved to `page_x`.
    pub fn moved(page_x: f64) -> Self {
        Self::new(PointerPhase::Move).at(page_x)
    }

    /// Pointer released.
    pub fn up() -> Self {
        Self::new(PointerPhase::End)
    }

    /// Interaction cancelled.
    pub fn cancel() -> Self {
        Self::new(PointerPhase::Cancel)
    }

    /// Sets the page coordinate.
    pub fn at(mut self, page_x: f64) -> Self {
        self.page_x = Some(Px(page_x));
        self
    }

    /// Sets the target thumb.
    pub fn on(mut self, thumb: Thumb) -> Self {
        self.target = Some(thumb);
        self
    }

    /// Sets the offset chain.
    pub fn with_offsets(mut self, offsets: impl IntoIterator<Item = f64>) -> Self {
        self.ancestor_offsets = offsets.into_iter().map(Px).collect();
        self
    }

    /// Sets the touch identifier.
    pub fn with_pointer_id(mut self, id: u64) -> Self {
        self.pointer_id = Some(id);
        self
    }

    /// Sum of the offset chain, or `None` when the event carried no chain.
    pub fn origin_offset(&self) -> Option<Px> {
        if self.ancestor_offsets.is_empty() {
            None
        } else {
            Some(self.ancestor_offsets.iter().sum())
        }
    }

    /// Finite page coordinate, if any.
    pub(crate) fn coordinate(&self) -> Option<Px> {
        self.page_x.filter(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_web_event_names_to_phases() {
        assert_eq!(PointerPhase::from_event_name("touchstart"), Some(PointerPhase::Start));
        assert_eq!(PointerPhase::from_event_name("mousedown"), Some(PointerPhase::Start));
        assert_eq!(PointerPhase::from_event_name("mousemove"), Some(PointerPhase::Move));
        assert_eq!(PointerPhase::from_event_name("touchend"), Some(PointerPhase::End));
        assert_eq!(PointerPhase::from_event_name("mouseup"), Some(PointerPhase::End));
        assert_eq!(PointerPhase::from_event_name("touchcancel"), Some(PointerPhase::Cancel));
        assert_eq!(PointerPhase::from_event_name("click"), None);
    }

    #[test]
    fn every_phase_lists_its_names() {
        for phase in [
            PointerPhase::Start,
            PointerPhase::Move,
            PointerPhase::End,
            PointerPhase::Cancel,
        ] {
            let names = phase.event_names();
            assert!(!names.is_empty());
            for name in names {
                assert_eq!(PointerPhase::from_event_name(name), Some(phase));
            }
        }
    }

    #[test]
    fn terminal_phases() {
        assert!(PointerPhase::End.is_terminal());
        assert!(PointerPhase::Cancel.is_terminal());
        assert!(!PointerPhase::Move.is_terminal());
    }

    #[test]
    fn origin_offset_sums_the_chain() {
        let event = PointerEvent::moved(300.0).with_offsets([0.0, 40.0, 12.5]);
        assert_eq!(event.origin_offset(), Some(Px(52.5)));
        assert_eq!(PointerEvent::moved(300.0).origin_offset(), None);
    }

    #[test]
    fn non_finite_coordinates_are_dropped() {
        assert_eq!(PointerEvent::moved(f64::NAN).coordinate(), None);
        assert_eq!(PointerEvent::up().coordinate(), None);
        assert_eq!(PointerEvent::moved(3.0).coordinate(), Some(Px(3.0)));
    }
}
