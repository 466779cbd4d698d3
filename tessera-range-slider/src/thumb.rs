//! Thumb identity and per-thumb state.

use crate::px::Px;

/// Identifies one of the two thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Thumb {
    /// The thumb holding the lower value.
    Low,
    /// The thumb holding the upper value.
    High,
}

impl Thumb {
    /// The sibling thumb.
    pub fn other(self) -> Self {
        match self {
            Thumb::Low => Thumb::High,
            Thumb::High => Thumb::Low,
        }
    }
}

/// Position and value of a single thumb.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbState {
    /// Offset of the thumb's left edge from the track start, in `[0, travel]`.
    pub position: Px,
    /// Domain value, quantized to the scale.
    pub value: f64,
}
