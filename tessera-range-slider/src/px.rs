//! Pixel offsets along the slider track.
//!
//! Track positions are fractional: the distance between two neighbouring
//! snap points is `travel / steps`, which is rarely a whole number of pixels.
//! [`Px`] therefore wraps an `f64` instead of an integer, but otherwise keeps
//! the usual pixel-unit conveniences (arithmetic, clamping, constants).
//!
//! # Coordinate System
//!
//! - Origin `0` is the start of the track (its left edge)
//! - Values increase to the right
//! - Page coordinates and ancestor offsets arriving from the host may be
//!   negative; thumb positions never are
//!
//! # Example
//!
//! ```
//! use tessera_range_slider::Px;
//!
//! let track = Px::new(200.0);
//! let thumb = Px::new(20.0);
//! let travel = (track - thumb).max(Px::ZERO);
//! assert_eq!(travel, Px::new(180.0));
//! assert_eq!(Px::new(-50.0).clamp(Px::ZERO, travel), Px::ZERO);
//! ```

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Tolerance used when comparing pixel offsets that went through a division.
pub(crate) const PX_EPSILON: f64 = 1e-9;

/// A horizontal pixel offset.
///
/// Supports negative values so that raw pointer coordinates can be expressed
/// before they are clamped onto the track.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Px(pub f64);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Px` from a raw pixel amount.
    pub const fn new(value: f64) -> Self {
        Px(value)
    }

    /// Returns the raw value.
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Returns `true` unless the value is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns the larger of two offsets.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }

    /// Returns the smaller of two offsets.
    pub fn min(self, other: Self) -> Self {
        Px(self.0.min(other.0))
    }

    /// Restricts the offset to `[lo, hi]`.
    ///
    /// Unlike [`f64::clamp`] this never panics: when `lo > hi` the upper bound
    /// wins, which is what the track clamping needs for degenerate layouts.
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Rounds half away from zero to the nearest whole pixel.
    pub fn round(self) -> Self {
        Px(self.0.round())
    }

    /// Returns half of this offset.
    pub fn half(self) -> Self {
        Px(self.0 / 2.0)
    }

    /// Returns `true` if the two offsets differ by less than [`PX_EPSILON`].
    pub(crate) fn approx_eq(self, other: Self) -> bool {
        (self.0 - other.0).abs() < PX_EPSILON
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl From<f64> for Px {
    fn from(value: f64) -> Self {
        Px(value)
    }
}

impl From<Px> for f64 {
    fn from(value: Px) -> Self {
        value.0
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl Mul<f64> for Px {
    type Output = Px;

    fn mul(self, rhs: f64) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<f64> for Px {
    type Output = Px;

    fn div(self, rhs: f64) -> Self::Output {
        Px(self.0 / rhs)
    }
}

/// Dividing two offsets yields a plain ratio.
impl Div for Px {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Px {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Px::ZERO, |acc, px| acc + px)
    }
}

impl<'a> Sum<&'a Px> for Px {
    fn sum<I: Iterator<Item = &'a Px>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
