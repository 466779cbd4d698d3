//! Error type for configuration and programmatic input.

use thiserror::Error;

/// Errors raised while configuring or driving a [`RangeSlider`](crate::RangeSlider).
///
/// Only configuration and programmatic input can fail. Malformed pointer
/// events are dropped silently and degenerate layouts collapse to position 0.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// `min` must be strictly below `max`.
    #[error("slider bounds are inverted or empty: min {min} must be below max {max}")]
    InvalidBounds { min: f64, max: f64 },
    /// `step` must be a positive finite number.
    #[error("slider step must be positive and finite, got {0}")]
    InvalidStep(f64),
    /// An initial value lies outside `[min, max]`.
    #[error("initial value {value} lies outside [{min}, {max}]")]
    InitialOutOfRange { value: f64, min: f64, max: f64 },
    /// The low value is above the high value.
    #[error("low value {low} is above high value {high}")]
    InitialOutOfOrder { low: f64, high: f64 },
    /// A numeric input was NaN or infinite.
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    /// The discrete value scale cannot be used.
    #[error("invalid value scale: {0}")]
    InvalidScale(String),
    /// A layout measurement was negative or not finite.
    #[error("invalid {what} measurement: {value}")]
    InvalidMeasurement { what: &'static str, value: f64 },
}
