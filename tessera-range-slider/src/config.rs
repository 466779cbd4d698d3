//! Slider configuration.
//!
//! ## Usage
//!
//! Build a [`SliderConfig`] with its setters, attach an observer and hand it
//! to [`RangeSlider::initialize`](crate::RangeSlider::initialize), which
//! validates it and fails fast on inconsistent input.
//!
//! ```
//! use tessera_range_slider::SliderConfig;
//!
//! let config = SliderConfig::default()
//!     .min(0.0)
//!     .max(500.0)
//!     .step(25.0)
//!     .initial_min(100.0)
//!     .initial_max(300.0)
//!     .on_change(|(low, high)| println!("{low}..{high}"));
//! assert!(config.validate().is_ok());
//! ```

use derive_setters::Setters;
use tracing::warn;

use crate::{callback::CallbackWith, error::SliderError, scale::Scale};

/// Change observer invoked with `(low, high)` after every accepted update.
pub type ChangeCallback = CallbackWith<(f64, f64)>;

/// Renders a single value into label text.
pub type ValueFormatter = CallbackWith<f64, String>;

/// Configuration of a range slider session.
///
/// Immutable once the slider is initialized.
#[derive(Clone, PartialEq, Debug, Setters)]
pub struct SliderConfig {
    /// Lower domain bound.
    pub min: f64,
    /// Upper domain bound, strictly above `min`.
    pub max: f64,
    /// Quantization unit of the domain. Ignored by discrete scales.
    pub step: f64,
    /// Initial value of the low thumb.
    pub initial_min: f64,
    /// Initial value of the high thumb.
    pub initial_max: f64,
    /// Mapping between track positions and values.
    #[setters(skip)]
    pub scale: Scale,
    /// Observer fired with `(low, high)` on every accepted change.
    #[setters(skip)]
    pub on_change: Option<ChangeCallback>,
    /// Formatter used by label rendering.
    #[setters(skip)]
    pub formatter: Option<ValueFormatter>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            initial_min: 0.0,
            initial_max: 100.0,
            scale: Scale::Linear,
            on_change: None,
            formatter: None,
        }
    }
}

impl SliderConfig {
    /// Sets the change observer.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn((f64, f64)) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Sets the change observer using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<ChangeCallback>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Sets the label formatter.
    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(CallbackWith::new(formatter));
        self
    }

    /// Switches to a discrete scale over `values`.
    ///
    /// The domain bounds become the smallest and largest entry.
    pub fn values(mut self, values: impl IntoIterator<Item = f64>) -> Result<Self, SliderError> {
        let scale = Scale::discrete(values)?;
        if let Some((min, max)) = scale.bounds() {
            self.min = min;
            self.max = max;
        }
        self.scale = scale;
        Ok(self)
    }

    /// Formats `value` for display, falling back to its `Display` output.
    pub fn format(&self, value: f64) -> String {
        match &self.formatter {
            Some(formatter) => formatter.call(value),
            None => value.to_string(),
        }
    }

    /// Checks bounds, step and initial values.
    ///
    /// Returns the config with its initial values snapped onto the scale.
    pub fn validate(mut self) -> Result<Self, SliderError> {
        let result = self.check();
        if let Err(err) = &result {
            warn!("rejecting slider config: {err}");
        }
        result?;

        self.initial_min = self.snap(self.initial_min);
        self.initial_max = self.snap(self.initial_max);
        Ok(self)
    }

    fn check(&self) -> Result<(), SliderError> {
        for (name, value) in [
            ("min", self.min),
            ("max", self.max),
            ("initial_min", self.initial_min),
            ("initial_max", self.initial_max),
        ] {
            if !value.is_finite() {
                return Err(SliderError::NonFinite(name));
            }
        }
        if self.min >= self.max {
            return Err(SliderError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        if let Scale::Discrete(values) = &self.scale {
            let (first, last) = self
                .scale
                .bounds()
                .ok_or_else(|| SliderError::InvalidScale("no values".to_string()))?;
            if values.len() < 2 || first != self.min || last != self.max {
                return Err(SliderError::InvalidScale(format!(
                    "scale spans [{first}, {last}] but bounds are [{}, {}]",
                    self.min, self.max
                )));
            }
        } else if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SliderError::InvalidStep(self.step));
        }
        for value in [self.initial_min, self.initial_max] {
            if value < self.min || value > self.max {
                return Err(SliderError::InitialOutOfRange {
                    value,
                    min: self.min,
                    max: self.max,
                });
            }
        }
        if self.initial_min > self.initial_max {
            return Err(SliderError::InitialOutOfOrder {
                low: self.initial_min,
                high: self.initial_max,
            });
        }
        Ok(())
    }

    /// Snaps `value` onto this config's scale, clamping into the domain.
    pub fn snap(&self, value: f64) -> f64 {
        self.scale.snap(value, self.min, self.max, self.step)
    }

    /// Domain range `max - min`.
    pub fn domain_range(&self) -> f64 {
        self.max - self.min
    }

    /// Number of snap intervals along the track.
    pub fn step_count(&self) -> u64 {
        self.scale.step_count(self.min, self.max, self.step)
    }
}

/// Plain-data part of [`SliderConfig`], suitable for config files.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderSpec {
    /// Lower domain bound.
    pub min: f64,
    /// Upper domain bound.
    pub max: f64,
    /// Quantization unit.
    pub step: f64,
    /// Initial low value.
    pub initial_min: f64,
    /// Initial high value.
    pub initial_max: f64,
    /// Optional discrete values; when non-empty they replace the linear scale.
    pub values: Vec<f64>,
}

impl Default for SliderSpec {
    fn default() -> Self {
        let config = SliderConfig::default();
        Self {
            min: config.min,
            max: config.max,
            step: config.step,
            initial_min: config.initial_min,
            initial_max: config.initial_max,
            values: Vec::new(),
        }
    }
}

impl TryFrom<SliderSpec> for SliderConfig {
    type Error = SliderError;

    fn try_from(spec: SliderSpec) -> Result<Self, Self::Error> {
        let config = SliderConfig::default()
            .min(spec.min)
            .max(spec.max)
            .step(spec.step)
            .initial_min(spec.initial_min)
            .initial_max(spec.initial_max);
        if spec.values.is_empty() {
            Ok(config)
        } else {
            config.values(spec.values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SliderConfig::default().validate().unwrap();
        assert_eq!((config.initial_min, config.initial_max), (0.0, 100.0));
        assert_eq!(config.step_count(), 100);
    }

    #[test]
    fn rejects_inverted_or_empty_bounds() {
        let err = SliderConfig::default().min(10.0).max(10.0).validate();
        assert_eq!(
            err,
            Err(SliderError::InvalidBounds {
                min: 10.0,
                max: 10.0
            })
        );
        assert!(SliderConfig::default().min(20.0).max(10.0).validate().is_err());
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            SliderConfig::default().step(0.0).validate(),
            Err(SliderError::InvalidStep(0.0))
        );
        assert_eq!(
            SliderConfig::default().step(-2.0).validate(),
            Err(SliderError::InvalidStep(-2.0))
        );
    }

    #[test]
    fn rejects_initial_values_out_of_range_or_order() {
        assert!(matches!(
            SliderConfig::default().initial_min(-1.0).validate(),
            Err(SliderError::InitialOutOfRange { value, .. }) if value == -1.0
        ));
        assert_eq!(
            SliderConfig::default()
                .initial_min(60.0)
                .initial_max(40.0)
                .validate(),
            Err(SliderError::InitialOutOfOrder {
                low: 60.0,
                high: 40.0
            })
        );
    }

    #[test]
    fn rejects_non_finite_numbers() {
        assert_eq!(
            SliderConfig::default().max(f64::INFINITY).validate(),
            Err(SliderError::NonFinite("max"))
        );
    }

    #[test]
    fn validate_snaps_initial_values_to_step() {
        let config = SliderConfig::default()
            .step(10.0)
            .initial_min(14.0)
            .initial_max(86.0)
            .validate()
            .unwrap();
        assert_eq!((config.initial_min, config.initial_max), (10.0, 90.0));
    }

    #[test]
    fn discrete_values_define_the_domain() {
        let config = SliderConfig::default()
            .values([250.0, 50.0, 1000.0, 100.0])
            .unwrap()
            .initial_min(60.0)
            .initial_max(900.0)
            .validate()
            .unwrap();
        assert_eq!((config.min, config.max), (50.0, 1000.0));
        assert_eq!((config.initial_min, config.initial_max), (50.0, 1000.0));
        assert_eq!(config.step_count(), 3);
    }

    #[test]
    fn discrete_scale_must_match_bounds() {
        let config = SliderConfig::default()
            .values([0.0, 10.0, 20.0])
            .unwrap()
            .max(50.0)
            .initial_max(20.0);
        assert!(matches!(
            config.validate(),
            Err(SliderError::InvalidScale(_))
        ));
    }

    #[test]
    fn format_uses_formatter_or_display() {
        let plain = SliderConfig::default();
        assert_eq!(plain.format(42.0), "42");

        let money = SliderConfig::default().formatter(|v| format!("${v:.2}"));
        assert_eq!(money.format(42.0), "$42.00");
    }

    #[test]
    fn spec_converts_into_config() {
        let spec = SliderSpec {
            step: 5.0,
            initial_min: 10.0,
            initial_max: 20.0,
            ..SliderSpec::default()
        };
        let config = SliderConfig::try_from(spec).unwrap().validate().unwrap();
        assert_eq!(config.step, 5.0);
        assert_eq!((config.initial_min, config.initial_max), (10.0, 20.0));

        let discrete = SliderSpec {
            values: vec![1.0, 2.0, 4.0],
            initial_min: 1.0,
            initial_max: 4.0,
            ..SliderSpec::default()
        };
        let config = SliderConfig::try_from(discrete).unwrap();
        assert_eq!((config.min, config.max), (1.0, 4.0));
    }
}
