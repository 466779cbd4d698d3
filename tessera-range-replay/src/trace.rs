//! On-disk formats: a TOML slider config and a JSON pointer trace.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tessera_range_slider::{PointerEvent, PointerPhase, SliderSpec, Thumb, TrackMeasurements};

/// Contents of the `<config.toml>` argument.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Domain, step and initial values.
    pub slider: SliderSpec,
    /// Track measurements; `--track-width` / `--thumb-width` override them.
    pub track: Option<TrackMeasurements>,
    /// How values are printed.
    pub labels: LabelStyle,
}

/// Label formatting for the replayed values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub prefix: String,
    pub suffix: String,
    /// Fixed number of decimals; plain `Display` when unset.
    pub decimals: Option<usize>,
}

impl LabelStyle {
    pub fn format(&self, value: f64) -> String {
        match self.decimals {
            Some(decimals) => format!("{}{value:.decimals$}{}", self.prefix, self.suffix),
            None => format!("{}{value}{}", self.prefix, self.suffix),
        }
    }
}

/// One entry of the `<trace.json>` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TraceStep {
    /// Event recorded with its native name, e.g. `"touchmove"`.
    Named(NamedEvent),
    /// Event already expressed as a phase.
    Pointer(PointerEvent),
    /// Track or thumb size changed.
    Resize { resize: TrackMeasurements },
    /// Values set programmatically.
    SetValues { set_values: [f64; 2] },
}

/// Pointer event as recorded from a web host.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedEvent {
    pub event: String,
    #[serde(default)]
    pub page_x: Option<f64>,
    #[serde(default)]
    pub target: Option<Thumb>,
    #[serde(default)]
    pub offsets: Vec<f64>,
    #[serde(default)]
    pub pointer_id: Option<u64>,
}

impl NamedEvent {
    /// Converts to a [`PointerEvent`]; `None` for names outside the event table.
    pub fn to_pointer_event(&self) -> Option<PointerEvent> {
        let phase = PointerPhase::from_event_name(&self.event)?;
        let mut event = PointerEvent::new(phase).with_offsets(self.offsets.iter().copied());
        if let Some(page_x) = self.page_x {
            event = event.at(page_x);
        }
        if let Some(thumb) = self.target {
            event = event.on(thumb);
        }
        if let Some(id) = self.pointer_id {
            event = event.with_pointer_id(id);
        }
        Some(event)
    }
}

impl TraceStep {
    /// Short description used in the replay output.
    pub fn describe(&self) -> String {
        match self {
            TraceStep::Named(named) => named.event.clone(),
            TraceStep::Pointer(event) => format!("{:?}", event.phase).to_lowercase(),
            TraceStep::Resize { resize } => {
                format!("resize {} / {}", resize.track_width, resize.thumb_width)
            }
            TraceStep::SetValues { set_values } => {
                format!("set {} .. {}", set_values[0], set_values[1])
            }
        }
    }
}

pub fn parse_config(source: &str) -> Result<ReplayConfig> {
    toml::from_str(source).context("invalid slider config")
}

pub fn parse_trace(source: &str) -> Result<Vec<TraceStep>> {
    serde_json::from_str(source).context("invalid pointer trace")
}

pub fn load_config(path: &Path) -> Result<ReplayConfig> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&source).with_context(|| format!("in {}", path.display()))
}

pub fn load_trace(path: &Path) -> Result<Vec<TraceStep>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_trace(&source).with_context(|| format!("in {}", path.display()))
}
