//! Console rendering of replay frames.

use console::{Style, style};
use tessera_range_slider::TrackMeasurements;

use crate::replay::{Frame, Outcome};

const LABEL_WIDTH: usize = 10;

fn emit(label: &str, look: &Style, message: impl AsRef<str>) {
    eprintln!(
        "{:>width$} {}",
        look.apply_to(label),
        message.as_ref(),
        width = LABEL_WIDTH
    );
}

fn detail(message: impl AsRef<str>) {
    eprintln!("{:width$} {}", "", message.as_ref(), width = LABEL_WIDTH);
}

/// Heading printed for each outcome.
fn heading(outcome: &Outcome) -> (&'static str, Style) {
    match outcome {
        Outcome::Moved => ("Moved", Style::new().green().bold()),
        Outcome::Released => ("Released", Style::new().cyan().bold()),
        Outcome::Updated => ("Updated", Style::new().blue().bold()),
        Outcome::Unchanged => ("Ignored", Style::new().dim()),
        Outcome::UnknownEvent => ("Unknown", Style::new().yellow().bold()),
        Outcome::Rejected(_) => ("Rejected", Style::new().red().bold()),
    }
}

fn thumbs_line(frame: &Frame) -> String {
    format!(
        "low {} @ {}, high {} @ {}",
        frame.labels.0, frame.render.low, frame.labels.1, frame.render.high
    )
}

fn bar_line(frame: &Frame) -> String {
    format!(
        "range bar {} + {}",
        frame.render.bar.left, frame.render.bar.width
    )
}

pub fn replay_started(events: usize, measurements: TrackMeasurements) {
    emit(
        "Replaying",
        &Style::new().green().bold(),
        format!(
            "{events} events on a {} track with {} thumbs",
            measurements.track_width, measurements.thumb_width
        ),
    );
}

/// Prints one frame. Frames that left the slider untouched get a single line.
pub fn frame(frame: &Frame) {
    let (label, look) = heading(&frame.outcome);
    let step = format!("#{} {}", frame.index, frame.action);
    match &frame.outcome {
        Outcome::Moved | Outcome::Released | Outcome::Updated => {
            emit(label, &look, step);
            detail(thumbs_line(frame));
            detail(bar_line(frame));
        }
        Outcome::Unchanged | Outcome::UnknownEvent => emit(label, &look, step),
        Outcome::Rejected(reason) => emit(label, &look, format!("{step}: {reason}")),
    }
}

pub fn finished(last: &Frame, changes: usize, skipped: usize) {
    emit(
        "Finished",
        &Style::new().green().bold(),
        format!("{} .. {} after {changes} value changes", last.labels.0, last.labels.1),
    );
    if skipped > 0 {
        eprintln!(
            "{}: {skipped} events with unknown names were skipped",
            style("note").blue().bold()
        );
    }
}

pub fn failure(err: &anyhow::Error) {
    eprintln!("{}: {err:#}", style("error").red().bold());
}
