mod output;
mod replay;
mod trace;

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Result, bail};
use clap::Parser;
use tessera_range_slider::{Px, TrackMeasurements};
use tracing_subscriber::EnvFilter;

use crate::{
    replay::{Outcome, Replay},
    trace::{ReplayConfig, load_config, load_trace},
};

#[derive(Parser)]
#[command(name = "tessera-range-replay")]
#[command(about = "Replay a recorded pointer trace through a range slider", long_about = None)]
#[command(version)]
struct Cli {
    /// Slider config (TOML)
    config: PathBuf,
    /// Pointer trace (JSON array of events)
    trace: PathBuf,
    /// Override the track width from the config
    #[arg(long = "track-width")]
    track_width: Option<f64>,
    /// Override the thumb width from the config
    #[arg(long = "thumb-width")]
    thumb_width: Option<f64>,
    /// Show drag state machine logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    let measurements = measurements(&config, cli.track_width, cli.thumb_width)?;
    let trace = load_trace(&cli.trace)?;

    output::replay_started(trace.len(), measurements);
    let replay = Replay::new(config, measurements)?;
    output::frame(&replay.snapshot("init"));

    let mut skipped = 0usize;
    for (index, step) in trace.iter().enumerate() {
        let frame = replay.apply(index + 1, step);
        if frame.outcome == Outcome::UnknownEvent {
            skipped += 1;
        }
        output::frame(&frame);
    }

    output::finished(&replay.snapshot("final"), replay.changes(), skipped);
    Ok(())
}

/// Resolves track measurements: command-line flags win over the config.
fn measurements(
    config: &ReplayConfig,
    track_width: Option<f64>,
    thumb_width: Option<f64>,
) -> Result<TrackMeasurements> {
    let base = config.track;
    let track = track_width.map(Px).or(base.map(|m| m.track_width));
    let thumb = thumb_width.map(Px).or(base.map(|m| m.thumb_width));
    match (track, thumb) {
        (Some(track_width), Some(thumb_width)) => Ok(TrackMeasurements {
            track_width,
            thumb_width,
        }),
        _ => bail!(
            "track measurements missing: add a [track] section or pass --track-width and --thumb-width"
        ),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "error,tessera_range_slider=debug,tessera_range_replay=debug"
    } else {
        "error,tessera_range_slider=info"
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
