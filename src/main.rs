use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};
use gpx_avg_speed::api::{self, SpeedRequest};
use gpx_avg_speed::error::SpeedError;
use gpx_avg_speed::import_data::TrackSelector;
use gpx_avg_speed::logs;
use gpx_avg_speed::speed::SpeedUnit;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Calculate the average speed for a segment of a GPX track.",
    long_about = None
)]
struct Cli {
    /// The path to the GPX file
    #[arg(value_hint = ValueHint::FilePath)]
    gpx_file: PathBuf,

    /// Start time of the segment in ISO format (e.g. 2025-11-12T10:00:00Z)
    #[arg(long)]
    start_time: Option<String>,

    /// End time of the segment in ISO format (e.g. 2025-11-12T10:15:00Z)
    #[arg(long)]
    end_time: Option<String>,

    /// Start distance of the segment in kilometers
    #[arg(long)]
    start_distance: Option<f64>,

    /// End distance of the segment in kilometers
    #[arg(long)]
    end_distance: Option<f64>,

    /// Output unit for speed (km/h or mph)
    #[arg(long, default_value = "km/h")]
    unit: SpeedUnit,

    /// Skip intervals slower than 1 km/h
    #[arg(long, action = ArgAction::SetTrue)]
    skip_zeros: bool,

    /// Index of the track to read
    #[arg(long, default_value_t = 0)]
    track: usize,

    /// Index of the segment within the track
    #[arg(long, default_value_t = 0)]
    segment: usize,

    /// Verbose logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logs::init(cli.verbose)?;

    let outcome = SpeedRequest::new(
        &cli.gpx_file.to_string_lossy(),
        cli.start_time.as_deref(),
        cli.end_time.as_deref(),
        cli.start_distance,
        cli.end_distance,
        cli.unit,
        cli.skip_zeros,
    )
    .map(|request| {
        request.with_track_selector(TrackSelector {
            track: cli.track,
            segment: cli.segment,
        })
    })
    .and_then(|request| api::calculate_average_speed(&request));

    match outcome {
        Ok(result) => println!("Average Speed: {result}"),
        // rejected before the file is opened
        Err(SpeedError::Usage(message)) => {
            eprintln!("error: {message}");
            process::exit(2);
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}
