use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeedError {
    #[error("File not found at {path}")]
    InputNotFound { path: String },
    #[error("Could not read GPX file: {0}")]
    Io(#[from] io::Error),
    // the underlying parser message goes to the log, not to the user
    #[error("Could not parse GPX file. Check if it is a valid GPX file.")]
    ParseFailure(String),
    #[error("GPX file contains no tracks.")]
    NoTrackData,
    #[error("GPX file has no track #{index} (it contains {count})")]
    TrackNotFound { index: usize, count: usize },
    #[error("Track has no segment #{index} (it contains {count})")]
    SegmentNotFound { index: usize, count: usize },
    #[error("Track point #{index} has no timestamp")]
    MissingTimestamp { index: usize },
    #[error("No points found in the specified segment or segment is too short.")]
    EmptySegment,
    #[error("{0}")]
    Usage(String),
}
