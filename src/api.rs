use chrono::{DateTime, Utc};

use crate::error::SpeedError;
use crate::import_data::{self, TrackSelector};
use crate::segment_selector::{self, SelectionCriterion};
use crate::speed::{self, SpeedResult, SpeedUnit};
use crate::track::TrackPoint;
use crate::utils;

#[derive(Clone, Debug, PartialEq)]
pub struct SpeedRequest {
    pub gpx_file: String,
    pub criterion: SelectionCriterion,
    pub track_selector: TrackSelector,
    pub unit: SpeedUnit,
    pub skip_zeros: bool,
}

impl SpeedRequest {
    /// Validates the window bounds with [`build_criterion`] and reads the
    /// first segment of the first track unless told otherwise.
    pub fn new(
        gpx_file: &str,
        start_time: Option<&str>,
        end_time: Option<&str>,
        start_distance: Option<f64>,
        end_distance: Option<f64>,
        unit: SpeedUnit,
        skip_zeros: bool,
    ) -> Result<Self, SpeedError> {
        Ok(SpeedRequest {
            gpx_file: gpx_file.to_owned(),
            criterion: build_criterion(start_time, end_time, start_distance, end_distance)?,
            track_selector: TrackSelector::default(),
            unit,
            skip_zeros,
        })
    }

    pub fn with_track_selector(mut self, track_selector: TrackSelector) -> Self {
        self.track_selector = track_selector;
        self
    }
}

/// Turns the optional window bounds given on the command line into a
/// criterion. Bounds come in pairs, and time and distance windows exclude
/// each other. Nothing here touches the file system.
pub fn build_criterion(
    start_time: Option<&str>,
    end_time: Option<&str>,
    start_distance: Option<f64>,
    end_distance: Option<f64>,
) -> Result<SelectionCriterion, SpeedError> {
    if start_time.is_some() != end_time.is_some() {
        return Err(SpeedError::Usage(
            "--start-time and --end-time must be used together.".to_owned(),
        ));
    }
    if start_distance.is_some() != end_distance.is_some() {
        return Err(SpeedError::Usage(
            "--start-distance and --end-distance must be used together.".to_owned(),
        ));
    }

    match (start_time, end_time, start_distance, end_distance) {
        (Some(_), _, Some(_), _) => Err(SpeedError::Usage(
            "Please specify a segment by either time or distance, not both.".to_owned(),
        )),
        (Some(start), Some(end), None, None) => Ok(SelectionCriterion::TimeWindow {
            start: parse_timestamp(start)?,
            end: parse_timestamp(end)?,
        }),
        (None, None, Some(start_km), Some(end_km)) => {
            if start_km > end_km {
                warn!("start distance {start_km} km is after end distance {end_km} km");
            }
            Ok(SelectionCriterion::DistanceWindow { start_km, end_km })
        }
        _ => Ok(SelectionCriterion::None),
    }
}

pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, SpeedError> {
    utils::parse_timestamp(input).ok_or_else(|| {
        SpeedError::Usage(format!(
            "Invalid ISO 8601 timestamp: {input:?} (e.g. 2025-11-12T10:00:00Z)"
        ))
    })
}

pub fn calculate_average_speed(request: &SpeedRequest) -> Result<SpeedResult, SpeedError> {
    let points = import_data::load_gpx(&request.gpx_file, request.track_selector)?;
    average_speed_of_points(&points, request)
}

/// Everything after loading: select the segment and aggregate it.
pub fn average_speed_of_points(
    points: &[TrackPoint],
    request: &SpeedRequest,
) -> Result<SpeedResult, SpeedError> {
    let segment = segment_selector::select_segment(points, &request.criterion);
    debug!(
        "{:?} selected {} of {} points",
        request.criterion,
        segment.len(),
        points.len()
    );
    if segment.len() < 2 {
        return Err(SpeedError::EmptySegment);
    }

    let result = speed::aggregate_speed(&segment, request.skip_zeros, request.unit);
    info!(
        "counted {} pairs, skipped {}, {:.3} over {:.1} s",
        result.counted_pairs, result.skipped_pairs, result.distance, result.elapsed_seconds
    );
    Ok(result)
}
