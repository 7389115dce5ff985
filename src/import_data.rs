use crate::error::SpeedError;
use crate::track::TrackPoint;
use chrono::{DateTime, Utc};
use std::{fs::File, io, io::BufReader, io::Read};

/// Which `<trk>`/`<trkseg>` of a GPX file to read. Only one segment is ever
/// used for a computation; the default is the first segment of the first
/// track.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackSelector {
    pub track: usize,
    pub segment: usize,
}

pub fn load_gpx(file_path: &str, selector: TrackSelector) -> Result<Vec<TrackPoint>, SpeedError> {
    let file = File::open(file_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SpeedError::InputNotFound {
            path: file_path.to_owned(),
        },
        _ => SpeedError::Io(e),
    })?;
    let points = read_gpx(BufReader::new(file), selector)?;
    debug!("loaded {} track points from {}", points.len(), file_path);
    Ok(points)
}

pub fn read_gpx<R: Read>(
    reader: R,
    selector: TrackSelector,
) -> Result<Vec<TrackPoint>, SpeedError> {
    let gpx_data = gpx::read(reader).map_err(|e| {
        warn!("gpx parse error: {e}");
        SpeedError::ParseFailure(e.to_string())
    })?;

    if gpx_data.tracks.is_empty() {
        return Err(SpeedError::NoTrackData);
    }
    if gpx_data.tracks.len() > 1 || gpx_data.tracks[0].segments.len() > 1 {
        info!(
            "GPX file has {} track(s), {} segment(s) in the first; using track #{} segment #{}",
            gpx_data.tracks.len(),
            gpx_data.tracks[0].segments.len(),
            selector.track,
            selector.segment
        );
    }

    let track = gpx_data
        .tracks
        .get(selector.track)
        .ok_or(SpeedError::TrackNotFound {
            index: selector.track,
            count: gpx_data.tracks.len(),
        })?;
    let segment = track
        .segments
        .get(selector.segment)
        .ok_or(SpeedError::SegmentNotFound {
            index: selector.segment,
            count: track.segments.len(),
        })?;

    segment
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| -> Result<TrackPoint, SpeedError> {
            let time = point
                .time
                .as_ref()
                .ok_or(SpeedError::MissingTimestamp { index })?;
            let time = time
                .format()
                .map_err(|e| SpeedError::ParseFailure(e.to_string()))?;
            let time = DateTime::parse_from_rfc3339(&time)
                .map_err(|e| SpeedError::ParseFailure(e.to_string()))?;
            Ok(TrackPoint {
                latitude: point.point().y(),
                longitude: point.point().x(),
                time: DateTime::<Utc>::from(time),
            })
        })
        .collect()
}
