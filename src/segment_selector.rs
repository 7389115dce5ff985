use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::track::TrackPoint;

/// Which part of a track to compute the speed over. All bounds are inclusive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectionCriterion {
    None,
    TimeWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Cumulative distances along the track, in kilometers.
    DistanceWindow { start_km: f64, end_km: f64 },
}

pub fn select_segment(points: &[TrackPoint], criterion: &SelectionCriterion) -> Vec<TrackPoint> {
    match *criterion {
        SelectionCriterion::None => points.to_vec(),
        // per-point filter, so unordered input is still handled
        SelectionCriterion::TimeWindow { start, end } => points
            .iter()
            .filter(|p| start <= p.time && p.time <= end)
            .copied()
            .collect(),
        SelectionCriterion::DistanceWindow { start_km, end_km } => {
            match distance_window_bounds(points, start_km, end_km) {
                (Some(start), Some(end)) => points[start..=end].to_vec(),
                (Some(start), None) => points[start..].to_vec(),
                // an end boundary alone means the window was inverted
                _ => Vec::new(),
            }
        }
    }
}

/// Walks the track accumulating distance and returns the indices of the
/// first points at or beyond `start_km` and `end_km`. A boundary lands on the
/// far point of the first pair that crosses the target; there is no
/// interpolation. The walk stops as soon as the end boundary is found.
pub fn distance_window_bounds(
    points: &[TrackPoint],
    start_km: f64,
    end_km: f64,
) -> (Option<usize>, Option<usize>) {
    let mut start_index = if start_km == 0.0 { Some(0) } else { None };
    let mut end_index = None;
    let mut distance_so_far = 0.0;

    for (i, (prev, curr)) in points.iter().tuple_windows().enumerate() {
        let i = i + 1;
        let step = prev.haversine_distance_km(curr);

        if distance_so_far < start_km && distance_so_far + step >= start_km {
            start_index = Some(i);
        }
        if distance_so_far < end_km && distance_so_far + step >= end_km {
            end_index = Some(i);
            break;
        }

        distance_so_far += step;
    }

    (start_index, end_index)
}
