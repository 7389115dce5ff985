use std::fmt;

use itertools::Itertools;
use strum_macros::{EnumIter, EnumString};

use crate::track::TrackPoint;
use crate::utils::{MILES_PER_KM, SECONDS_PER_HOUR};

/// Pairs slower than this are treated as standing still when skipping zeros.
pub const STATIONARY_SPEED_KMH: f64 = 1.0;

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumString, EnumIter, strum_macros::Display,
)]
pub enum SpeedUnit {
    #[default]
    #[strum(to_string = "km/h")]
    Kmh,
    #[strum(to_string = "mph")]
    Mph,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpeedResult {
    pub speed: f64,
    pub unit: SpeedUnit,
    /// Counted distance, in the unit's distance (km or miles).
    pub distance: f64,
    pub elapsed_seconds: f64,
    pub counted_pairs: usize,
    pub skipped_pairs: usize,
}

impl fmt::Display for SpeedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.speed, self.unit)
    }
}

/// Average speed over consecutive pairs of `points`.
///
/// With `skip_zeros`, pairs whose own speed is below
/// [`STATIONARY_SPEED_KMH`] (including any pair with a non-positive time
/// step) contribute neither distance nor time. A total elapsed time of
/// exactly zero yields a speed of zero.
pub fn aggregate_speed(points: &[TrackPoint], skip_zeros: bool, unit: SpeedUnit) -> SpeedResult {
    let mut total_distance_km = 0.0;
    let mut total_seconds = 0.0;
    let mut counted_pairs = 0;
    let mut skipped_pairs = 0;

    for (prev, curr) in points.iter().tuple_windows() {
        let distance_km = prev.haversine_distance_km(curr);
        let seconds = prev.seconds_until(curr);

        if skip_zeros {
            let speed_kmh = if seconds > 0.0 {
                distance_km / seconds * SECONDS_PER_HOUR
            } else {
                0.0
            };
            if speed_kmh < STATIONARY_SPEED_KMH {
                skipped_pairs += 1;
                continue;
            }
        }

        total_distance_km += distance_km;
        total_seconds += seconds;
        counted_pairs += 1;
    }

    // the conversion goes on the distance, before dividing
    let distance = match unit {
        SpeedUnit::Kmh => total_distance_km,
        SpeedUnit::Mph => total_distance_km * MILES_PER_KM,
    };
    let speed = if total_seconds == 0.0 {
        0.0
    } else {
        distance / total_seconds * SECONDS_PER_HOUR
    };

    SpeedResult {
        speed,
        unit,
        distance,
        elapsed_seconds: total_seconds,
        counted_pairs,
        skipped_pairs,
    }
}
