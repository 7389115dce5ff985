use chrono::{DateTime, Utc};

use crate::utils;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub time: DateTime<Utc>,
}

impl TrackPoint {
    pub fn new(latitude: f64, longitude: f64, time: DateTime<Utc>) -> Self {
        TrackPoint {
            latitude,
            longitude,
            time,
        }
    }

    pub fn haversine_distance_km(&self, other: &TrackPoint) -> f64 {
        utils::haversine_distance_km(
            (self.latitude, self.longitude),
            (other.latitude, other.longitude),
        )
    }

    /// Signed, so disordered or duplicated timestamps show up as `<= 0`.
    pub fn seconds_until(&self, later: &TrackPoint) -> f64 {
        utils::delta_in_seconds(later.time - self.time)
    }
}
