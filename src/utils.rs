use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

// Mean Earth radius (IUGG), unit: kilometer
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

pub const MILES_PER_KM: f64 = 0.621371;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

// https://en.wikipedia.org/wiki/Haversine_formula
pub fn haversine_distance_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = (from.0.to_radians(), from.1.to_radians());
    let (lat2, lng2) = (to.0.to_radians(), to.1.to_radians());
    let d_lat = lat2 - lat1;
    let d_lng = lng2 - lng1;
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Signed length of `delta` in seconds, keeping sub-second precision.
pub fn delta_in_seconds(delta: TimeDelta) -> f64 {
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        // only overflows for spans of ~290k years
        None => delta.num_milliseconds() as f64 / 1000.0,
    }
}

/// Parses an ISO 8601 timestamp. A trailing `Z` means UTC, and timestamps
/// without any offset (including bare dates) are taken as UTC as well.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    const WITH_OFFSET: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f%:z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M:%S%.f%z",
        "%Y-%m-%dT%H:%M%:z",
    ];

    const UTC_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    let input = input.strip_suffix('Z').map_or(input.to_owned(), |s| format!("{s}+00:00"));

    for fmt in WITH_OFFSET {
        if let Ok(dt) = DateTime::parse_from_str(&input, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in UTC_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&input, fmt) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(&input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
