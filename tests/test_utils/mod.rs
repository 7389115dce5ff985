#![allow(dead_code)]

use chrono::{DateTime, SecondsFormat, TimeDelta, TimeZone, Utc};
use gpx_avg_speed::track::TrackPoint;
use gpx_avg_speed::utils::EARTH_RADIUS_KM;
use std::fs::File;
use std::io::Write;
use tempdir::TempDir;

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 12, 10, 0, 0).unwrap()
}

/// A point on the equator `km` east of (0, 0), `seconds` after `start_time`.
pub fn equator_point(km: f64, seconds: f64) -> TrackPoint {
    TrackPoint::new(
        0.0,
        (km / EARTH_RADIUS_KM).to_degrees(),
        start_time() + TimeDelta::milliseconds((seconds * 1000.0).round() as i64),
    )
}

/// Builds a track from `(cumulative km, elapsed seconds)` per point.
pub fn equator_track(marks: &[(f64, f64)]) -> Vec<TrackPoint> {
    marks
        .iter()
        .map(|&(km, seconds)| equator_point(km, seconds))
        .collect()
}

/// Renders `tracks[track][segment][point]` as a GPX 1.1 document.
pub fn gpx_document(tracks: &[Vec<Vec<TrackPoint>>]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <gpx version=\"1.1\" creator=\"gpx_avg_speed tests\" \
         xmlns=\"http://www.topografix.com/GPX/1/1\">\n",
    );
    for (i, segments) in tracks.iter().enumerate() {
        xml.push_str(&format!("  <trk>\n    <name>Track {}</name>\n", i + 1));
        for points in segments {
            xml.push_str("    <trkseg>\n");
            for p in points {
                xml.push_str(&format!(
                    "      <trkpt lat=\"{:.9}\" lon=\"{:.9}\"><time>{}</time></trkpt>\n",
                    p.latitude,
                    p.longitude,
                    p.time.to_rfc3339_opts(SecondsFormat::Millis, true)
                ));
            }
            xml.push_str("    </trkseg>\n");
        }
        xml.push_str("  </trk>\n");
    }
    xml.push_str("</gpx>\n");
    xml
}

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_str().unwrap().to_owned()
}
