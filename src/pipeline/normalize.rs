use chrono::{DateTime, FixedOffset};

use crate::error::ProcessError;
use crate::pipeline::locate::Locator;
use crate::types::activity::{Activity, Locality, RawActivity, RawTrackpoint, Trackpoint};

/// Builds a clean [`Activity`] from parser output.
///
/// Bad numbers never fail here: they turn into NaN and are left for the
/// trackpoint filter. The only rejection is an activity with no trackpoints.
pub fn normalize(raw: &RawActivity, locator: &dyn Locator) -> Result<Activity, ProcessError> {
    let id = raw.id.trim().to_string();
    let Some(raw_current) = raw.current.as_ref().filter(|_| !raw.trackpoints.is_empty()) else {
        return Err(ProcessError::EmptyActivity(id));
    };

    let trackpoints: Vec<Trackpoint> = raw.trackpoints.iter().map(normalize_trackpoint).collect();

    let mut current = normalize_trackpoint(raw_current);
    let first = &trackpoints[0];
    if current.lat.is_nan() {
        current.lat = first.lat;
    }
    if current.lng.is_nan() {
        current.lng = first.lng;
    }

    let start = parse_time(&id);
    let duration_mins = match (start, parse_time(&current.time)) {
        (Some(start), Some(end)) => (end - start).num_minutes() as f64,
        _ => f64::NAN,
    };
    let pace = match current.dist_miles {
        Some(miles) if miles > 0.0 => duration_mins.abs() / miles,
        _ => f64::NAN,
    };

    let locality = locator
        .locate(current.lat, current.lng)
        .unwrap_or_else(Locality::unknown);

    Ok(Activity {
        date: id.split('T').next().unwrap_or_default().to_string(),
        first_time: raw.first_time.trim().to_string(),
        id,
        start,
        trackpoints,
        current,
        duration_mins,
        pace,
        locality,
    })
}

fn normalize_trackpoint(raw: &RawTrackpoint) -> Trackpoint {
    Trackpoint {
        lat: parse_coordinate(&raw.lat),
        lng: parse_coordinate(&raw.lng),
        time: raw.time.trim().to_string(),
        alt_feet: raw.alt_feet,
        dist_miles: raw.dist_miles,
        seq: raw.seq,
    }
}

pub fn parse_coordinate(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

fn parse_time(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text.trim()).ok()
}
