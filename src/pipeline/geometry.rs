//! Planar helpers over `(lng, lat)` pairs. Distances here are in degrees, not
//! metres; the camera planner only needs relative motion.

use crate::types::tour::Point;

pub fn deg2rad(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

pub fn rad2deg(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Wraps a single negative turn back into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Euclidean distance treating longitude as x and latitude as y.
pub fn planar_distance(a: Point, b: Point) -> f64 {
    (b.lng - a.lng).hypot(b.lat - a.lat)
}

/// Counter-clockwise angle of the vector `from -> to` against the +x (east)
/// axis, in degrees within `[0, 360)`.
pub fn planar_bearing(from: Point, to: Point) -> f64 {
    let radians = (to.lat - from.lat).atan2(to.lng - from.lng);
    normalize_degrees(rad2deg(radians))
}

/// Great-circle distance in kilometres.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const R: f64 = 6371.0; // Earth radius in km

    let d_lat = deg2rad(lat2 - lat1);
    let d_lon = deg2rad(lon2 - lon1);

    let a = (d_lat / 2.0).sin().powi(2)
        + deg2rad(lat1).cos() * deg2rad(lat2).cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    R * c
}
