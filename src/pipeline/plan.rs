use crate::pipeline::geometry::{normalize_degrees, planar_bearing, planar_distance};
use crate::types::tour::{CameraMove, Point, TourOptions};

pub const FALLBACK_HEADING: u16 = 0;
pub const FALLBACK_DURATION: f64 = 0.5;

/// One camera move per vertex, each aimed from the previous vertex.
///
/// The first vertex is paired with itself, so its move always carries the
/// fallback heading and duration.
pub fn plan_camera(path: &[Point], options: &TourOptions) -> Vec<CameraMove> {
    let Some(&first) = path.first() else {
        return Vec::new();
    };

    let mut prev = first;
    path.iter()
        .map(|&next| {
            let (heading, duration) = if is_degenerate(prev, next) {
                (FALLBACK_HEADING, FALLBACK_DURATION)
            } else {
                (
                    heading(prev, next).unwrap_or(FALLBACK_HEADING),
                    duration(prev, next, options).unwrap_or(FALLBACK_DURATION),
                )
            };
            prev = next;
            CameraMove {
                heading,
                duration,
                longitude: next.lng,
                latitude: next.lat,
                tilt: options.tilt,
                range: options.range,
            }
        })
        .collect()
}

fn is_degenerate(prev: Point, next: Point) -> bool {
    let distance = planar_distance(prev, next);
    !distance.is_finite() || distance == 0.0
}

/// Compass heading for travel from `prev` to `next`, truncated to whole
/// degrees. `None` when the angle is not a number.
pub fn heading(prev: Point, next: Point) -> Option<u16> {
    let bearing = planar_bearing(prev, next);
    let mapped = normalize_degrees(90.0 - bearing).trunc();
    if mapped.is_nan() {
        return None;
    }
    Some((mapped as u16) % 360)
}

/// Seconds the camera spends on a leg, never below `options.min_duration`.
/// `None` when the distance is not a number or the speed is not positive.
pub fn duration(prev: Point, next: Point, options: &TourOptions) -> Option<f64> {
    if options.camera_speed <= 0.0 {
        return None;
    }
    let seconds = planar_distance(prev, next) / options.camera_speed;
    if seconds.is_nan() {
        return None;
    }
    Some(seconds.max(options.min_duration))
}
