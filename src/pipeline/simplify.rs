use geo::{LineString, Simplify};

use crate::types::activity::Trackpoint;
use crate::types::tour::Point;

/// Map path of the trackpoints. Points with a non-finite axis stay in storage
/// but have no place on the map, so they are left out here.
pub fn path_from_trackpoints(points: &[Trackpoint]) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.lng, p.lat))
        .filter(Point::is_finite)
        .collect()
}

/// Douglas-Peucker reduction in `(lng, lat)` space.
///
/// Output is a subsequence of the input that keeps both endpoints. Paths of
/// two points or fewer come back as-is. Non-finite points are dropped
/// first.
pub fn simplify_path(path: &[Point], tolerance: f64) -> Vec<Point> {
    if !path.iter().all(Point::is_finite) {
        let finite: Vec<Point> = path.iter().copied().filter(Point::is_finite).collect();
        return simplify_path(&finite, tolerance);
    }
    if path.len() <= 2 {
        return path.to_vec();
    }

    let line: LineString<f64> = path.iter().map(|p| geo::Coord::from(*p)).collect();
    line.simplify(&tolerance)
        .into_inner()
        .into_iter()
        .map(Point::from)
        .collect()
}
