use crate::types::activity::Trackpoint;

/// Keeps trackpoints with at least one numeric coordinate, in order.
pub fn filter_trackpoints(points: &[Trackpoint]) -> Vec<Trackpoint> {
    points.iter().filter(|p| p.has_valid_geo()).cloned().collect()
}
