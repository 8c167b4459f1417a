use log::debug;

use crate::haversine::haversine_distance;
use crate::parallel::*;
use crate::rhumb::rhumb_central_angle;
use crate::Point;

/// Total great-circle length of the track through `points`, in the unit of
/// `radius`
///
/// Legs are summed unrounded. Tracks with fewer than two points have no
/// length.
pub fn track_distance<T: Point>(points: &[T], radius: f64) -> f64 {
    debug!("Calculating great-circle length of {} track points", points.len());

    opt_par_windows(points, 2)
        .map(|leg| haversine_distance(&leg[0], &leg[1], radius))
        .sum()
}

/// Total length of the track through `points` when every leg is flown on a
/// constant bearing, in the unit of `radius`
pub fn rhumb_track_distance<T: Point>(points: &[T], radius: f64) -> f64 {
    debug!("Calculating rhumb-line length of {} track points", points.len());

    opt_par_windows(points, 2)
        .map(|leg| rhumb_central_angle(&leg[0], &leg[1]) * radius)
        .sum()
}
