use std::f64::consts::PI;

use log::trace;

use crate::angle::{normalize_bearing, round_significant, wrap_longitude};
use crate::error::{finite, Result};
use crate::haversine::{central_angle, haversine_distance};
use crate::LatLon;

/// Significant digits of [`LatLon::distance_to`]
pub const DEFAULT_PRECISION: usize = 4;

/// `sin(α)` below this is treated as zero when looking for intersections
const PARALLEL_EPSILON: f64 = 1e-12;

impl LatLon {
    /// Great-circle distance to `point` (Haversine), rounded to four
    /// significant digits, in the unit of this point's radius
    pub fn distance_to(&self, point: &LatLon) -> f64 {
        self.distance_to_precision(point, DEFAULT_PRECISION)
    }

    /// Great-circle distance to `point` rounded to `precision` significant
    /// digits (not decimal places)
    pub fn distance_to_precision(&self, point: &LatLon, precision: usize) -> f64 {
        round_significant(haversine_distance(self, point, self.radius()), precision)
    }

    /// Initial bearing in degrees `[0, 360)` on the great circle to `point`
    pub fn bearing_to(&self, point: &LatLon) -> f64 {
        let phi1 = self.phi();
        let phi2 = point.phi();
        let delta_lambda = (point.lon() - self.lon()).to_radians();

        let y = delta_lambda.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

        normalize_bearing(y.atan2(x).to_degrees())
    }

    /// Bearing in degrees `[0, 360)` on arrival at `point`
    ///
    /// This is the reverse of the initial bearing from `point` back to this
    /// point. It only equals [`bearing_to`](#method.bearing_to) on meridians
    /// and the equator.
    pub fn final_bearing_to(&self, point: &LatLon) -> f64 {
        normalize_bearing(point.bearing_to(self) + 180.)
    }

    /// Point half-way along the great circle to `point`
    ///
    /// Both points are turned into unit vectors, summed and the sum is
    /// converted back to latitude/longitude, which has no trouble at the
    /// poles or across the antimeridian. For antipodal points the
    /// great circle is undefined and the result is `(0, lon)` of this point.
    pub fn midpoint_to(&self, point: &LatLon) -> LatLon {
        let (x1, y1, z1) = to_vector(self);
        let (x2, y2, z2) = to_vector(point);

        let (x, y, z) = (x1 + x2, y1 + y2, z1 + z2);
        let phi3 = z.atan2((x * x + y * y).sqrt());
        let lambda3 = if x == 0. && y == 0. { self.lambda() } else { y.atan2(x) };

        self.derive(phi3.to_degrees(), wrap_longitude(lambda3.to_degrees()))
    }

    /// Point reached after travelling `distance` (in the unit of this
    /// point's radius) from here along the great circle with the initial
    /// `bearing` in degrees
    pub fn destination_point(&self, bearing: f64, distance: f64) -> Result<LatLon> {
        let theta = finite("bearing", bearing)?.to_radians();
        let delta = finite("distance", distance)? / self.radius();

        let phi1 = self.phi();
        let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
        let lambda2 = self.lambda() + (theta.sin() * delta.sin() * phi1.cos())
            .atan2(delta.cos() - phi1.sin() * phi2.sin());

        Ok(self.derive(phi2.to_degrees(), wrap_longitude(lambda2.to_degrees())))
    }

    /// Point where the great circle leaving `p1` on `brng1` crosses the great
    /// circle leaving `p2` on `brng2`
    ///
    /// Returns `Ok(None)` when there is no unique intersection: the start
    /// points coincide, both paths lie on the same great circle (parallel or
    /// opposite bearings) or the intersection is ambiguous. The result lives
    /// on the sphere of `p1`.
    pub fn intersection(p1: &LatLon, brng1: f64, p2: &LatLon, brng2: f64) -> Result<Option<LatLon>> {
        let theta13 = finite("bearing", brng1)?.to_radians();
        let theta23 = finite("bearing", brng2)?.to_radians();

        let (phi1, lambda1) = (p1.phi(), p1.lambda());
        let (phi2, lambda2) = (p2.phi(), p2.lambda());

        let delta12 = central_angle(p1, p2);
        if delta12 == 0. {
            trace!("No intersection: start points coincide");
            return Ok(None);
        }

        // initial and final bearings between the two start points
        let theta_a = safe_acos((phi2.sin() - phi1.sin() * delta12.cos()) / (delta12.sin() * phi1.cos()));
        let theta_b = safe_acos((phi1.sin() - phi2.sin() * delta12.cos()) / (delta12.sin() * phi2.cos()));

        let (theta12, theta21) = if (lambda2 - lambda1).sin() > 0. {
            (theta_a, 2. * PI - theta_b)
        } else {
            (2. * PI - theta_a, theta_b)
        };

        // angles 2-1-3 and 1-2-3 of the spherical triangle
        let alpha1 = (theta13 - theta12 + PI) % (2. * PI) - PI;
        let alpha2 = (theta21 - theta23 + PI) % (2. * PI) - PI;

        let sin_alpha1 = snap_to_zero(alpha1.sin());
        let sin_alpha2 = snap_to_zero(alpha2.sin());

        if sin_alpha1 == 0. && sin_alpha2 == 0. {
            trace!("No intersection: both paths lie on the same great circle");
            return Ok(None);
        }
        if sin_alpha1 * sin_alpha2 < 0. {
            trace!("No intersection: paths diverge from each other");
            return Ok(None);
        }

        let alpha3 = safe_acos(-alpha1.cos() * alpha2.cos() + alpha1.sin() * alpha2.sin() * delta12.cos());
        let delta13 = (delta12.sin() * alpha1.sin() * alpha2.sin())
            .atan2(alpha2.cos() + alpha1.cos() * alpha3.cos());

        let phi3 = (phi1.sin() * delta13.cos() + phi1.cos() * delta13.sin() * theta13.cos()).asin();
        let delta_lambda13 = (theta13.sin() * delta13.sin() * phi1.cos())
            .atan2(delta13.cos() - phi1.sin() * phi3.sin());
        let lambda3 = lambda1 + delta_lambda13;

        Ok(Some(p1.derive(phi3.to_degrees(), wrap_longitude(lambda3.to_degrees()))))
    }
}

fn to_vector(point: &LatLon) -> (f64, f64, f64) {
    let (phi, lambda) = (point.phi(), point.lambda());
    (phi.cos() * lambda.cos(), phi.cos() * lambda.sin(), phi.sin())
}

/// `acos` that tolerates rounding slightly outside `[-1, 1]` and maps an
/// undefined (0/0) argument to zero
fn safe_acos(value: f64) -> f64 {
    if value.is_nan() { 0. } else { value.max(-1.).min(1.).acos() }
}

fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < PARALLEL_EPSILON { 0. } else { value }
}
