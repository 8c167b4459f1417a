use std::f64::consts::PI;

use log::trace;

use crate::angle::{mercator, normalize_bearing, shortest_delta, wrap_longitude};
use crate::error::{finite, Result};
use crate::{LatLon, Point};

/// Below this projected latitude difference a rhumb line is treated as
/// running due east/west
const EAST_WEST_EPSILON: f64 = 1e-12;

/// Latitude changes (in radians) below this are dropped on destination
/// lookups; `1e-10` is well below a millimetre on the Earth
const LATITUDE_NOISE: f64 = 1e-10;

fn at_pole(phi: f64) -> bool {
    phi.cos().abs() < EAST_WEST_EPSILON
}

fn stretch(delta_phi: f64, phi1: f64, phi2: f64) -> f64 {
    if at_pole(phi1) || at_pole(phi2) {
        trace!("Rhumb line touches a pole, longitude difference doesn't count");
        return 0.;
    }

    let delta_psi = mercator(phi2) - mercator(phi1);
    if delta_psi.abs() > EAST_WEST_EPSILON {
        delta_phi / delta_psi
    } else {
        trace!("East-west rhumb line, using cos(φ1) as stretch factor");
        phi1.cos()
    }
}

/// Angular length in radians of the rhumb line between two points, going
/// the shorter way around the globe
pub fn rhumb_central_angle(fix1: &dyn Point, fix2: &dyn Point) -> f64 {
    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    let delta_phi = phi2 - phi1;
    let delta_lambda = shortest_delta((fix2.longitude() - fix1.longitude()).to_radians());

    let q = stretch(delta_phi, phi1, phi2);

    (delta_phi * delta_phi + q * q * delta_lambda * delta_lambda).sqrt()
}

impl LatLon {
    /// Distance to `point` along a line of constant bearing, in the unit of
    /// this point's radius
    ///
    /// Never shorter than the great-circle [`distance_to`](#method.distance_to).
    pub fn rhumb_distance_to(&self, point: &LatLon) -> f64 {
        rhumb_central_angle(self, point) * self.radius()
    }

    /// Constant bearing in degrees `[0, 360)` of the rhumb line to `point`
    pub fn rhumb_bearing_to(&self, point: &LatLon) -> f64 {
        let delta_lambda = shortest_delta((point.lon() - self.lon()).to_radians());
        let delta_psi = mercator(point.phi()) - mercator(self.phi());

        normalize_bearing(delta_lambda.atan2(delta_psi).to_degrees())
    }

    /// Point reached after travelling `distance` from here on the constant
    /// `bearing` in degrees
    pub fn rhumb_destination_point(&self, bearing: f64, distance: f64) -> Result<LatLon> {
        let theta = finite("bearing", bearing)?.to_radians();
        let delta = finite("distance", distance)? / self.radius();

        let phi1 = self.phi();
        let mut delta_phi = delta * theta.cos();
        if delta_phi.abs() < LATITUDE_NOISE {
            delta_phi = 0.;
        }

        let mut phi2 = phi1 + delta_phi;
        if phi2.abs() > PI / 2. {
            trace!("Rhumb line passes over a pole, folding latitude back");
            phi2 = if phi2 > 0. { PI - phi2 } else { -PI - phi2 };
        }

        let q = stretch(delta_phi, phi1, phi2);
        let lambda2 = if q == 0. {
            self.lambda()
        } else {
            self.lambda() + delta * theta.sin() / q
        };

        Ok(self.derive(phi2.to_degrees(), wrap_longitude(lambda2.to_degrees())))
    }

    /// Point half-way along the rhumb line to `point`
    ///
    /// The latitude is the mean of both latitudes, the longitude is
    /// interpolated on the Mercator projection. This differs from
    /// [`midpoint_to`](#method.midpoint_to) except on meridians and the equator.
    pub fn rhumb_midpoint_to(&self, point: &LatLon) -> LatLon {
        let (phi1, phi2) = (self.phi(), point.phi());
        let lambda1 = self.lambda();
        // shorter way around, possibly leaving (-π, π]
        let lambda2 = lambda1 + shortest_delta(point.lambda() - lambda1);

        let phi3 = (phi1 + phi2) / 2.;
        let psi1 = mercator(phi1);
        let psi2 = mercator(phi2);
        let psi3 = mercator(phi3);

        let delta_psi = psi2 - psi1;
        let lambda3 = ((lambda2 - lambda1) * psi3 + lambda1 * psi2 - lambda2 * psi1) / delta_psi;
        let lambda3 = if delta_psi.abs() > EAST_WEST_EPSILON && lambda3.is_finite() {
            lambda3
        } else {
            trace!("East-west rhumb line, midpoint is the mean longitude");
            (lambda1 + lambda2) / 2.
        };

        self.derive(phi3.to_degrees(), wrap_longitude(lambda3.to_degrees()))
    }
}
