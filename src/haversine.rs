use crate::Point;

/// Angular distance in radians between two points, using the Haversine
/// formula
///
/// The intermediate haversine value is clamped to `[0, 1]` so rounding
/// noise on (nearly) antipodal points can't produce a NaN.
pub fn central_angle(fix1: &dyn Point, fix2: &dyn Point) -> f64 {
    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    let delta_phi = (fix2.latitude() - fix1.latitude()).to_radians();
    let delta_lambda = (fix2.longitude() - fix1.longitude()).to_radians();

    let a = (delta_phi / 2.).sin() * (delta_phi / 2.).sin() +
        phi1.cos() * phi2.cos() *
            (delta_lambda / 2.).sin() * (delta_lambda / 2.).sin();
    let a = a.max(0.).min(1.);

    2. * a.sqrt().atan2((1. - a).sqrt())
}

/// Great-circle distance between two points on a sphere of the given
/// `radius`, in the unit of `radius`
pub fn haversine_distance(fix1: &dyn Point, fix2: &dyn Point, radius: f64) -> f64 {
    radius * central_angle(fix1, fix2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LatLon;
    use std::f64::consts::PI;

    #[test]
    fn reference_distance() {
        // Land's End to John o' Groats
        let p1 = LatLon::new(50.066389, -5.714722).unwrap();
        let p2 = LatLon::new(58.643889, -3.07).unwrap();
        assert_approx_eq!(haversine_distance(&p1, &p2, 6371.), 968.85, 0.01);

        let p1 = LatLon::new(50., 0.).unwrap();
        let p2 = LatLon::new(58.64, -3.07).unwrap();
        assert_approx_eq!(haversine_distance(&p1, &p2, 6371.), 980.87, 0.01);
    }

    #[test]
    fn coincident_points() {
        let p = LatLon::new(12.3, 45.6).unwrap();
        assert_eq!(central_angle(&p, &p), 0.);
    }

    #[test]
    fn antipodal_points() {
        let p1 = LatLon::new(30., 20.).unwrap();
        let p2 = LatLon::new(-30., -160.).unwrap();
        assert_approx_eq!(central_angle(&p1, &p2), PI);
    }

    #[test]
    fn pole_to_pole() {
        let p1 = LatLon::new(90., 0.).unwrap();
        let p2 = LatLon::new(-90., 0.).unwrap();
        assert_approx_eq!(haversine_distance(&p1, &p2, 1.), PI);
    }
}
