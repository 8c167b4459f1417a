use std::fmt;

use crate::error::{finite, Error, Result};
use crate::format::{to_lat, to_lon, Format};

/// Mean radius of the Earth in kilometers
pub const MEAN_EARTH_RADIUS: f64 = 6371.;

/// Anything with a position in signed decimal degrees
pub trait Point: Sync {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

/// An immutable point on the surface of a sphere
///
/// Latitude and longitude are stored in signed decimal degrees exactly as
/// given; they are not clamped or wrapped. Distances computed from a
/// `LatLon` are in the unit of its `radius` (kilometers by default).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    lat: f64,
    lon: f64,
    radius: f64,
}

impl LatLon {
    /// Creates a point on a sphere with the mean Earth radius
    pub fn new(lat: f64, lon: f64) -> Result<LatLon> {
        LatLon::with_radius(lat, lon, MEAN_EARTH_RADIUS)
    }

    pub fn with_radius(lat: f64, lon: f64, radius: f64) -> Result<LatLon> {
        let lat = finite("latitude", lat)?;
        let lon = finite("longitude", lon)?;
        let radius = finite("radius", radius)?;
        if radius <= 0. {
            return Err(Error::InvalidInput { name: "radius", value: radius });
        }

        Ok(LatLon { lat, lon, radius })
    }

    /// Builds a point from already validated numbers on the same sphere
    /// as `self`
    pub(crate) fn derive(&self, lat: f64, lon: f64) -> LatLon {
        LatLon { lat, lon, radius: self.radius }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Latitude as text, e.g. `51°28′40.1200″N`
    ///
    /// `dp` defaults to [`Format::default_dp`].
    pub fn lat_formatted(&self, format: Format, dp: Option<usize>) -> String {
        to_lat(self.lat, format, dp.unwrap_or_else(|| format.default_dp()))
    }

    /// Longitude as text, e.g. `000°00′05.3100″W`
    pub fn lon_formatted(&self, format: Format, dp: Option<usize>) -> String {
        to_lon(self.lon, format, dp.unwrap_or_else(|| format.default_dp()))
    }

    /// `"{lat}, {lon}"` with both coordinates formatted the same way
    pub fn to_string_formatted(&self, format: Format, dp: Option<usize>) -> String {
        format!("{}, {}", self.lat_formatted(format, dp), self.lon_formatted(format, dp))
    }

    pub(crate) fn phi(&self) -> f64 {
        self.lat.to_radians()
    }

    pub(crate) fn lambda(&self) -> f64 {
        self.lon.to_radians()
    }
}

impl Point for LatLon {
    fn latitude(&self) -> f64 {
        self.lat
    }
    fn longitude(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_formatted(Format::default(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_values_unchanged() {
        let p = LatLon::new(95., -200.).unwrap();
        assert_eq!(p.lat(), 95.);
        assert_eq!(p.lon(), -200.);
        assert_eq!(p.radius(), MEAN_EARTH_RADIUS);

        let p = LatLon::with_radius(1., 2., 3958.8).unwrap();
        assert_eq!(p.radius(), 3958.8);
    }

    #[test]
    fn rejects_non_finite_input() {
        match LatLon::new(std::f64::NAN, 0.) {
            Err(Error::InvalidInput { name, value }) => {
                assert_eq!(name, "latitude");
                assert!(value.is_nan());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_longitude_and_radius() {
        assert!(LatLon::new(0., std::f64::INFINITY).is_err());
        assert!(LatLon::with_radius(0., 0., std::f64::NAN).is_err());
        assert_eq!(
            LatLon::with_radius(0., 0., 0.).unwrap_err(),
            Error::InvalidInput { name: "radius", value: 0. }
        );
        assert!(LatLon::with_radius(0., 0., -1.).is_err());
    }

    #[test]
    fn formatted_accessors() {
        let p = LatLon::new(51.5, -0.13).unwrap();
        assert_eq!(p.lat_formatted(Format::DegreesMinutesSeconds, Some(2)), "51°30′00.00″N");
        assert_eq!(p.lon_formatted(Format::Degrees, None), "000°W");
        assert_eq!(p.lon_formatted(Format::DegreesMinutes, None), "000°07.80′W");
        assert_eq!(
            p.to_string_formatted(Format::Degrees, Some(2)),
            "51.50°N, 000.13°W"
        );
    }

    #[test]
    fn display_uses_dms() {
        let p = LatLon::new(-33.8568, 151.2153).unwrap();
        assert_eq!(p.to_string(), "33°51′24.4800″S, 151°12′55.0800″E");
    }
}
