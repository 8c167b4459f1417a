//! Great-circle and rhumb-line calculations for points on a sphere
//!
//! ```
//! use latlon::LatLon;
//!
//! let lands_end = LatLon::new(50.066389, -5.714722).unwrap();
//! let john_o_groats = LatLon::new(58.643889, -3.07).unwrap();
//!
//! assert_eq!(lands_end.distance_to(&john_o_groats), 968.9);
//! ```

extern crate cfg_if;

extern crate failure;
extern crate log;

#[cfg(feature = "rayon")]
extern crate rayon;

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

pub mod angle;
pub mod error;
pub mod format;
pub mod great_circle;
pub mod haversine;
mod parallel;
pub mod point;
pub mod rhumb;
pub mod track;

pub use crate::error::{Error, Result};
pub use crate::format::Format;
pub use crate::great_circle::DEFAULT_PRECISION;
pub use crate::point::{LatLon, Point, MEAN_EARTH_RADIUS};
