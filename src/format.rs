use std::fmt;
use std::str::FromStr;

use crate::angle::round_decimal;
use crate::error::Error;

/// Textual layout of an angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `051.4779°`
    Degrees,
    /// `051°28.68′`
    DegreesMinutes,
    /// `051°28′40.8000″`
    DegreesMinutesSeconds,
}

impl Format {
    /// Decimal places used when the caller doesn't ask for a specific number
    pub fn default_dp(self) -> usize {
        match self {
            Format::Degrees => 0,
            Format::DegreesMinutes => 2,
            Format::DegreesMinutesSeconds => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Degrees => "d",
            Format::DegreesMinutes => "dm",
            Format::DegreesMinutesSeconds => "dms",
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::DegreesMinutesSeconds
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" => Ok(Format::Degrees),
            "dm" => Ok(Format::DegreesMinutes),
            "dms" => Ok(Format::DegreesMinutesSeconds),
            _ => Err(Error::UnknownFormat(s.to_owned())),
        }
    }
}

/// Renders the magnitude of `degrees` without hemisphere, padding the
/// whole degrees to `width` digits
fn to_dms(degrees: f64, format: Format, dp: usize, width: usize) -> String {
    let degrees = degrees.abs();

    match format {
        Format::Degrees => {
            let d = round_decimal(degrees, dp);
            format!("{:0w$.p$}°", d, w = padded(width, dp), p = dp)
        }
        Format::DegreesMinutes => {
            let total = round_decimal(degrees * 60., dp);
            let d = (total / 60.).floor();
            let m = total % 60.;
            format!("{:0w$}°{:0mw$.p$}′", d as u64, m, w = width, mw = padded(2, dp), p = dp)
        }
        Format::DegreesMinutesSeconds => {
            let total = round_decimal(degrees * 3600., dp);
            let d = (total / 3600.).floor();
            let m = (total / 60.).floor() % 60.;
            let s = total % 60.;
            format!(
                "{:0w$}°{:02}′{:0sw$.p$}″",
                d as u64,
                m as u64,
                s,
                w = width,
                sw = padded(2, dp),
                p = dp
            )
        }
    }
}

fn padded(digits: usize, dp: usize) -> usize {
    if dp == 0 { digits } else { digits + 1 + dp }
}

/// Formats a latitude with a `N`/`S` suffix, e.g. `51°28′40.12″N`
pub fn to_lat(degrees: f64, format: Format, dp: usize) -> String {
    let hemisphere = if degrees < 0. { 'S' } else { 'N' };
    format!("{}{}", to_dms(degrees, format, dp, 2), hemisphere)
}

/// Formats a longitude with an `E`/`W` suffix, e.g. `000°00′05.31″W`
pub fn to_lon(degrees: f64, format: Format, dp: usize) -> String {
    let hemisphere = if degrees < 0. { 'W' } else { 'E' };
    format!("{}{}", to_dms(degrees, format, dp, 3), hemisphere)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("d".parse::<Format>(), Ok(Format::Degrees));
        assert_eq!("dm".parse::<Format>(), Ok(Format::DegreesMinutes));
        assert_eq!("dms".parse::<Format>(), Ok(Format::DegreesMinutesSeconds));
        assert_eq!("x".parse::<Format>(), Err(Error::UnknownFormat("x".into())));
    }

    #[test]
    fn default_precision_grows_with_granularity() {
        assert_eq!(Format::Degrees.default_dp(), 0);
        assert_eq!(Format::DegreesMinutes.default_dp(), 2);
        assert_eq!(Format::DegreesMinutesSeconds.default_dp(), 4);
    }

    #[test]
    fn degrees() {
        assert_eq!(to_lat(51.4779, Format::Degrees, 0), "51°N");
        assert_eq!(to_lat(51.4779, Format::Degrees, 2), "51.48°N");
        assert_eq!(to_lat(-5.5, Format::Degrees, 1), "05.5°S");
        assert_eq!(to_lon(-0.0015, Format::Degrees, 4), "000.0015°W");
        assert_eq!(to_lon(151.2, Format::Degrees, 0), "151°E");
    }

    #[test]
    fn degrees_minutes() {
        assert_eq!(to_lat(51.4779, Format::DegreesMinutes, 2), "51°28.67′N");
        assert_eq!(to_lon(-3.07, Format::DegreesMinutes, 0), "003°04′W");
    }

    #[test]
    fn degrees_minutes_seconds() {
        assert_eq!(to_lat(51.5, Format::DegreesMinutesSeconds, 2), "51°30′00.00″N");
        assert_eq!(to_lon(-0.13, Format::DegreesMinutesSeconds, 0), "000°07′48″W");
        assert_eq!(to_lat(-33.8568, Format::DegreesMinutesSeconds, 0), "33°51′24″S");
    }

    #[test]
    fn rounding_carries_into_the_next_unit() {
        assert_eq!(to_lat(50.99999999, Format::DegreesMinutesSeconds, 2), "51°00′00.00″N");
        assert_eq!(to_lon(9.9999, Format::DegreesMinutes, 1), "010°00.0′E");
    }
}
