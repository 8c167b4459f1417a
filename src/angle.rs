use std::f64::consts::PI;

/// Reduces a bearing in degrees to the range `[0, 360)`
pub fn normalize_bearing(degrees: f64) -> f64 {
    ((degrees % 360.) + 360.) % 360.
}

/// Reduces a longitude in degrees to the range `(-180, 180]`
pub fn wrap_longitude(degrees: f64) -> f64 {
    let wrapped = (((degrees + 180.) % 360.) + 360.) % 360. - 180.;
    if wrapped == -180. { 180. } else { wrapped }
}

/// Reduces a longitude difference in radians to `(-π, π]`, i.e. the
/// shorter way around the globe
pub fn shortest_delta(radians: f64) -> f64 {
    if radians > PI {
        radians - 2. * PI
    } else if radians <= -PI {
        radians + 2. * PI
    } else {
        radians
    }
}

/// Significant digits an `f64` can hold
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Mercator projected latitude `ln(tan(π/4 + φ/2))` of a latitude in radians
///
/// Evaluated on `|φ|` (ψ is odd) and capped at the poles, so both poles map
/// to the same large but finite value.
pub fn mercator(phi: f64) -> f64 {
    let psi = (PI / 4. + phi.abs().min(PI / 2.) / 2.).tan().ln();
    if phi < 0. { -psi } else { psi }
}

/// Rounds `value` to `digits` significant digits, clamped to
/// `1..=MAX_SIGNIFICANT_DIGITS`
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0. || !value.is_finite() {
        return value;
    }

    let digits = digits.max(1).min(MAX_SIGNIFICANT_DIGITS) as i32;
    let magnitude = value.abs().log10().floor() as i32;
    let exponent = digits - 1 - magnitude;

    // scale by multiplying or dividing so the factor itself stays finite
    let factor = 10f64.powi(exponent.abs());
    if !factor.is_finite() {
        return value;
    }

    if exponent >= 0 {
        (value * factor).round() / factor
    } else {
        (value / factor).round() * factor
    }
}

/// Rounds `value` to `dp` decimal places
pub fn round_decimal(value: f64, dp: usize) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}
