use failure::Fail;

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum Error {
    /// A numeric argument was NaN or infinite (or, for a radius, not positive)
    #[fail(display = "invalid {}: {}", name, value)]
    InvalidInput { name: &'static str, value: f64 },

    #[fail(display = "unknown format {:?} (expected \"d\", \"dm\" or \"dms\")", _0)]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidInput { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_passes_numbers_through() {
        assert_eq!(finite("bearing", -12.5), Ok(-12.5));
    }

    #[test]
    fn finite_rejects_nan_and_infinity() {
        assert!(finite("distance", std::f64::NAN).is_err());
        assert_eq!(
            finite("distance", std::f64::INFINITY),
            Err(Error::InvalidInput { name: "distance", value: std::f64::INFINITY })
        );
    }

    #[test]
    fn display() {
        let err = Error::InvalidInput { name: "latitude", value: std::f64::NEG_INFINITY };
        assert_eq!(err.to_string(), "invalid latitude: -inf");

        let err = Error::UnknownFormat("dd".into());
        assert_eq!(err.to_string(), "unknown format \"dd\" (expected \"d\", \"dm\" or \"dms\")");
    }
}
