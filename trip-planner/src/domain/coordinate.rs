//! Geographic coordinate type.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Error returned when parsing or constructing an invalid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

impl InvalidCoordinate {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A validated geographic coordinate in decimal degrees.
///
/// Park documents carry coordinates either as an object `{lat, lng}` or as
/// a legacy `"lat,lng"` string. Both deserialize to this single type, so
/// everything downstream of the ingestion boundary sees one normalized
/// form. Out-of-range values are rejected at construction.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Coordinate;
///
/// let c = Coordinate::new(44.6, -110.5).unwrap();
/// assert_eq!(c.lat, 44.6);
///
/// // Legacy string form
/// let c = Coordinate::parse("44.6, -110.5").unwrap();
/// assert_eq!(c.lng, -110.5);
///
/// // Out of range is rejected
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    /// Latitude in degrees, -90 to 90.
    pub lat: f64,
    /// Longitude in degrees, -180 to 180.
    pub lng: f64,
}

impl Coordinate {
    /// Construct a coordinate, validating degree ranges.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either component is non-finite or out of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinate::new("components must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate::new("latitude must be within -90..=90"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate::new("longitude must be within -180..=180"));
        }
        Ok(Self { lat, lng })
    }

    /// Parse the legacy `"lat,lng"` string form.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not two comma-separated decimal
    /// numbers, or the values are out of range.
    pub fn parse(s: &str) -> Result<Self, InvalidCoordinate> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| InvalidCoordinate::new("expected \"lat,lng\""))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| InvalidCoordinate::new("latitude is not a number"))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| InvalidCoordinate::new("longitude is not a number"))?;
        Self::new(lat, lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Pair { lat: f64, lng: f64 },
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Pair { lat, lng } => Coordinate::new(lat, lng).map_err(de::Error::custom),
            Raw::Text(s) => Coordinate::parse(&s).map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let c = Coordinate::new(36.06, -112.14).unwrap();
        assert_eq!(c.lat, 36.06);
        assert_eq!(c.lng, -112.14);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Coordinate::new(90.1, 0.0).is_err());
        assert!(Coordinate::new(-90.1, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.1).is_err());
        assert!(Coordinate::new(0.0, -180.1).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn new_accepts_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn parse_valid() {
        let c = Coordinate::parse("44.6, -110.5").unwrap();
        assert_eq!(c.lat, 44.6);
        assert_eq!(c.lng, -110.5);

        // No space after the comma
        let c = Coordinate::parse("44.6,-110.5").unwrap();
        assert_eq!(c.lng, -110.5);
    }

    #[test]
    fn parse_invalid() {
        assert!(Coordinate::parse("").is_err());
        assert!(Coordinate::parse("44.6").is_err());
        assert!(Coordinate::parse("north,west").is_err());
        assert!(Coordinate::parse("95.0,-110.5").is_err());
    }

    #[test]
    fn deserialize_object_form() {
        let c: Coordinate = serde_json::from_str(r#"{"lat": 44.6, "lng": -110.5}"#).unwrap();
        assert_eq!(c, Coordinate::new(44.6, -110.5).unwrap());
    }

    #[test]
    fn deserialize_string_form() {
        let c: Coordinate = serde_json::from_str(r#""44.6,-110.5""#).unwrap();
        assert_eq!(c, Coordinate::new(44.6, -110.5).unwrap());
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let r: Result<Coordinate, _> = serde_json::from_str(r#"{"lat": 95.0, "lng": 0.0}"#);
        assert!(r.is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let c = Coordinate::new(44.6, -110.5).unwrap();
        assert_eq!(Coordinate::parse(&c.to_string()).unwrap(), c);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range pair constructs successfully
        #[test]
        fn in_range_always_constructs(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            prop_assert!(Coordinate::new(lat, lng).is_ok());
        }

        /// Display then parse returns the original
        #[test]
        fn display_parse_roundtrip(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let c = Coordinate::new(lat, lng).unwrap();
            prop_assert_eq!(Coordinate::parse(&c.to_string()).unwrap(), c);
        }

        /// Out-of-range latitude is always rejected
        #[test]
        fn out_of_range_lat_rejected(lat in 90.0f64..1000.0, lng in -180.0f64..=180.0) {
            prop_assume!(lat > 90.0);
            prop_assert!(Coordinate::new(lat, lng).is_err());
        }
    }
}
