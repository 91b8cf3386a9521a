//! Park stop type.
//!
//! A `ParkStop` is one entry in a trip's itinerary. The position of a stop
//! in `Trip::parks` *is* its visit order; there is no separate ordering
//! field.

use serde::{Deserialize, Deserializer, Serialize};

use crate::calendar::DEFAULT_STAY_DAYS;

use super::{Coordinate, DomainError};

/// One park entry within a trip's ordered itinerary.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::{Coordinate, ParkStop};
///
/// let park = ParkStop::new("yell", "Yellowstone National Park", "Wyoming", 4)
///     .unwrap()
///     .with_coordinates(Coordinate::new(44.6, -110.5).unwrap());
/// assert_eq!(park.stay_duration, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkStop {
    /// Opaque park identifier, unique within a trip
    pub park_id: String,

    /// Display name
    pub park_name: String,

    /// US state the park is in (display string)
    pub state: String,

    /// Location, if known. Stops without coordinates still participate in
    /// routing; their distance contributions are zero.
    #[serde(default)]
    pub coordinates: Option<Coordinate>,

    /// Planned stay in whole days, at least 1. Raw documents carrying a
    /// zero stay normalize to [`DEFAULT_STAY_DAYS`] at the boundary.
    #[serde(deserialize_with = "stay_duration_or_default")]
    pub stay_duration: u32,

    /// Preference-match relevance score, 0-100, computed upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,

    /// Park description, used for stay-length suggestions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParkStop {
    /// Construct a park stop, validating the stay duration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `stay_duration` is zero.
    pub fn new(
        park_id: impl Into<String>,
        park_name: impl Into<String>,
        state: impl Into<String>,
        stay_duration: u32,
    ) -> Result<Self, DomainError> {
        if stay_duration == 0 {
            return Err(DomainError::InvalidStayDuration);
        }
        Ok(Self {
            park_id: park_id.into(),
            park_name: park_name.into(),
            state: state.into(),
            coordinates: None,
            stay_duration,
            score: None,
            description: None,
        })
    }

    /// Set the park's location.
    pub fn with_coordinates(mut self, coordinates: Coordinate) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Set the park's description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the preference-match score.
    pub fn with_score(mut self, score: u8) -> Self {
        self.score = Some(score);
        self
    }
}

fn stay_duration_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let days = u32::deserialize(deserializer)?;
    Ok(if days == 0 { DEFAULT_STAY_DAYS } else { days })
}
