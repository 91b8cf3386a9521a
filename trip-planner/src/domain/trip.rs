//! Trip aggregate.
//!
//! A `Trip` is the planning document the wizard builds up field by field:
//! dates, an ordered park list, a transportation mode, and traveller
//! preferences. The derived fields (`total_duration`, `total_distance`,
//! `estimated_cost`) are pure functions of the rest and are recomputed by
//! every mutating method, so a trip obtained through this API is always
//! internally consistent.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{calendar, cost, geo};

use super::{DomainError, ParkStop};

/// How the traveller moves between parks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Road trip between parks
    Driving,
    /// Flights between parks, rental cars locally
    Flying,
}

/// Hiking difficulty preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

/// Spending-level preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    Moderate,
    Premium,
}

/// Traveller preferences collected by the wizard.
///
/// Preferences drive park suggestion and scoring upstream of this core;
/// they ride along on the trip document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub difficulty: Difficulty,
    #[serde(default)]
    pub activities: Vec<String>,
    pub budget: BudgetTier,
    pub group_size: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Moderate,
            activities: Vec::new(),
            budget: BudgetTier::Moderate,
            group_size: 2,
        }
    }
}

/// The aggregate planning document.
///
/// # Invariants
///
/// - Park ids are unique within `parks`
/// - `total_duration`, `total_distance`, and `estimated_cost` are derived
///   from dates, parks, and transportation mode, never set independently
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trip_planner::domain::{ParkStop, Trip};
///
/// let mut trip = Trip::new();
/// trip.set_dates(
///     NaiveDate::from_ymd_opt(2025, 6, 1),
///     NaiveDate::from_ymd_opt(2025, 6, 5),
/// );
/// trip.add_park(ParkStop::new("yell", "Yellowstone National Park", "Wyoming", 4).unwrap())
///     .unwrap();
///
/// assert_eq!(trip.total_duration, 5);
/// assert!(trip.estimated_cost > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Document id, assigned by the store on first save
    #[serde(default)]
    pub id: Option<String>,

    /// Id of the template this trip was built from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// First day of the trip (inclusive)
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Last day of the trip (inclusive)
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Ordered itinerary; position is visit order
    #[serde(default)]
    pub parks: Vec<ParkStop>,

    /// Missing only on raw documents from older clients; computation paths
    /// fall back to driving
    #[serde(default)]
    pub transportation_mode: Option<TransportMode>,

    /// Derived: inclusive trip length in days
    pub total_duration: i64,

    /// Derived: route distance in miles, rounded to the nearest mile
    pub total_distance: f64,

    /// Derived: estimated cost in whole dollars
    pub estimated_cost: i64,

    #[serde(default)]
    pub preferences: Preferences,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Trip {
    /// Create an empty, unsaved trip with the wizard's defaults.
    pub fn new() -> Self {
        Self {
            id: None,
            template_id: None,
            title: String::new(),
            description: String::new(),
            start_date: None,
            end_date: None,
            parks: Vec::new(),
            transportation_mode: Some(TransportMode::Driving),
            total_duration: 1,
            total_distance: 0.0,
            estimated_cost: 0,
            preferences: Preferences::default(),
            created_at: None,
            updated_at: None,
        }
    }

    /// The transportation mode to compute with.
    pub fn mode_or_default(&self) -> TransportMode {
        self.transportation_mode.unwrap_or(TransportMode::Driving)
    }

    /// Append a park to the itinerary.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a park with the same id is already in the trip.
    pub fn add_park(&mut self, park: ParkStop) -> Result<(), DomainError> {
        if self.parks.iter().any(|p| p.park_id == park.park_id) {
            return Err(DomainError::DuplicatePark(park.park_id));
        }
        self.parks.push(park);
        self.recompute_derived();
        Ok(())
    }

    /// Remove a park by id. Returns whether anything was removed.
    pub fn remove_park(&mut self, park_id: &str) -> bool {
        let before = self.parks.len();
        self.parks.retain(|p| p.park_id != park_id);
        let removed = self.parks.len() != before;
        if removed {
            self.recompute_derived();
        }
        removed
    }

    /// Replace the park order, e.g. with an optimizer result.
    ///
    /// The caller is responsible for passing a permutation of the current
    /// parks; this method only replaces the list and recomputes the
    /// derived fields.
    pub fn replace_parks(&mut self, parks: Vec<ParkStop>) {
        self.parks = parks;
        self.recompute_derived();
    }

    /// Set the trip dates. Either date may be cleared.
    pub fn set_dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.start_date = start;
        self.end_date = end;
        self.recompute_derived();
    }

    /// Set the transportation mode.
    pub fn set_transport_mode(&mut self, mode: TransportMode) {
        self.transportation_mode = Some(mode);
        self.recompute_derived();
    }

    /// Recompute the derived fields from dates, parks, and mode.
    ///
    /// Mutating methods call this; it is public so that callers that edit
    /// fields directly (e.g. after deserializing a raw document) can
    /// restore consistency.
    pub fn recompute_derived(&mut self) {
        self.total_duration = calendar::trip_duration(self.start_date, self.end_date);
        self.total_distance = geo::route_distance(&self.parks).round();
        self.estimated_cost = cost::estimate_cost(self);
    }
}

impl Default for Trip {
    fn default() -> Self {
        Self::new()
    }
}
