//! Day-by-day itinerary expansion.
//!
//! Expands a trip's ordered parks, stay durations, and start date into a
//! chronological sequence of visit and travel entries. The output order is
//! the schedule; consumers must not re-sort it.

mod activities;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::domain::{Coordinate, ParkStop, TransportMode, Trip};
use crate::geo;

pub use activities::{DAY_ACTIVITIES, suggested_activities, travel_suggestions};

/// Driving legs longer than this many hours earn an extra calendar day
/// for an overnight stop.
pub const LONG_DRIVE_HOURS: i64 = 8;

/// Assumed average driving speed, miles per hour.
pub const DRIVING_MPH: f64 = 60.0;

/// Assumed effective flying speed including airport time, miles per hour.
pub const FLYING_MPH: f64 = 500.0;

/// Travel-hours estimate when either stop lacks coordinates.
pub const FALLBACK_TRAVEL_HOURS: i64 = 4;

/// A day spent inside one park.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitDay {
    pub date: NaiveDate,

    /// 1-based visit-day count across the whole trip, not reset per park
    pub day_number: u32,

    pub park_id: String,
    pub park_name: String,
    pub state: String,
    pub coordinates: Option<Coordinate>,

    /// 1-based day within this park's stay
    pub stay_day: u32,

    /// Length of this park's stay in days
    pub total_stay_days: u32,

    pub suggested_activities: Vec<String>,
}

/// A named end of a travel leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub name: String,
    pub state: String,
}

impl Waypoint {
    fn of(park: &ParkStop) -> Self {
        Self {
            name: park.park_name.clone(),
            state: park.state.clone(),
        }
    }
}

/// A travel day between two parks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelLeg {
    pub date: NaiveDate,
    pub from: Waypoint,
    pub to: Waypoint,
    pub mode: TransportMode,
    pub estimated_hours: i64,
    pub suggestions: Vec<String>,
}

/// One entry in the generated schedule.
///
/// Serializes with a `type` tag (`"visit"` or `"travel"`), matching the
/// exported document shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItineraryEntry {
    Visit(VisitDay),
    Travel(TravelLeg),
}

impl ItineraryEntry {
    /// Returns the calendar date of this entry.
    pub fn date(&self) -> NaiveDate {
        match self {
            ItineraryEntry::Visit(visit) => visit.date,
            ItineraryEntry::Travel(travel) => travel.date,
        }
    }

    /// Returns true if this is a park-visit day.
    pub fn is_visit(&self) -> bool {
        matches!(self, ItineraryEntry::Visit(_))
    }

    /// Returns true if this is a travel day.
    pub fn is_travel(&self) -> bool {
        matches!(self, ItineraryEntry::Travel(_))
    }

    /// Returns the visit if this is a park-visit day.
    pub fn as_visit(&self) -> Option<&VisitDay> {
        match self {
            ItineraryEntry::Visit(visit) => Some(visit),
            ItineraryEntry::Travel(_) => None,
        }
    }

    /// Returns the travel leg if this is a travel day.
    pub fn as_travel(&self) -> Option<&TravelLeg> {
        match self {
            ItineraryEntry::Visit(_) => None,
            ItineraryEntry::Travel(travel) => Some(travel),
        }
    }
}

/// Estimated travel hours between two parks in the given mode.
///
/// Flying gets a two-hour floor for airport overhead; driving a one-hour
/// floor. Legs with a coordinate-less stop fall back to
/// [`FALLBACK_TRAVEL_HOURS`].
pub fn travel_hours(from: &ParkStop, to: &ParkStop, mode: TransportMode) -> i64 {
    let (Some(a), Some(b)) = (from.coordinates, to.coordinates) else {
        return FALLBACK_TRAVEL_HOURS;
    };
    let miles = geo::haversine_miles(a, b);

    match mode {
        TransportMode::Flying => ((miles / FLYING_MPH).ceil() as i64).max(2),
        TransportMode::Driving => ((miles / DRIVING_MPH).ceil() as i64).max(1),
    }
}

/// Expand a trip into its day-by-day schedule.
///
/// Walks the parks in order from the start date: each park contributes one
/// visit entry per stay day, and each consecutive pair contributes one
/// travel entry. A driving leg estimated over [`LONG_DRIVE_HOURS`]
/// advances the calendar by two days instead of one, modelling an
/// overnight stop. Returns an empty schedule when the trip has no parks or
/// no start date.
pub fn generate_itinerary(trip: &Trip) -> Vec<ItineraryEntry> {
    let Some(start) = trip.start_date else {
        return Vec::new();
    };
    if trip.parks.is_empty() {
        return Vec::new();
    }

    let mode = trip.mode_or_default();
    let mut entries = Vec::new();
    let mut current = start;
    let mut visit_days = 0u32;

    for (index, park) in trip.parks.iter().enumerate() {
        let stay = park.stay_duration.max(1);

        for day in 1..=stay {
            visit_days += 1;
            entries.push(ItineraryEntry::Visit(VisitDay {
                date: current,
                day_number: visit_days,
                park_id: park.park_id.clone(),
                park_name: park.park_name.clone(),
                state: park.state.clone(),
                coordinates: park.coordinates,
                stay_day: day,
                total_stay_days: stay,
                suggested_activities: suggested_activities(day),
            }));
            current = next_day(current);
        }

        if let Some(next) = trip.parks.get(index + 1) {
            let hours = travel_hours(park, next, mode);
            entries.push(ItineraryEntry::Travel(TravelLeg {
                date: current,
                from: Waypoint::of(park),
                to: Waypoint::of(next),
                mode,
                estimated_hours: hours,
                suggestions: travel_suggestions(mode),
            }));

            // Overnight stop partway for long drives
            if mode == TransportMode::Driving && hours > LONG_DRIVE_HOURS {
                current = next_day(current);
            }
            current = next_day(current);
        }
    }

    entries
}

fn next_day(date: NaiveDate) -> NaiveDate {
    // Only unrepresentable at the far end of chrono's date range
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}
