//! Trip validation.
//!
//! Business-rule validation of a whole trip before it is handed to the
//! store. Failures are data, not errors: every applicable rule is
//! collected into a [`ValidationReport`] keyed by field, which the UI
//! renders next to the offending inputs. Nothing here mutates the trip.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::calendar;
use crate::domain::Trip;

/// Longest allowed trip, in days.
pub const MAX_TRIP_DAYS: i64 = 180;

/// Most parks allowed on one trip.
pub const MAX_PARKS: usize = 20;

/// Slack allowed between total stay days and the trip length, covering
/// travel days between parks.
pub const STAY_SLACK_DAYS: i64 = 5;

/// A trip field a validation message can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TripField {
    Title,
    StartDate,
    EndDate,
    Parks,
    TransportationMode,
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TripField::Title => "title",
            TripField::StartDate => "startDate",
            TripField::EndDate => "endDate",
            TripField::Parks => "parks",
            TripField::TransportationMode => "transportationMode",
        };
        f.write_str(name)
    }
}

/// The outcome of validating a trip: a message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: BTreeMap<TripField, String>,
}

impl ValidationReport {
    /// True when no rule failed; the trip may be saved.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message attached to a field, if any.
    pub fn error(&self, field: TripField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    fn flag(&mut self, field: TripField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

/// Validate a trip against a given "today".
///
/// Rules are independent; every applicable failure is reported. `today`
/// is explicit so callers and tests control the clock; see
/// [`validate_trip_now`] for the wall-clock convenience.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trip_planner::domain::Trip;
/// use trip_planner::validate::{TripField, validate_trip};
///
/// let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let report = validate_trip(&Trip::new(), today);
/// assert!(!report.is_valid());
/// assert!(report.error(TripField::Title).is_some());
/// ```
pub fn validate_trip(trip: &Trip, today: NaiveDate) -> ValidationReport {
    let mut report = ValidationReport::default();

    if trip.title.trim().is_empty() {
        report.flag(TripField::Title, "Trip title is required");
    }

    if trip.start_date.is_none() {
        report.flag(TripField::StartDate, "Start date is required");
    }
    if trip.end_date.is_none() {
        report.flag(TripField::EndDate, "End date is required");
    }

    if let (Some(start), Some(end)) = (trip.start_date, trip.end_date) {
        if start >= end {
            report.flag(TripField::EndDate, "End date must be after start date");
        }
        if start < today {
            report.flag(TripField::StartDate, "Start date cannot be in the past");
        }
        if calendar::trip_duration(trip.start_date, trip.end_date) > MAX_TRIP_DAYS {
            report.flag(
                TripField::EndDate,
                format!("Trip cannot be longer than {MAX_TRIP_DAYS} days"),
            );
        }
    }

    if trip.parks.is_empty() {
        report.flag(TripField::Parks, "Please select at least one park");
    } else if trip.parks.len() > MAX_PARKS {
        report.flag(
            TripField::Parks,
            format!("Maximum {MAX_PARKS} parks allowed per trip"),
        );
    }

    if trip.transportation_mode.is_none() {
        report.flag(
            TripField::TransportationMode,
            "Please select a transportation method",
        );
    }

    if !trip.parks.is_empty() {
        let total_stay: i64 = trip.parks.iter().map(|p| i64::from(p.stay_duration)).sum();
        let duration = calendar::trip_duration(trip.start_date, trip.end_date);
        if total_stay > duration + STAY_SLACK_DAYS {
            report.flag(TripField::Parks, "Total park stay days exceed trip duration");
        }
    }

    report
}

/// Validate a trip against the local calendar date.
pub fn validate_trip_now(trip: &Trip) -> ValidationReport {
    validate_trip(trip, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParkStop, TransportMode};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn park(id: &str, stay: u32) -> ParkStop {
        ParkStop::new(id, format!("{id} National Park"), "Wyoming", stay).unwrap()
    }

    fn valid_trip() -> Trip {
        let mut trip = Trip::new();
        trip.title = "Wyoming loop".into();
        trip.set_dates(
            NaiveDate::from_ymd_opt(2025, 6, 1),
            NaiveDate::from_ymd_opt(2025, 6, 5),
        );
        trip.add_park(park("yell", 4)).unwrap();
        trip
    }

    #[test]
    fn valid_trip_passes() {
        let report = validate_trip(&valid_trip(), today());
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn missing_title_is_the_only_error() {
        let mut trip = valid_trip();
        trip.title = "".into();
        let report = validate_trip(&trip, today());

        assert!(!report.is_valid());
        assert_eq!(report.error(TripField::Title), Some("Trip title is required"));
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn whitespace_title_rejected() {
        let mut trip = valid_trip();
        trip.title = "   ".into();
        assert!(validate_trip(&trip, today()).error(TripField::Title).is_some());
    }

    #[test]
    fn missing_dates_reported_independently() {
        let mut trip = valid_trip();
        trip.set_dates(None, None);
        let report = validate_trip(&trip, today());

        assert_eq!(report.error(TripField::StartDate), Some("Start date is required"));
        assert_eq!(report.error(TripField::EndDate), Some("End date is required"));
    }

    #[test]
    fn end_before_start_flags_end_date() {
        let mut trip = valid_trip();
        trip.set_dates(
            NaiveDate::from_ymd_opt(2025, 6, 5),
            NaiveDate::from_ymd_opt(2025, 6, 1),
        );
        let report = validate_trip(&trip, today());
        assert_eq!(
            report.error(TripField::EndDate),
            Some("End date must be after start date")
        );
    }

    #[test]
    fn equal_dates_flag_end_date() {
        let mut trip = valid_trip();
        let day = NaiveDate::from_ymd_opt(2025, 6, 1);
        trip.set_dates(day, day);
        assert!(validate_trip(&trip, today()).error(TripField::EndDate).is_some());
    }

    #[test]
    fn past_start_flags_start_date() {
        let mut trip = valid_trip();
        trip.set_dates(
            NaiveDate::from_ymd_opt(2025, 4, 20),
            NaiveDate::from_ymd_opt(2025, 6, 5),
        );
        let report = validate_trip(&trip, today());
        assert_eq!(
            report.error(TripField::StartDate),
            Some("Start date cannot be in the past")
        );
    }

    #[test]
    fn starting_today_is_allowed() {
        let mut trip = valid_trip();
        trip.set_dates(Some(today()), NaiveDate::from_ymd_opt(2025, 6, 5));
        assert!(validate_trip(&trip, today()).is_valid());
    }

    #[test]
    fn over_long_trips_rejected() {
        let mut trip = valid_trip();
        // 179 days, just inside the limit
        trip.set_dates(
            NaiveDate::from_ymd_opt(2025, 6, 1),
            NaiveDate::from_ymd_opt(2025, 11, 26),
        );
        assert!(validate_trip(&trip, today()).is_valid());

        trip.set_dates(
            NaiveDate::from_ymd_opt(2025, 6, 1),
            NaiveDate::from_ymd_opt(2026, 6, 1),
        );
        let report = validate_trip(&trip, today());
        assert_eq!(
            report.error(TripField::EndDate),
            Some("Trip cannot be longer than 180 days")
        );
    }

    #[test]
    fn empty_parks_rejected() {
        let mut trip = valid_trip();
        trip.parks.clear();
        let report = validate_trip(&trip, today());
        assert_eq!(report.error(TripField::Parks), Some("Please select at least one park"));
    }

    #[test]
    fn too_many_parks_rejected() {
        let mut trip = valid_trip();
        trip.set_dates(
            NaiveDate::from_ymd_opt(2025, 6, 1),
            NaiveDate::from_ymd_opt(2025, 8, 30),
        );
        trip.parks = (0..21).map(|i| park(&format!("p{i}"), 1)).collect();
        let report = validate_trip(&trip, today());
        assert_eq!(
            report.error(TripField::Parks),
            Some("Maximum 20 parks allowed per trip")
        );
    }

    #[test]
    fn missing_mode_rejected() {
        let mut trip = valid_trip();
        trip.transportation_mode = None;
        let report = validate_trip(&trip, today());
        assert_eq!(
            report.error(TripField::TransportationMode),
            Some("Please select a transportation method")
        );

        trip.transportation_mode = Some(TransportMode::Flying);
        assert!(validate_trip(&trip, today()).is_valid());
    }

    #[test]
    fn stay_days_beyond_slack_flag_parks() {
        // 5-day trip allows up to 10 total stay days
        let mut trip = valid_trip();
        trip.parks[0].stay_duration = 10;
        assert!(validate_trip(&trip, today()).is_valid());

        trip.parks[0].stay_duration = 11;
        let report = validate_trip(&trip, today());
        assert_eq!(
            report.error(TripField::Parks),
            Some("Total park stay days exceed trip duration")
        );
    }

    #[test]
    fn validation_does_not_mutate() {
        let trip = valid_trip();
        let snapshot = trip.clone();
        let _ = validate_trip(&trip, today());
        assert_eq!(trip, snapshot);
    }

    #[test]
    fn report_serializes_with_camel_case_fields() {
        let mut trip = valid_trip();
        trip.title = "".into();
        trip.set_dates(None, None);
        let report = validate_trip(&trip, today());

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"startDate\""));
    }
}
