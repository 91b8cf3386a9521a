//! Trip export and sharing.
//!
//! A JSON snapshot of a trip together with its generated itinerary and
//! cost breakdown, plus the plain-text share message. These are
//! serialize-only views assembled from the core's outputs; the exact
//! delivery (download, clipboard, share sheet) is the application's
//! concern.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::cost::{self, CostBreakdown};
use crate::domain::{Coordinate, Preferences, TransportMode, Trip};
use crate::itinerary::{self, ItineraryEntry};

/// Version stamp written into every export.
pub const EXPORT_FORMAT_VERSION: &str = "2.0";

/// Source stamp written into every export.
pub const EXPORT_SOURCE: &str = "National Parks Explorer";

/// Export provenance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,
    pub version: &'static str,
    pub source: &'static str,
}

/// The trip's own fields, minus anything derived.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub title: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub transportation_mode: Option<TransportMode>,
    pub preferences: Preferences,
}

/// One park as it appears in the export's summary list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkSummary {
    pub name: String,
    pub state: String,
    pub stay_duration: u32,
    pub coordinates: Option<Coordinate>,
}

/// Estimated spend for the trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripBudget {
    pub estimated_cost: i64,
    pub breakdown: CostBreakdown,
}

/// Distance, duration, and mode at a glance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripLogistics {
    pub total_distance: f64,
    pub total_duration: i64,
    pub transportation_mode: Option<TransportMode>,
}

/// The full export snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripExport {
    pub metadata: ExportMetadata,
    pub trip: TripDetails,
    pub itinerary: Vec<ItineraryEntry>,
    pub parks: Vec<ParkSummary>,
    pub budget: TripBudget,
    pub logistics: TripLogistics,
}

/// A share message: a headline and a one-line pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
}

/// Assemble the export snapshot for a trip.
///
/// `exported_at` is explicit so exports are reproducible; pass
/// `Utc::now()` at the call site for the usual behavior.
pub fn export_trip(trip: &Trip, exported_at: DateTime<Utc>) -> TripExport {
    let breakdown = cost::cost_breakdown(trip);

    TripExport {
        metadata: ExportMetadata {
            exported_at,
            version: EXPORT_FORMAT_VERSION,
            source: EXPORT_SOURCE,
        },
        trip: TripDetails {
            title: trip.title.clone(),
            description: trip.description.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            transportation_mode: trip.transportation_mode,
            preferences: trip.preferences.clone(),
        },
        itinerary: itinerary::generate_itinerary(trip),
        parks: trip
            .parks
            .iter()
            .map(|p| ParkSummary {
                name: p.park_name.clone(),
                state: p.state.clone(),
                stay_duration: p.stay_duration,
                coordinates: p.coordinates,
            })
            .collect(),
        budget: TripBudget {
            estimated_cost: breakdown.total,
            breakdown,
        },
        logistics: TripLogistics {
            total_distance: trip.total_distance,
            total_duration: trip.total_duration,
            transportation_mode: trip.transportation_mode,
        },
    }
}

/// Serialize the export snapshot to pretty-printed JSON.
///
/// # Errors
///
/// Returns `Err` only if JSON serialization itself fails, which these
/// plain-data types do not do in practice.
pub fn export_trip_json(trip: &Trip, exported_at: DateTime<Utc>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&export_trip(trip, exported_at))
}

/// Build the human-readable share message for a trip.
pub fn share_message(trip: &Trip) -> ShareMessage {
    ShareMessage {
        title: format!("{} - National Parks Adventure", trip.title),
        text: format!(
            "Join me on a {}-day journey through {} amazing national parks! Estimated cost: ${}",
            trip.total_duration,
            trip.parks.len(),
            format_dollars(trip.estimated_cost),
        ),
    }
}

/// Format a dollar amount with thousands separators, e.g. `12,345`.
pub fn format_dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
