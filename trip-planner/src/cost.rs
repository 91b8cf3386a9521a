//! Trip cost estimation.
//!
//! A deterministic dollar estimate from trip length, route distance, park
//! count, and transportation mode. The rates are product heuristics, not
//! market data; they are named constants so they can be tuned without
//! touching the arithmetic. Every component is rounded to the nearest
//! dollar before the components are summed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{ParkStop, TransportMode, Trip};
use crate::{calendar, geo};

/// Nightly accommodation rate, dollars.
pub const NIGHTLY_RATE: f64 = 85.0;

/// Daily food rate, dollars.
pub const DAILY_FOOD_RATE: f64 = 55.0;

/// Entry fee per park, dollars.
pub const PARK_ENTRY_FEE: i64 = 30;

/// Base cost per flight leg, dollars.
pub const BASE_FLIGHT_COST: f64 = 275.0;

/// Cost per driven mile (gas plus wear), dollars.
pub const MILEAGE_RATE: f64 = 0.35;

/// Parking cost per park when driving, dollars.
pub const PARKING_FEE_PER_PARK: f64 = 15.0;

/// Accommodation and food multiplier applied when any park is in a
/// high-cost state.
pub const HIGH_COST_MULTIPLIER: f64 = 1.3;

/// States where lodging and food run noticeably above the base rates.
pub const HIGH_COST_STATES: [&str; 4] = ["California", "Utah", "Colorado", "Wyoming"];

/// Flight-cost multiplier applied when the trip spans more than
/// [`MULTI_STATE_THRESHOLD`] distinct states.
pub const MULTI_STATE_FLIGHT_MULTIPLIER: f64 = 1.2;

/// Distinct-state count above which flights get the multi-state multiplier.
pub const MULTI_STATE_THRESHOLD: usize = 3;

/// Share of the subtotal set aside for miscellaneous spending.
pub const MISCELLANEOUS_RATE: f64 = 0.15;

/// Per-component cost estimate, all values in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub accommodation: i64,
    pub transportation: i64,
    pub park_fees: i64,
    pub food: i64,
    pub miscellaneous: i64,
    pub total: i64,
}

/// Estimate the total trip cost in whole dollars.
///
/// Shorthand for [`cost_breakdown`]'s `total`.
pub fn estimate_cost(trip: &Trip) -> i64 {
    cost_breakdown(trip).total
}

/// Estimate the trip cost with a per-component breakdown.
///
/// Pure function of the trip's dates, parks, and transportation mode; the
/// derived fields on the trip are not consulted. A trip with dates but no
/// parks still costs something: food and accommodation scale with days,
/// not parks.
pub fn cost_breakdown(trip: &Trip) -> CostBreakdown {
    let duration = calendar::trip_duration(trip.start_date, trip.end_date);
    let nights = (duration - 1).max(0);
    let distance = geo::route_distance(&trip.parks).round();
    let parks_count = trip.parks.len();

    let location_multiplier = if has_high_cost_park(&trip.parks) {
        HIGH_COST_MULTIPLIER
    } else {
        1.0
    };

    let accommodation = round_dollars(nights as f64 * NIGHTLY_RATE * location_multiplier);
    let food = round_dollars(duration as f64 * DAILY_FOOD_RATE * location_multiplier);
    let park_fees = parks_count as i64 * PARK_ENTRY_FEE;
    let transportation = match trip.mode_or_default() {
        TransportMode::Flying => flight_cost(&trip.parks),
        TransportMode::Driving => {
            round_dollars(distance * MILEAGE_RATE + parks_count as f64 * PARKING_FEE_PER_PARK)
        }
    };

    let subtotal = accommodation + transportation + park_fees + food;
    let miscellaneous = round_dollars(subtotal as f64 * MISCELLANEOUS_RATE);

    CostBreakdown {
        accommodation,
        transportation,
        park_fees,
        food,
        miscellaneous,
        total: subtotal + miscellaneous,
    }
}

fn has_high_cost_park(parks: &[ParkStop]) -> bool {
    parks
        .iter()
        .any(|p| HIGH_COST_STATES.contains(&p.state.as_str()))
}

fn flight_cost(parks: &[ParkStop]) -> i64 {
    let states: HashSet<&str> = parks.iter().map(|p| p.state.as_str()).collect();
    let multiplier = if states.len() > MULTI_STATE_THRESHOLD {
        MULTI_STATE_FLIGHT_MULTIPLIER
    } else {
        1.0
    };
    round_dollars(parks.len() as f64 * BASE_FLIGHT_COST * multiplier)
}

fn round_dollars(amount: f64) -> i64 {
    amount.round() as i64
}
