//! Suggested-activity and travel-advice tables.
//!
//! Fixed editorial content keyed by stay day and transportation mode.
//! Kept out of the generator so the copy can change without touching the
//! scheduling logic.

use crate::domain::TransportMode;

/// Suggested activities per day of a park stay. Day 1 is orientation,
/// later days ramp up; stays longer than the table clamp to the last row.
pub const DAY_ACTIVITIES: [&[&str]; 4] = [
    &["Visitor Center", "Easy Scenic Drives", "Photography"],
    &["Moderate Hiking", "Wildlife Viewing", "Ranger Programs"],
    &["Challenging Hikes", "Backcountry Exploration", "Sunrise/Sunset Views"],
    &["Multi-day Activities", "Special Tours", "Rest and Reflection"],
];

const DRIVING_SUGGESTIONS: [&str; 3] = [
    "Plan scenic stops along the route",
    "Check road conditions and closures",
    "Book overnight stays if driving time > 6 hours",
];

const FLYING_SUGGESTIONS: [&str; 3] = [
    "Book flights 2-3 months in advance",
    "Consider rental car at destination",
    "Check baggage restrictions for outdoor gear",
];

/// Suggested activities for the given 1-based day of a stay.
pub fn suggested_activities(stay_day: u32) -> Vec<String> {
    let index = (stay_day.clamp(1, DAY_ACTIVITIES.len() as u32) - 1) as usize;
    DAY_ACTIVITIES[index].iter().map(|s| (*s).to_string()).collect()
}

/// Static travel advice for a leg in the given mode.
pub fn travel_suggestions(mode: TransportMode) -> Vec<String> {
    let suggestions = match mode {
        TransportMode::Driving => &DRIVING_SUGGESTIONS,
        TransportMode::Flying => &FLYING_SUGGESTIONS,
    };
    suggestions.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_day_is_orientation() {
        let activities = suggested_activities(1);
        assert_eq!(activities[0], "Visitor Center");
    }

    #[test]
    fn long_stays_clamp_to_last_row() {
        assert_eq!(suggested_activities(4), suggested_activities(9));
    }

    #[test]
    fn day_zero_clamps_to_first_row() {
        assert_eq!(suggested_activities(0), suggested_activities(1));
    }

    #[test]
    fn suggestions_differ_by_mode() {
        let driving = travel_suggestions(TransportMode::Driving);
        let flying = travel_suggestions(TransportMode::Flying);
        assert_eq!(driving.len(), 3);
        assert_eq!(flying.len(), 3);
        assert_ne!(driving, flying);
    }
}
