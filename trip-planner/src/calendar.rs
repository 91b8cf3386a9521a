//! Trip duration and stay-length heuristics.

use chrono::NaiveDate;

use crate::domain::ParkStop;

/// Suggested stay length when nothing about the park says otherwise.
pub const DEFAULT_STAY_DAYS: u32 = 2;

/// Stay-length suggestions for well-known large parks, matched by
/// substring on the display name. Order matters: the first matching entry
/// wins, so broader names stay below more specific ones.
pub const LARGE_PARK_STAYS: [(&str, u32); 10] = [
    ("Yellowstone", 4),
    ("Grand Canyon", 3),
    ("Yosemite", 3),
    ("Glacier", 4),
    ("Olympic", 3),
    ("Great Smoky Mountains", 2),
    ("Zion", 2),
    ("Bryce Canyon", 2),
    ("Arches", 2),
    ("Canyonlands", 3),
];

/// Inclusive trip length in days.
///
/// Both endpoint days count, so a same-day trip is 1 day. A missing date
/// or a reversed range yields the 1-day floor rather than an error; the
/// wizard calls this long before the dates are valid.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trip_planner::calendar::trip_duration;
///
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1);
/// let end = NaiveDate::from_ymd_opt(2025, 6, 5);
/// assert_eq!(trip_duration(start, end), 5);
/// assert_eq!(trip_duration(start, start), 1);
/// assert_eq!(trip_duration(None, end), 1);
/// ```
pub fn trip_duration(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end.signed_duration_since(start).num_days() + 1).max(1),
        _ => 1,
    }
}

/// Suggest a stay length in days for a park.
///
/// Checks the large-park table first, then falls back to a heuristic on
/// description length (longer description, more to do), then to
/// [`DEFAULT_STAY_DAYS`].
pub fn suggest_stay_duration(park: &ParkStop) -> u32 {
    for (name, days) in LARGE_PARK_STAYS {
        if park.park_name.contains(name) {
            return days;
        }
    }

    match park.description.as_deref() {
        Some(d) if d.len() > 500 => 3,
        Some(d) if d.len() > 200 => 2,
        _ => DEFAULT_STAY_DAYS,
    }
}
