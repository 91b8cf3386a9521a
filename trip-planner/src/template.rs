//! Trip construction from curated templates.
//!
//! A template is editorial content: a titled park list with suggested
//! stay lengths, but no live catalog data. Building a trip from one means
//! matching each template stop against the park catalog (passed in as
//! plain values, like everywhere else in this core) and assembling a
//! ready-to-edit [`Trip`] with dates a comfortable lead time out.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::DEFAULT_STAY_DAYS;
use crate::domain::{
    BudgetTier, Coordinate, Difficulty, ParkStop, Preferences, TransportMode, Trip,
};

/// How far in the future a templated trip starts, in days.
pub const TEMPLATE_LEAD_DAYS: u64 = 30;

/// A park entry in a template: a name to match against the catalog, plus
/// optional overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStop {
    pub name: String,

    /// Preferred over the matched park's state when present
    #[serde(default)]
    pub state: Option<String>,

    /// Suggested stay in days; zero or missing falls back to
    /// [`DEFAULT_STAY_DAYS`]
    #[serde(default)]
    pub days: Option<u32>,
}

/// A curated trip template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripTemplate {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Trip length in days
    #[serde(rename = "duration")]
    pub duration_days: u64,

    #[serde(default)]
    pub parks: Vec<TemplateStop>,

    #[serde(default)]
    pub transportation_mode: Option<TransportMode>,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    /// Headline activities, carried into the trip's preferences
    #[serde(default)]
    pub highlights: Vec<String>,

    #[serde(default)]
    pub budget: Option<BudgetTier>,
}

/// A park as the read-only catalog collaborator presents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPark {
    pub id: String,
    pub name: String,
    pub state: String,

    #[serde(default)]
    pub coordinates: Option<Coordinate>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Build a trip from a template and the park catalog.
///
/// Dates are set [`TEMPLATE_LEAD_DAYS`] after `today` (explicit, so the
/// clock stays out of this core), spanning the template's duration.
/// Template stops that match no catalog park are skipped; stops that
/// match the same park collapse to one itinerary entry. The returned
/// trip's derived fields are already consistent.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trip_planner::template::{CatalogPark, TemplateStop, TripTemplate, trip_from_template};
///
/// let template = TripTemplate {
///     id: "wyoming-classic".into(),
///     title: "Wyoming Classic".into(),
///     description: String::new(),
///     duration_days: 7,
///     parks: vec![TemplateStop { name: "Yellowstone".into(), state: None, days: Some(4) }],
///     transportation_mode: None,
///     difficulty: None,
///     highlights: vec![],
///     budget: None,
/// };
/// let catalog = vec![CatalogPark {
///     id: "yell".into(),
///     name: "Yellowstone National Park".into(),
///     state: "Wyoming".into(),
///     coordinates: None,
///     description: None,
/// }];
///
/// let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let trip = trip_from_template(&template, &catalog, today);
/// assert_eq!(trip.parks.len(), 1);
/// assert_eq!(trip.start_date, NaiveDate::from_ymd_opt(2025, 5, 31));
/// ```
pub fn trip_from_template(
    template: &TripTemplate,
    catalog: &[CatalogPark],
    today: NaiveDate,
) -> Trip {
    let start = add_days(today, TEMPLATE_LEAD_DAYS);
    let end = add_days(start, template.duration_days);

    let mut trip = Trip::new();
    trip.title = template.title.clone();
    trip.description = template.description.clone();
    trip.template_id = Some(template.id.clone());
    trip.transportation_mode =
        Some(template.transportation_mode.unwrap_or(TransportMode::Driving));
    trip.preferences = Preferences {
        difficulty: template.difficulty.unwrap_or(Difficulty::Moderate),
        activities: template.highlights.clone(),
        budget: template.budget.unwrap_or(BudgetTier::Moderate),
        group_size: 2,
    };

    for stop in &template.parks {
        let Some(matched) = find_best_match(stop, catalog) else {
            continue;
        };
        let stay = stop.days.filter(|d| *d > 0).unwrap_or(DEFAULT_STAY_DAYS);
        let state = stop.state.clone().unwrap_or_else(|| matched.state.clone());
        let Ok(mut park) = ParkStop::new(&matched.id, &matched.name, state, stay) else {
            continue;
        };
        park.coordinates = matched.coordinates;
        park.description = matched.description.clone();
        // Stops matching the same catalog park collapse to one entry
        let _ = trip.add_park(park);
    }

    trip.set_dates(Some(start), Some(end));
    trip
}

/// Match a template stop against the catalog: exact name first, then
/// first-word containment either way, then any "national" park in the
/// stop's state. All name comparison is case-insensitive.
fn find_best_match<'a>(stop: &TemplateStop, catalog: &'a [CatalogPark]) -> Option<&'a CatalogPark> {
    let wanted = stop.name.to_lowercase();

    if let Some(park) = catalog.iter().find(|p| p.name.to_lowercase() == wanted) {
        return Some(park);
    }

    let wanted_first = wanted.split(' ').next().unwrap_or("");
    if let Some(park) = catalog.iter().find(|p| {
        let name = p.name.to_lowercase();
        let name_first = name.split(' ').next().unwrap_or("");
        name.contains(wanted_first) || wanted.contains(name_first)
    }) {
        return Some(park);
    }

    stop.state.as_deref().and_then(|state| {
        catalog
            .iter()
            .find(|p| p.state == state && p.name.to_lowercase().contains("national"))
    })
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    // Only unrepresentable at the far end of chrono's date range
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}
