//! National-parks trip planning core.
//!
//! Pure computations over a [`domain::Trip`]: great-circle route distance,
//! heuristic route optimization, cost estimation, day-by-day itinerary
//! generation, and trip validation. Persistence and UI live outside this
//! crate; [`store`] defines the contract they plug into.

pub mod calendar;
pub mod cost;
pub mod domain;
pub mod export;
pub mod geo;
pub mod itinerary;
pub mod optimize;
pub mod store;
pub mod template;
pub mod validate;
