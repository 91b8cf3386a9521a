//! Domain types for the trip planner.
//!
//! This module contains the core domain model types that represent a
//! planned trip. Types enforce their invariants at construction time, so
//! code that receives these types can trust their validity. Serde renames
//! follow the camelCase shape of the persisted trip document.

mod coordinate;
mod error;
mod park;
mod trip;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use error::DomainError;
pub use park::ParkStop;
pub use trip::{BudgetTier, Difficulty, Preferences, TransportMode, Trip};
