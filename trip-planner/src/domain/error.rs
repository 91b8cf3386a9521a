//! Domain error types.
//!
//! These errors represent invariant violations when building trip values.
//! Business-rule validation of a whole trip is not an error channel; see
//! `crate::validate` for the report the UI consumes.

/// Domain-level errors for trip construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A park with this id is already in the trip's itinerary
    #[error("park {0} is already in the trip")]
    DuplicatePark(String),

    /// Stay duration must be at least one day
    #[error("stay duration must be at least 1 day")]
    InvalidStayDuration,
}
