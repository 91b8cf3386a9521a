//! Persistence contract for trips.
//!
//! The core never performs I/O; the application saves a trip only after
//! `crate::validate` reports it valid. This module defines the contract
//! a backing store must satisfy, plus [`MemoryStore`], an in-memory
//! implementation used in tests and as the offline fallback.

use std::collections::HashMap;

use chrono::Utc;

use crate::domain::Trip;

/// Errors a trip store can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No trip with this id exists
    #[error("trip {0} not found")]
    NotFound(String),

    /// The backing store rejected or lost the operation
    #[error("store backend error: {0}")]
    Backend(String),
}

/// A store of trip documents.
///
/// `save` owns id and timestamp assignment: an unsaved trip gets an id and
/// `created_at`, and every save refreshes `updated_at`. The optional user
/// id scopes `load` for multi-user backends; single-user stores may ignore
/// it.
pub trait TripStore {
    /// Load all trips, optionally scoped to a user.
    fn load(&self, user_id: Option<&str>) -> Result<Vec<Trip>, StoreError>;

    /// Persist a trip, returning it with id and timestamps assigned.
    fn save(&mut self, trip: Trip) -> Result<Trip, StoreError>;

    /// Delete a trip by id.
    fn remove(&mut self, id: &str) -> Result<(), StoreError>;
}

/// In-memory trip store.
///
/// Backs tests and the offline mode; it is single-user and ignores the
/// user id passed to `load`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    trips: HashMap<String, Trip>,
    next_id: u64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// True when nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

impl TripStore for MemoryStore {
    fn load(&self, _user_id: Option<&str>) -> Result<Vec<Trip>, StoreError> {
        let mut trips: Vec<Trip> = self.trips.values().cloned().collect();
        // Newest first, the order the trip list renders in
        trips.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(trips)
    }

    fn save(&mut self, mut trip: Trip) -> Result<Trip, StoreError> {
        let now = Utc::now();

        let id = match &trip.id {
            Some(id) => id.clone(),
            None => {
                self.next_id += 1;
                let id = format!("trip-{}", self.next_id);
                trip.id = Some(id.clone());
                id
            }
        };

        if trip.created_at.is_none() {
            trip.created_at = Some(now);
        }
        trip.updated_at = Some(now);

        self.trips.insert(id, trip.clone());
        Ok(trip)
    }

    fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.trips
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
