//! Event use-case service.
//!
//! # Responsibility
//! - Provide stable event entry points for callers.
//! - Delegate persistence to repository implementations.

use crate::model::event::{Event, NewEvent};
use crate::repo::{EventRepository, RepoResult};
use chrono::NaiveDate;

/// Use-case service wrapper for event operations.
pub struct EventService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Schedules a new event.
    ///
    /// # Contract
    /// - Persists unconditionally; there is no uniqueness rule for events.
    /// - The stored wall-clock start is the fixed 20:00 value; callers
    ///   control the date only.
    pub fn schedule_event(
        &self,
        name: impl Into<String>,
        description: Option<String>,
        start_date: NaiveDate,
        venue: impl Into<String>,
        capacity: u32,
    ) -> RepoResult<Event> {
        self.repo
            .create_event(&NewEvent::new(name, description, start_date, venue, capacity))
    }

    /// Lists every persisted event. Order is unspecified by contract.
    pub fn list_events(&self) -> RepoResult<Vec<Event>> {
        self.repo.list_events()
    }
}
