//! Event domain model.
//!
//! # Responsibility
//! - Define the persisted event record and its caller-side draft.
//! - Own the fixed wall-clock start time every backend must store.
//!
//! # Invariants
//! - `id` is assigned by the storage engine on create and never changes.
//! - Events have no uniqueness constraint and no update/delete contract.
//! - `start_time` is always the fixed 20:00 value, never caller-supplied.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Engine-assigned identifier for a persisted event.
pub type EventId = i64;

/// Wall-clock start stored for every event.
///
/// The original system pins 20:00 regardless of caller input; the draft
/// shape has no time field on purpose so callers cannot expect otherwise.
/// Revisit once product intent for caller-supplied times is clarified.
pub fn default_start_time() -> NaiveTime {
    // 20:00:00 is always in range for a wall-clock time.
    NaiveTime::from_hms_opt(20, 0, 0).expect("fixed start time is valid")
}

/// Persisted event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Assigned by the storage engine on create; opaque to callers.
    pub id: EventId,
    /// Free-text title. Not unique.
    pub name: String,
    /// Optional free-text body; absent and empty are both allowed.
    pub description: Option<String>,
    /// Calendar date of the occurrence.
    pub start_date: NaiveDate,
    /// Always `default_start_time()`; see module invariants.
    pub start_time: NaiveTime,
    /// Free-text location.
    pub venue: String,
    /// Non-negative by type; no enforced upper bound.
    pub capacity: u32,
}

/// Caller-side draft for creating an event. Carries no id and no time
/// field; the store pins the start time itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub venue: String,
    pub capacity: u32,
}

impl NewEvent {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        start_date: NaiveDate,
        venue: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            start_date,
            venue: venue.into(),
            capacity,
        }
    }

    /// Promotes this draft to a persisted record with the engine-assigned
    /// id and the fixed start time applied.
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            start_time: default_start_time(),
            venue: self.venue,
            capacity: self.capacity,
        }
    }
}
