//! Domain model for the event-management core.
//!
//! # Responsibility
//! - Define the canonical client/event records shared by all backends.
//! - Keep draft (pre-persistence) and persisted shapes distinct.
//!
//! # Invariants
//! - Persisted records always carry an engine-assigned id.
//! - No two client records share an email.

pub mod client;
pub mod event;
