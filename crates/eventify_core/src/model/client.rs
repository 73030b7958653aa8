//! Client domain model.
//!
//! # Responsibility
//! - Define the persisted client record and its caller-side draft.
//!
//! # Invariants
//! - `id` is assigned by the storage engine on create and never changes.
//! - `email` is unique across all clients and is the sole lookup key.
//! - `phone` is the only field the contract allows to mutate.

use serde::{Deserialize, Serialize};

/// Engine-assigned identifier for a persisted client.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ClientId = i64;

/// Persisted client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Assigned by the storage engine on create; opaque to callers.
    pub id: ClientId,
    /// Free-text display name.
    pub name: String,
    /// Unique contact address; lookup/update/delete key.
    pub email: String,
    /// Numeric contact string. Deliberately not validated; the contract
    /// stores whatever the caller supplies.
    pub phone: String,
}

/// Caller-side draft for creating a client. Has no id until persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewClient {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Promotes this draft to a persisted record once the engine has
    /// assigned an id.
    pub fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}
