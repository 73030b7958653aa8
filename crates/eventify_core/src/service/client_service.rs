//! Client use-case service.
//!
//! # Responsibility
//! - Provide stable client CRUD entry points for callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass the repository duplicate/absence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::client::{Client, NewClient};
use crate::repo::{ClientRepository, CreateClientOutcome, RepoResult};

/// Use-case service wrapper for client CRUD operations.
pub struct ClientService<R: ClientRepository> {
    repo: R,
}

impl<R: ClientRepository> ClientService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new client.
    ///
    /// # Contract
    /// - Returns the typed duplicate outcome on an email collision; callers
    ///   should report and continue, not abort.
    pub fn register_client(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> RepoResult<CreateClientOutcome> {
        self.repo
            .create_client(&NewClient::new(name, email, phone))
    }

    /// Looks up one client by its unique email. Absence is `None`.
    pub fn find_by_email(&self, email: &str) -> RepoResult<Option<Client>> {
        self.repo.find_by_email(email)
    }

    /// Overwrites the phone of the matching client.
    ///
    /// Returns whether a record was actually modified.
    pub fn update_phone(&self, email: &str, new_phone: &str) -> RepoResult<bool> {
        self.repo.update_phone(email, new_phone)
    }

    /// Removes the matching client. Returns whether a record was removed.
    pub fn delete_client(&self, email: &str) -> RepoResult<bool> {
        self.repo.delete_client(email)
    }
}
