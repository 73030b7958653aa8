//! Storage core for the Eventify demo system.
//! This crate is the single source of truth for the client/event contracts.
//!
//! Two interchangeable backends implement one repository contract: a
//! relational SQLite backend and an embedded document store. Callers pick
//! one at configuration time and inject the storage handle explicitly.

pub mod config;
pub mod db;
pub mod docstore;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError, StorageBackend};
pub use docstore::{DocClientRepository, DocEventRepository, Store};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::client::{Client, ClientId, NewClient};
pub use model::event::{default_start_time, Event, EventId, NewEvent};
pub use repo::client_repo::SqliteClientRepository;
pub use repo::event_repo::SqliteEventRepository;
pub use repo::{
    ClientRepository, CreateClientOutcome, EventRepository, RepoError, RepoResult,
};
pub use service::client_service::ClientService;
pub use service::event_service::EventService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
