//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage-agnostic client/event data access contracts.
//! - Isolate backend query details from service/demo orchestration.
//!
//! # Invariants
//! - A duplicate client email is the only recoverable create failure and is
//!   surfaced as a typed outcome, never a propagated fault.
//! - Absence (find/update/delete on a missing email) is reported as
//!   `None`/`false`, never as an error.

use crate::db::DbError;
use crate::docstore::DocError;
use crate::model::client::{Client, NewClient};
use crate::model::event::{Event, NewEvent};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod client_repo;
pub mod event_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for client/event persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Doc(DocError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Doc(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Doc(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<DocError> for RepoError {
    fn from(value: DocError) -> Self {
        Self::Doc(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<native_db::db_type::Error> for RepoError {
    fn from(value: native_db::db_type::Error) -> Self {
        Self::Doc(DocError::Store(value))
    }
}

/// Typed result of a client create.
///
/// The duplicate case is a value, not an error, so callers must handle it
/// explicitly before they can reach the created record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateClientOutcome {
    /// Record persisted; carries the engine-assigned id.
    Created(Client),
    /// Email collided with an existing record; nothing was persisted.
    DuplicateEmail { email: String },
}

/// Repository interface for client CRUD operations.
pub trait ClientRepository {
    /// Persists a new client unless the email is already taken.
    fn create_client(&self, draft: &NewClient) -> RepoResult<CreateClientOutcome>;
    /// Returns the unique record matching `email`, if any.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<Client>>;
    /// Overwrites `phone` for the matching record. Returns whether a record
    /// was actually modified.
    fn update_phone(&self, email: &str, new_phone: &str) -> RepoResult<bool>;
    /// Removes the matching record. Returns whether a record was removed.
    fn delete_client(&self, email: &str) -> RepoResult<bool>;
}

/// Repository interface for event operations.
///
/// Events have no update/delete contract and no uniqueness rule.
pub trait EventRepository {
    /// Persists a new event unconditionally, pinning the fixed start time.
    fn create_event(&self, draft: &NewEvent) -> RepoResult<Event>;
    /// Returns every persisted event. Order is unspecified by contract
    /// (insertion order in practice).
    fn list_events(&self) -> RepoResult<Vec<Event>>;
}

/// Verifies the connection is migrated and the given table/columns exist.
///
/// Shared guard for the SQLite repositories' `try_new` constructors.
pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for column in columns {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

/// Returns whether the failed statement hit SQLite's constraint machinery.
///
/// The clients table carries exactly one constraint (unique email), so a
/// constraint failure on a client insert means a duplicate email.
pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM pragma_table_info(?1)
            WHERE name = ?2
        );",
        params![table, column],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
