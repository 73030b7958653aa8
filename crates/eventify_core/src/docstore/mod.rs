//! Document-store backend over `native_db`.
//!
//! # Responsibility
//! - Provide the embedded document database wrapper and stored models.
//! - Implement the repository contracts against document collections.
//!
//! # Invariants
//! - Client email uniqueness is enforced by a unique secondary key.
//! - Dates are persisted as ISO-8601 text; the store has no native date
//!   type, and read paths reject unparseable persisted values.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod models;
mod repos;
mod store;

pub use repos::{DocClientRepository, DocEventRepository};
pub use store::Store;

pub type DocResult<T> = Result<T, DocError>;

/// Transport error raised by the document store backend.
#[derive(Debug)]
pub enum DocError {
    Store(native_db::db_type::Error),
}

impl Display for DocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "document store error: {err}"),
        }
    }
}

impl Error for DocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<native_db::db_type::Error> for DocError {
    fn from(value: native_db::db_type::Error) -> Self {
        Self::Store(value)
    }
}
