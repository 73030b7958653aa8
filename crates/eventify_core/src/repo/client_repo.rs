//! SQLite-backed client repository.
//!
//! # Responsibility
//! - Implement the client CRUD contract over the `clients` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Email uniqueness is enforced by the storage layer; the insert path
//!   translates the constraint failure into a typed duplicate outcome.
//! - `update_phone` touches no column other than `phone`.

use crate::model::client::{Client, NewClient};
use crate::repo::{
    ensure_connection_ready, is_constraint_violation, ClientRepository, CreateClientOutcome,
    RepoResult,
};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

const CLIENT_SELECT_SQL: &str = "SELECT id, name, email, phone FROM clients";

const REQUIRED_COLUMNS: &[&str] = &["id", "name", "email", "phone"];

/// SQLite-backed client repository borrowing a migrated connection.
pub struct SqliteClientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClientRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "clients", REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ClientRepository for SqliteClientRepository<'_> {
    fn create_client(&self, draft: &NewClient) -> RepoResult<CreateClientOutcome> {
        let inserted = self.conn.execute(
            "INSERT INTO clients (name, email, phone) VALUES (?1, ?2, ?3);",
            params![draft.name, draft.email, draft.phone],
        );

        match inserted {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                info!("event=client_create module=repo status=ok id={id}");
                Ok(CreateClientOutcome::Created(draft.clone().into_client(id)))
            }
            Err(err) if is_constraint_violation(&err) => {
                info!("event=client_create module=repo status=duplicate_email");
                Ok(CreateClientOutcome::DuplicateEmail {
                    email: draft.email.clone(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<Client>> {
        let client = self
            .conn
            .query_row(
                &format!("{CLIENT_SELECT_SQL} WHERE email = ?1;"),
                [email],
                parse_client_row,
            )
            .optional()?;
        Ok(client)
    }

    fn update_phone(&self, email: &str, new_phone: &str) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE clients SET phone = ?2 WHERE email = ?1;",
            params![email, new_phone],
        )?;
        info!("event=client_update_phone module=repo status=ok changed={changed}");
        Ok(changed > 0)
    }

    fn delete_client(&self, email: &str) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM clients WHERE email = ?1;", [email])?;
        info!("event=client_delete module=repo status=ok removed={removed}");
        Ok(removed > 0)
    }
}

fn parse_client_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
    })
}
