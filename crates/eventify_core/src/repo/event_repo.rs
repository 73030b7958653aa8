//! SQLite-backed event repository.
//!
//! # Responsibility
//! - Implement the event create/list contract over the `events` table.
//!
//! # Invariants
//! - Inserts always store the fixed start time, never caller input.
//! - Listing returns rows in primary-key order; callers must not rely on it.

use crate::model::event::{default_start_time, Event, NewEvent};
use crate::repo::{ensure_connection_ready, EventRepository, RepoResult};
use log::info;
use rusqlite::{params, Connection, Row};

const EVENT_SELECT_SQL: &str =
    "SELECT id, name, description, start_date, start_time, venue, capacity FROM events";

const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "name",
    "description",
    "start_date",
    "start_time",
    "venue",
    "capacity",
];

/// SQLite-backed event repository borrowing a migrated connection.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "events", REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn create_event(&self, draft: &NewEvent) -> RepoResult<Event> {
        self.conn.execute(
            "INSERT INTO events (name, description, start_date, start_time, venue, capacity)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                draft.name,
                draft.description,
                draft.start_date,
                default_start_time(),
                draft.venue,
                draft.capacity,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("event=event_create module=repo status=ok id={id}");
        Ok(draft.clone().into_event(id))
    }

    fn list_events(&self) -> RepoResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!("{EVENT_SELECT_SQL} ORDER BY id;"))?;
        let mut rows = stmt.query([])?;
        let mut events = Vec::new();

        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }

        Ok(events)
    }
}

fn parse_event_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        start_date: row.get("start_date")?,
        start_time: row.get("start_time")?,
        venue: row.get("venue")?,
        capacity: row.get("capacity")?,
    })
}
