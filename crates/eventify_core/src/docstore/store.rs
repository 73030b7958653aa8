//! Document database wrapper.
//!
//! # Responsibility
//! - Own the `native_db` handle and its statically-defined models.
//! - Assign monotonically increasing record ids, since the store has no
//!   auto-increment of its own.

use super::models::{StoredClient, StoredEvent};
use super::DocResult;
use crate::model::client::ClientId;
use crate::model::event::EventId;
use log::info;
use native_db::*;
use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::LazyLock;

static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredClient>().unwrap();
    models.define::<StoredEvent>().unwrap();
    models
});

/// Document store holding client and event collections.
pub struct Store {
    pub(crate) db: Database<'static>,
    next_client_id: AtomicI64,
    next_event_id: AtomicI64,
}

impl Store {
    /// Opens or creates a database file at the given path.
    pub fn open(path: impl AsRef<Path>) -> DocResult<Self> {
        let db = Builder::new().create(&MODELS, path.as_ref())?;
        let store = Self::with_seeded_ids(db)?;
        info!("event=store_open module=docstore status=ok mode=file");
        Ok(store)
    }

    /// Creates an in-memory database.
    pub fn in_memory() -> DocResult<Self> {
        let db = Builder::new().create_in_memory(&MODELS)?;
        let store = Self::with_seeded_ids(db)?;
        info!("event=store_open module=docstore status=ok mode=memory");
        Ok(store)
    }

    /// Hands out the next client id. Ids stay unique for the lifetime of
    /// the underlying file because the counter is seeded from persisted
    /// state at open.
    pub(crate) fn next_client_id(&self) -> ClientId {
        self.next_client_id.fetch_add(1, Ordering::SeqCst)
    }

    pub(crate) fn next_event_id(&self) -> EventId {
        self.next_event_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Removes every client and event document.
    ///
    /// Demo/test helper mirroring the original collection wipe; not part
    /// of the repository contract.
    pub fn clear(&self) -> DocResult<()> {
        let clients: Vec<StoredClient> = {
            let r = self.db.r_transaction()?;
            r.scan().primary::<StoredClient>()?.all()?.collect::<Result<_, _>>()?
        };
        let events: Vec<StoredEvent> = {
            let r = self.db.r_transaction()?;
            r.scan().primary::<StoredEvent>()?.all()?.collect::<Result<_, _>>()?
        };

        let rw = self.db.rw_transaction()?;
        for client in clients {
            rw.remove(client)?;
        }
        for event in events {
            rw.remove(event)?;
        }
        rw.commit()?;
        Ok(())
    }

    fn with_seeded_ids(db: Database<'static>) -> DocResult<Self> {
        let next_client_id = max_client_id(&db)? + 1;
        let next_event_id = max_event_id(&db)? + 1;
        Ok(Self {
            db,
            next_client_id: AtomicI64::new(next_client_id),
            next_event_id: AtomicI64::new(next_event_id),
        })
    }
}

fn max_client_id(db: &Database<'static>) -> DocResult<i64> {
    let r = db.r_transaction()?;
    let mut max_id = 0;
    for item in r.scan().primary::<StoredClient>()?.all()? {
        max_id = max_id.max(item?.id);
    }
    Ok(max_id)
}

fn max_event_id(db: &Database<'static>) -> DocResult<i64> {
    let r = db.r_transaction()?;
    let mut max_id = 0;
    for item in r.scan().primary::<StoredEvent>()?.all()? {
        max_id = max_id.max(item?.id);
    }
    Ok(max_id)
}
