//! Document-store implementations of the repository contracts.
//!
//! # Invariants
//! - A failed insert never commits; the duplicate-email path leaves the
//!   existing document untouched.
//! - Phone updates rewrite the whole document inside one transaction but
//!   change only the `phone` field.

use super::models::{StoredClient, StoredClientKey, StoredEvent};
use super::store::Store;
use crate::model::client::{Client, NewClient};
use crate::model::event::{Event, NewEvent};
use crate::repo::{ClientRepository, CreateClientOutcome, EventRepository, RepoResult};
use log::info;
use native_db::db_type;

/// Document-backed client repository borrowing an open store.
pub struct DocClientRepository<'s> {
    store: &'s Store,
}

impl<'s> DocClientRepository<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }
}

impl ClientRepository for DocClientRepository<'_> {
    fn create_client(&self, draft: &NewClient) -> RepoResult<CreateClientOutcome> {
        let client = draft.clone().into_client(self.store.next_client_id());
        let stored = StoredClient::from_client(&client);

        let rw = self.store.db.rw_transaction()?;
        match rw.insert(stored) {
            Ok(()) => {
                rw.commit()?;
                info!("event=client_create module=docstore status=ok id={}", client.id);
                Ok(CreateClientOutcome::Created(client))
            }
            // Dropping the uncommitted transaction aborts the insert.
            Err(db_type::Error::DuplicateKey { .. }) => {
                info!("event=client_create module=docstore status=duplicate_email");
                Ok(CreateClientOutcome::DuplicateEmail {
                    email: client.email,
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<Client>> {
        let r = self.store.db.r_transaction()?;
        let stored: Option<StoredClient> =
            r.get().secondary(StoredClientKey::email, email.to_string())?;
        Ok(stored.map(StoredClient::into_client))
    }

    fn update_phone(&self, email: &str, new_phone: &str) -> RepoResult<bool> {
        let rw = self.store.db.rw_transaction()?;
        let existing: Option<StoredClient> =
            rw.get().secondary(StoredClientKey::email, email.to_string())?;

        let Some(current) = existing else {
            return Ok(false);
        };

        let mut updated = current.clone();
        updated.phone = new_phone.to_string();
        rw.remove(current)?;
        rw.insert(updated)?;
        rw.commit()?;

        info!("event=client_update_phone module=docstore status=ok");
        Ok(true)
    }

    fn delete_client(&self, email: &str) -> RepoResult<bool> {
        let rw = self.store.db.rw_transaction()?;
        let existing: Option<StoredClient> =
            rw.get().secondary(StoredClientKey::email, email.to_string())?;

        let Some(current) = existing else {
            return Ok(false);
        };

        rw.remove(current)?;
        rw.commit()?;

        info!("event=client_delete module=docstore status=ok");
        Ok(true)
    }
}

/// Document-backed event repository borrowing an open store.
pub struct DocEventRepository<'s> {
    store: &'s Store,
}

impl<'s> DocEventRepository<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }
}

impl EventRepository for DocEventRepository<'_> {
    fn create_event(&self, draft: &NewEvent) -> RepoResult<Event> {
        let event = draft.clone().into_event(self.store.next_event_id());
        let stored = StoredEvent::from_event(&event);

        let rw = self.store.db.rw_transaction()?;
        rw.insert(stored)?;
        rw.commit()?;

        info!("event=event_create module=docstore status=ok id={}", event.id);
        Ok(event)
    }

    fn list_events(&self) -> RepoResult<Vec<Event>> {
        let r = self.store.db.r_transaction()?;
        let mut events = Vec::new();

        // Primary scan yields ascending ids, i.e. insertion order.
        for item in r.scan().primary::<StoredEvent>()?.all()? {
            events.push(item?.into_event()?);
        }

        Ok(events)
    }
}
