//! Stored document models and domain conversions.

use crate::model::client::Client;
use crate::model::event::Event;
use crate::repo::{RepoError, RepoResult};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Stored client document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredClient {
    #[primary_key]
    pub id: i64,
    /// Unique index; the store rejects a second document with the same
    /// email, which the repository surfaces as a duplicate outcome.
    #[secondary_key(unique)]
    pub email: String,
    pub name: String,
    pub phone: String,
}

impl StoredClient {
    pub fn from_client(client: &Client) -> Self {
        Self {
            id: client.id,
            email: client.email.clone(),
            name: client.name.clone(),
            phone: client.phone.clone(),
        }
    }

    pub fn into_client(self) -> Client {
        Client {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Stored event document. Dates are ISO-8601 text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct StoredEvent {
    #[primary_key]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: String,
    pub start_time: String,
    pub venue: String,
    pub capacity: u32,
}

impl StoredEvent {
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            description: event.description.clone(),
            start_date: event.start_date.to_string(),
            start_time: event.start_time.to_string(),
            venue: event.venue.clone(),
            capacity: event.capacity,
        }
    }

    /// Converts back to the domain record, rejecting persisted state whose
    /// date/time text no longer parses instead of masking it.
    pub fn into_event(self) -> RepoResult<Event> {
        let start_date = self.start_date.parse().map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid date `{}` in events.start_date",
                self.start_date
            ))
        })?;
        let start_time = self.start_time.parse().map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid time `{}` in events.start_time",
                self.start_time
            ))
        })?;

        Ok(Event {
            id: self.id,
            name: self.name,
            description: self.description,
            start_date,
            start_time,
            venue: self.venue,
            capacity: self.capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::StoredEvent;
    use crate::model::event::{default_start_time, NewEvent};
    use crate::repo::RepoError;
    use chrono::NaiveDate;

    fn sample() -> StoredEvent {
        let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let event = NewEvent::new("Concierto X", None, date, "Auditorio Nacional", 1650)
            .into_event(1);
        StoredEvent::from_event(&event)
    }

    #[test]
    fn dates_round_trip_through_iso_text() {
        let stored = sample();
        assert_eq!(stored.start_date, "2026-06-15");
        assert_eq!(stored.start_time, "20:00:00");

        let event = stored.into_event().unwrap();
        assert_eq!(event.start_time, default_start_time());
    }

    #[test]
    fn corrupt_persisted_date_is_rejected() {
        let mut stored = sample();
        stored.start_date = "not-a-date".to_string();

        let err = stored.into_event().unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(_)));
    }
}
