use chrono::NaiveDate;
use eventify_core::{
    default_start_time, ClientRepository, CreateClientOutcome, DocClientRepository,
    DocEventRepository, EventRepository, NewClient, NewEvent, Store,
};
use std::collections::HashSet;

fn demo_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
}

#[test]
fn create_and_find_roundtrip() {
    let store = Store::in_memory().unwrap();
    let repo = DocClientRepository::new(&store);

    let outcome = repo
        .create_client(&NewClient::new("Juan", "juan@gmail.com", "4425896310"))
        .unwrap();
    let created = match outcome {
        CreateClientOutcome::Created(client) => client,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert!(created.id > 0);

    let found = repo.find_by_email("juan@gmail.com").unwrap().unwrap();
    assert_eq!(found, created);
}

#[test]
fn duplicate_email_reports_outcome_and_preserves_existing() {
    let store = Store::in_memory().unwrap();
    let repo = DocClientRepository::new(&store);

    repo.create_client(&NewClient::new("Juan", "juan@gmail.com", "4425896310"))
        .unwrap();

    let outcome = repo
        .create_client(&NewClient::new("Impostor", "juan@gmail.com", "4429999999"))
        .unwrap();
    assert_eq!(
        outcome,
        CreateClientOutcome::DuplicateEmail {
            email: "juan@gmail.com".to_string()
        }
    );

    let found = repo.find_by_email("juan@gmail.com").unwrap().unwrap();
    assert_eq!(found.name, "Juan");
    assert_eq!(found.phone, "4425896310");
}

#[test]
fn update_phone_follows_absence_and_success_contract() {
    let store = Store::in_memory().unwrap();
    let repo = DocClientRepository::new(&store);

    assert!(!repo.update_phone("nobody@example.com", "4420000000").unwrap());

    let outcome = repo
        .create_client(&NewClient::new("Juan", "juan@gmail.com", "4425896310"))
        .unwrap();
    let created = match outcome {
        CreateClientOutcome::Created(client) => client,
        other => panic!("unexpected outcome: {other:?}"),
    };

    assert!(repo.update_phone("juan@gmail.com", "4420000000").unwrap());

    let updated = repo.find_by_email("juan@gmail.com").unwrap().unwrap();
    assert_eq!(updated.phone, "4420000000");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, created.name);
}

#[test]
fn delete_existing_then_find_returns_none() {
    let store = Store::in_memory().unwrap();
    let repo = DocClientRepository::new(&store);

    repo.create_client(&NewClient::new("Juan", "juan@gmail.com", "4425896310"))
        .unwrap();

    assert!(repo.delete_client("juan@gmail.com").unwrap());
    assert!(repo.find_by_email("juan@gmail.com").unwrap().is_none());
    assert!(!repo.delete_client("juan@gmail.com").unwrap());
}

#[test]
fn event_create_pins_start_time_and_list_returns_all() {
    let store = Store::in_memory().unwrap();
    let repo = DocEventRepository::new(&store);

    let names = ["Concierto X", "Concierto Z"];
    for (venue, name) in ["Auditorio Nacional", "Plaza de Toros"].iter().zip(names) {
        let created = repo
            .create_event(&NewEvent::new(name, None, demo_date(), *venue, 1650))
            .unwrap();
        assert_eq!(created.start_time, default_start_time());
        assert_eq!(created.start_date, demo_date());
    }

    let listed: HashSet<String> = repo
        .list_events()
        .unwrap()
        .into_iter()
        .map(|event| event.name)
        .collect();
    let expected: HashSet<String> = names.iter().map(|name| name.to_string()).collect();
    assert_eq!(listed, expected);
}

#[test]
fn ids_stay_unique_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eventify.ndb");

    let first_id = {
        let store = Store::open(&path).unwrap();
        let repo = DocClientRepository::new(&store);
        let outcome = repo
            .create_client(&NewClient::new("Ana", "ana@example.com", "4410000001"))
            .unwrap();
        match outcome {
            CreateClientOutcome::Created(client) => client.id,
            other => panic!("unexpected outcome: {other:?}"),
        }
    };

    let store = Store::open(&path).unwrap();
    let repo = DocClientRepository::new(&store);
    let outcome = repo
        .create_client(&NewClient::new("Luis", "luis@example.com", "4410000002"))
        .unwrap();
    let second_id = match outcome {
        CreateClientOutcome::Created(client) => client.id,
        other => panic!("unexpected outcome: {other:?}"),
    };

    assert!(second_id > first_id);
    assert!(repo.find_by_email("ana@example.com").unwrap().is_some());
}

#[test]
fn clear_removes_all_documents() {
    let store = Store::in_memory().unwrap();
    let clients = DocClientRepository::new(&store);
    let events = DocEventRepository::new(&store);

    clients
        .create_client(&NewClient::new("Juan", "juan@gmail.com", "4425896310"))
        .unwrap();
    events
        .create_event(&NewEvent::new("Concierto X", None, demo_date(), "Foro", 10))
        .unwrap();

    store.clear().unwrap();

    assert!(clients.find_by_email("juan@gmail.com").unwrap().is_none());
    assert!(events.list_events().unwrap().is_empty());
}
