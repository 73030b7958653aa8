use chrono::NaiveDate;
use eventify_core::db::open_db_in_memory;
use eventify_core::{
    default_start_time, EventRepository, EventService, NewEvent, RepoError,
    SqliteEventRepository,
};
use rusqlite::Connection;
use std::collections::HashSet;

fn demo_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
}

#[test]
fn create_assigns_id_and_pins_start_time() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    let draft = NewEvent::new("Concierto X", None, demo_date(), "Auditorio Nacional", 1650);
    let created = repo.create_event(&draft).unwrap();

    assert!(created.id > 0);
    assert_eq!(created.start_time, default_start_time());

    let listed = repo.list_events().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
    assert_eq!(listed[0].start_time, default_start_time());
}

#[test]
fn list_returns_all_created_names() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    let names = ["Concierto X", "Concierto Z", "Feria del Libro"];
    for name in names {
        repo.create_event(&NewEvent::new(name, None, demo_date(), "Plaza Mayor", 100))
            .unwrap();
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
fn description_absent_and_empty_are_both_allowed() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    let without = repo
        .create_event(&NewEvent::new("Sin detalle", None, demo_date(), "Foro", 10))
        .unwrap();
    let with_empty = repo
        .create_event(&NewEvent::new(
            "Detalle vacio",
            Some(String::new()),
            demo_date(),
            "Foro",
            10,
        ))
        .unwrap();

    let listed = repo.list_events().unwrap();
    assert!(listed.iter().any(|e| e.id == without.id && e.description.is_none()));
    assert!(listed
        .iter()
        .any(|e| e.id == with_empty.id && e.description.as_deref() == Some("")));
}

#[test]
fn duplicate_names_are_accepted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    let draft = NewEvent::new("Concierto X", None, demo_date(), "Auditorio Nacional", 1650);
    let first = repo.create_event(&draft).unwrap();
    let second = repo.create_event(&draft).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repo.list_events().unwrap().len(), 2);
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(SqliteEventRepository::try_new(&conn).unwrap());

    let created = service
        .schedule_event("Concierto Z", None, demo_date(), "Plaza de Toros", 2000)
        .unwrap();
    assert_eq!(created.capacity, 2000);
    assert_eq!(created.start_time, default_start_time());

    let listed = service.list_events().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].venue, "Plaza de Toros");
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteEventRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::UninitializedConnection { .. })
    ));
}
