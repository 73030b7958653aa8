//! Fixed demo sequence exercising both repositories.
//!
//! Mirrors the original demonstration script step by step; not reusable
//! logic. The sequence is strictly sequential and backend-agnostic.

use chrono::NaiveDate;
use eventify_core::{
    ClientRepository, ClientService, CreateClientOutcome, EventRepository, EventService,
    RepoResult,
};

const DEMO_EMAIL: &str = "juan@gmail.com";

/// Runs the demo sequence against the injected services.
pub fn run<C, E>(clients: &ClientService<C>, events: &EventService<E>) -> RepoResult<()>
where
    C: ClientRepository,
    E: EventRepository,
{
    println!("\n1. Creating client...");
    match clients.register_client("Juan", DEMO_EMAIL, "4425896310")? {
        CreateClientOutcome::Created(client) => {
            println!(
                "Client created: name={}, email={}, phone={}",
                client.name, client.email, client.phone
            );
        }
        CreateClientOutcome::DuplicateEmail { email } => {
            println!("Error: email {email} already exists");
        }
    }

    println!("\n2. Creating client with the same email...");
    match clients.register_client("Juan Again", DEMO_EMAIL, "4425896311")? {
        CreateClientOutcome::Created(client) => {
            println!("Client created unexpectedly: email={}", client.email);
        }
        CreateClientOutcome::DuplicateEmail { email } => {
            println!("Error: email {email} already exists");
        }
    }

    println!("\n3. Finding client by email...");
    match clients.find_by_email(DEMO_EMAIL)? {
        Some(client) => println!(
            "Found: name={}, email={}, phone={}",
            client.name, client.email, client.phone
        ),
        None => println!("Not found"),
    }

    println!("\n4. Updating phone...");
    if clients.update_phone(DEMO_EMAIL, "4420000000")? {
        if let Some(updated) = clients.find_by_email(DEMO_EMAIL)? {
            println!("Phone updated: {}", updated.phone);
        }
    }

    println!("\n5. Registering event...");
    let date = demo_date();
    let event = events.schedule_event("Concierto X", None, date, "Auditorio Nacional", 1650)?;
    println!("Event created: {event:?}");

    println!("\n6. Registering another event...");
    let event = events.schedule_event("Concierto Z", None, date, "Plaza de Toros", 2000)?;
    println!("Event created: {event:?}");

    println!("\n7. Listing all events...");
    for event in events.list_events()? {
        println!(" - {}, {}, {}", event.name, event.venue, event.start_date);
    }

    println!("\n8. Deleting client...");
    if clients.delete_client(DEMO_EMAIL)? {
        println!("Client deleted");
    }

    println!("\n9. Verifying deletion...");
    println!("{:?}", clients.find_by_email(DEMO_EMAIL)?);

    Ok(())
}

fn demo_date() -> NaiveDate {
    // Same fixed date the original demo used.
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap_or_default()
}
