//! Demo driver for the Eventify storage core.
//!
//! # Responsibility
//! - Load configuration, pick a storage backend, and run the fixed CRUD
//!   demo sequence against it.
//! - Fail fast with a clear diagnostic on configuration or connectivity
//!   problems instead of attempting partial operation.

use eventify_core::db::{clear_all_records, open_db};
use eventify_core::{
    default_log_level, init_logging, AppConfig, ClientService, DocClientRepository,
    DocEventRepository, EventService, RepoResult, SqliteClientRepository, SqliteEventRepository,
    StorageBackend, Store,
};
use log::info;
use std::process::ExitCode;

mod demo;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => return fail("configuration", &err.to_string()),
    };

    if let Some(log_dir) = &config.log_dir {
        let level = config
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
            return fail("logging", &err);
        }
    }

    info!(
        "event=demo_start module=cli status=ok backend={:?} core_version={}",
        config.backend,
        eventify_core::core_version()
    );

    let result = match config.backend {
        StorageBackend::Sqlite => run_sqlite(&config),
        StorageBackend::Document => run_document(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail("storage", &err.to_string()),
    }
}

fn run_sqlite(config: &AppConfig) -> RepoResult<()> {
    let conn = open_db(&config.db_path)?;
    // Demo only: start from a clean slate like the original script.
    clear_all_records(&conn)?;

    let clients = ClientService::new(SqliteClientRepository::try_new(&conn)?);
    let events = EventService::new(SqliteEventRepository::try_new(&conn)?);
    demo::run(&clients, &events)
}

fn run_document(config: &AppConfig) -> RepoResult<()> {
    let store = Store::open(&config.db_path)?;
    // Demo only: start from a clean slate like the original script.
    store.clear()?;

    let clients = ClientService::new(DocClientRepository::new(&store));
    let events = EventService::new(DocEventRepository::new(&store));
    demo::run(&clients, &events)
}

fn fail(stage: &str, message: &str) -> ExitCode {
    eprintln!("eventify: fatal {stage} error: {message}");
    ExitCode::FAILURE
}
