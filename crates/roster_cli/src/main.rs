//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `roster_core` linkage against a real database file.
//! - Report how many records are persisted at the configured path.

use roster_core::db::open_db;
use roster_core::{
    core_version, init_logging, CoreConfig, KvStudentRepository, RecordStore, SqliteStorage,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CoreConfig::from_env();
    if let Err(err) = init_logging(&config.logging) {
        eprintln!("roster_core logging=disabled error={err}");
    }

    println!("roster_core version={}", core_version());

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            log::error!("event=cli_status module=cli status=error error={err}");
            eprintln!(
                "roster_core db={} status=error error={err}",
                config.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let repo = KvStudentRepository::with_key(SqliteStorage::new(&conn), config.storage_key);
    let store = RecordStore::open(repo);
    println!(
        "roster_core db={} records={}",
        config.db_path.display(),
        store.len()
    );
    ExitCode::SUCCESS
}
