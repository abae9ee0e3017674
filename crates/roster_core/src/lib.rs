//! Core domain logic for Roster, a local student record manager.
//! This crate is the single source of truth for record invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use config::{default_log_level, CoreConfig, LoggingConfig};
pub use logging::{init_logging, logging_status};
pub use model::student::{StudentRecord, StudentValidationError};
pub use repo::student_repo::{
    KvStudentRepository, PersistenceError, PersistenceResult, StudentRepository, STUDENTS_KEY,
};
pub use service::form::{ConfirmationGate, FormOutcome, StudentForm};
pub use service::record_store::{validate, EditState, RecordStore, StoreError, StoreResult};
pub use service::table_view::{scroll_enabled, TableRow, TableView, ROW_THRESHOLD};
pub use storage::{InMemoryStorage, KeyValueStorage, SqliteStorage, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
