//! Student collection persistence over key-value storage.
//!
//! # Responsibility
//! - Round-trip the whole ordered collection as one JSON blob under one key.
//! - Degrade unreadable blobs to an empty collection instead of failing.
//!
//! # Invariants
//! - `save` always writes the full collection; there are no delta writes.
//! - Array order in the blob is display order.
//! - No validation happens here.

use crate::model::student::StudentRecord;
use crate::storage::{KeyValueStorage, StorageError};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key of the collection blob.
pub const STUDENTS_KEY: &str = "students_data_v1";

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Failure while loading or saving the collection blob.
#[derive(Debug)]
pub enum PersistenceError {
    /// The stored blob is not a JSON array of student objects.
    StorageParseFailure(serde_json::Error),
    /// The collection could not be serialized.
    Serialize(serde_json::Error),
    /// The storage backend failed.
    Storage(StorageError),
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StorageParseFailure(err) => write!(f, "stored collection is malformed: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageParseFailure(err) | Self::Serialize(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for PersistenceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Load/save contract for the student collection.
pub trait StudentRepository {
    /// Loads the collection, reporting every failure.
    fn try_load(&self) -> PersistenceResult<Vec<StudentRecord>>;
    /// Overwrites the stored collection.
    fn save(&mut self, students: &[StudentRecord]) -> PersistenceResult<()>;
    /// Removes the stored collection entry.
    fn clear(&mut self) -> PersistenceResult<()>;

    /// Loads the collection, falling back to empty on any failure.
    fn load(&self) -> Vec<StudentRecord> {
        match self.try_load() {
            Ok(students) => students,
            Err(err) => {
                error!(
                    "event=students_load module=repo status=error error_code={} error={err}",
                    error_code(&err)
                );
                Vec::new()
            }
        }
    }
}

fn error_code(err: &PersistenceError) -> &'static str {
    match err {
        PersistenceError::StorageParseFailure(_) => "storage_parse_failure",
        PersistenceError::Serialize(_) => "serialize_failed",
        PersistenceError::Storage(_) => "storage_unavailable",
    }
}

/// Stores the collection as a JSON blob in any [`KeyValueStorage`].
pub struct KvStudentRepository<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> KvStudentRepository<S> {
    /// Uses the default [`STUDENTS_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STUDENTS_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: KeyValueStorage> StudentRepository for KvStudentRepository<S> {
    fn try_load(&self) -> PersistenceResult<Vec<StudentRecord>> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            debug!("event=students_load module=repo status=ok source=absent count=0");
            return Ok(Vec::new());
        };
        if raw.is_empty() {
            warn!("event=students_load module=repo status=ok source=empty_blob count=0");
            return Ok(Vec::new());
        }

        let students: Vec<StudentRecord> =
            serde_json::from_str(&raw).map_err(PersistenceError::StorageParseFailure)?;
        info!(
            "event=students_load module=repo status=ok source=storage count={}",
            students.len()
        );
        Ok(students)
    }

    fn save(&mut self, students: &[StudentRecord]) -> PersistenceResult<()> {
        let blob = serde_json::to_string(students).map_err(PersistenceError::Serialize)?;
        self.storage.set_item(&self.key, &blob).map_err(|err| {
            error!(
                "event=students_save module=repo status=error error_code=storage_unavailable error={err}"
            );
            PersistenceError::from(err)
        })?;
        debug!(
            "event=students_save module=repo status=ok count={} bytes={}",
            students.len(),
            blob.len()
        );
        Ok(())
    }

    fn clear(&mut self) -> PersistenceResult<()> {
        self.storage.remove_item(&self.key)?;
        info!("event=students_clear module=repo status=ok");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvStudentRepository, PersistenceError, StudentRepository, STUDENTS_KEY};
    use crate::model::student::StudentRecord;
    use crate::storage::InMemoryStorage;

    #[test]
    fn absent_and_empty_blobs_load_as_empty() {
        let repo = KvStudentRepository::new(InMemoryStorage::new());
        assert!(repo.try_load().unwrap().is_empty());

        let repo = KvStudentRepository::new(InMemoryStorage::with_entry(STUDENTS_KEY, ""));
        assert!(repo.try_load().unwrap().is_empty());
    }

    #[test]
    fn try_load_reports_parse_failure_but_load_recovers() {
        let repo = KvStudentRepository::new(InMemoryStorage::with_entry(STUDENTS_KEY, "{not json"));
        let err = repo.try_load().unwrap_err();
        assert!(matches!(err, PersistenceError::StorageParseFailure(_)));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn null_blob_is_treated_as_malformed() {
        let repo = KvStudentRepository::new(InMemoryStorage::with_entry(STUDENTS_KEY, "null"));
        assert!(matches!(
            repo.try_load(),
            Err(PersistenceError::StorageParseFailure(_))
        ));
    }

    #[test]
    fn clear_removes_the_entry() {
        let mut repo = KvStudentRepository::new(InMemoryStorage::new());
        repo.save(&[StudentRecord::new("Ann", "1", "a@b.co", "1234567890")])
            .unwrap();
        repo.clear().unwrap();
        assert!(repo.storage().raw(STUDENTS_KEY).is_none());
    }
}
