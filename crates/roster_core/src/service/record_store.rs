//! Record store: ordered student collection plus edit-mode tracking.
//!
//! # Responsibility
//! - Own add/update/delete/clear over the in-memory collection.
//! - Enforce field validation and `studentId` uniqueness on add.
//! - Track the single active edit and keep it aligned across deletes.
//!
//! # Invariants
//! - Every successful mutation is persisted before in-memory state changes.
//! - A failed operation leaves both the collection and the edit state unchanged.
//! - Uniqueness is checked on add only; committing an edit may reuse an id.
//! - The edit cursor, when set, is always a valid index.

use crate::model::student::{StudentRecord, StudentValidationError};
use crate::repo::student_repo::{PersistenceError, StudentRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Message shown when add hits an existing student id.
pub const DUPLICATE_ID_MESSAGE: &str =
    "Student ID must be unique. A record with this Student ID already exists.";

/// Failure of a record store operation.
#[derive(Debug)]
pub enum StoreError {
    Validation(StudentValidationError),
    /// Another record already uses this student id.
    DuplicateId(String),
    IndexOutOfRange { index: usize, len: usize },
    /// `commit_edit` was called without an active edit.
    NotEditing,
    /// Persisting the next collection failed; nothing was applied.
    Storage(PersistenceError),
}

impl StoreError {
    /// Message suitable for display next to the form or table.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.user_message().to_string(),
            Self::DuplicateId(_) => DUPLICATE_ID_MESSAGE.to_string(),
            Self::IndexOutOfRange { .. } => "That record no longer exists.".to_string(),
            Self::NotEditing => "No record is being edited.".to_string(),
            Self::Storage(_) => "Could not save records. Please try again.".to_string(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(student_id) => write!(f, "duplicate student id: {student_id}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "record index {index} out of range for {len} records")
            }
            Self::NotEditing => write!(f, "no edit in progress"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StudentValidationError> for StoreError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PersistenceError> for StoreError {
    fn from(value: PersistenceError) -> Self {
        Self::Storage(value)
    }
}

/// Edit-mode state of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    /// The record at this index is being edited.
    Editing(usize),
}

impl EditState {
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Editing(index) => Some(index),
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Cursor position after the record at `removed` is deleted.
    fn after_delete(self, removed: usize) -> Self {
        match self {
            Self::Editing(index) if index == removed => Self::Idle,
            Self::Editing(index) if index > removed => Self::Editing(index - 1),
            other => other,
        }
    }
}

/// Validates a candidate record, reporting the first failing rule.
pub fn validate(candidate: &StudentRecord) -> Result<(), StudentValidationError> {
    candidate.validate()
}

/// In-memory collection of student records backed by a repository.
pub struct RecordStore<R: StudentRepository> {
    repo: R,
    students: Vec<StudentRecord>,
    edit: EditState,
}

impl<R: StudentRepository> RecordStore<R> {
    /// Creates a store seeded from the repository's stored collection.
    ///
    /// Unreadable stored data starts the store empty.
    pub fn open(repo: R) -> Self {
        let students = repo.load();
        info!(
            "event=store_open module=store status=ok count={}",
            students.len()
        );
        Self {
            repo,
            students,
            edit: EditState::Idle,
        }
    }

    /// Read-only view of the ordered collection.
    pub fn records(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.students.get(index)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Appends a new record after trimming, validation and the uniqueness check.
    pub fn add(&mut self, candidate: &StudentRecord) -> StoreResult<()> {
        let candidate = candidate.trimmed();
        if let Err(err) = candidate.validate() {
            warn!(
                "event=student_add module=store status=rejected error_code={}",
                err.code()
            );
            return Err(err.into());
        }
        if self
            .students
            .iter()
            .any(|existing| existing.student_id == candidate.student_id)
        {
            warn!(
                "event=student_add module=store status=rejected error_code=duplicate_id student_id={}",
                candidate.student_id
            );
            return Err(StoreError::DuplicateId(candidate.student_id));
        }

        let student_id = candidate.student_id.clone();
        let mut next = self.students.clone();
        next.push(candidate);
        self.persist(next)?;
        info!(
            "event=student_add module=store status=ok student_id={student_id} count={}",
            self.students.len()
        );
        Ok(())
    }

    /// Marks the record at `index` as being edited and returns a copy of it.
    ///
    /// Starting a new edit while one is active retargets the cursor.
    pub fn start_edit(&mut self, index: usize) -> StoreResult<StudentRecord> {
        let record = self.record_at(index)?.clone();
        self.edit = EditState::Editing(index);
        info!("event=student_edit module=store status=start index={index}");
        Ok(record)
    }

    /// Replaces the record under edit with `candidate` and ends the edit.
    pub fn commit_edit(&mut self, candidate: &StudentRecord) -> StoreResult<()> {
        let EditState::Editing(index) = self.edit else {
            return Err(StoreError::NotEditing);
        };
        let candidate = candidate.trimmed();
        if let Err(err) = candidate.validate() {
            warn!(
                "event=student_edit module=store status=rejected index={index} error_code={}",
                err.code()
            );
            return Err(err.into());
        }

        let mut next = self.students.clone();
        next[index] = candidate;
        self.persist(next)?;
        self.edit = EditState::Idle;
        info!("event=student_edit module=store status=ok index={index}");
        Ok(())
    }

    /// Ends any active edit without touching the collection.
    pub fn cancel_edit(&mut self) {
        if let EditState::Editing(index) = self.edit {
            info!("event=student_edit module=store status=cancelled index={index}");
        }
        self.edit = EditState::Idle;
    }

    /// Removes the record at `index`, shifting later records down by one.
    pub fn delete(&mut self, index: usize) -> StoreResult<()> {
        self.record_at(index)?;

        let mut next = self.students.clone();
        let removed = next.remove(index);
        self.persist(next)?;
        self.edit = self.edit.after_delete(index);
        info!(
            "event=student_delete module=store status=ok index={index} student_id={} count={}",
            removed.student_id,
            self.students.len()
        );
        Ok(())
    }

    /// Empties the collection and ends any active edit.
    pub fn clear_all(&mut self) -> StoreResult<()> {
        self.persist(Vec::new())?;
        self.edit = EditState::Idle;
        info!("event=student_clear module=store status=ok");
        Ok(())
    }

    fn record_at(&self, index: usize) -> StoreResult<&StudentRecord> {
        self.students.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.students.len(),
        })
    }

    fn persist(&mut self, next: Vec<StudentRecord>) -> StoreResult<()> {
        self.repo.save(&next)?;
        self.students = next;
        Ok(())
    }
}
