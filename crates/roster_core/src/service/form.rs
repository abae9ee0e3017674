//! Form controller translating form events into record store calls.
//!
//! # Responsibility
//! - Hold raw form field values and apply keystroke pre-filters.
//! - Route submit to add or commit-edit depending on the store's edit state.
//! - Gate destructive operations behind a caller-supplied confirmation.
//!
//! # Invariants
//! - Pre-filtering never replaces store validation.
//! - Fields are reset only after a successful submit or an explicit reset.
//! - A declined confirmation performs no store call and keeps the last message.
//! - Every other action replaces the last message with its own outcome.

use crate::model::student::StudentRecord;
use crate::repo::student_repo::StudentRepository;
use crate::service::record_store::{EditState, RecordStore, StoreError};

pub const ADD_LABEL: &str = "Add Student";
pub const UPDATE_LABEL: &str = "Save Update";
pub const ADDED_MESSAGE: &str = "Student added successfully.";
pub const UPDATED_MESSAGE: &str = "Record updated successfully.";
pub const EDITING_MESSAGE: &str = "Editing record - make changes and click \"Save Update\".";
pub const DELETED_MESSAGE: &str = "Record deleted.";
pub const CLEARED_MESSAGE: &str = "All records cleared.";
pub const DELETE_PROMPT: &str = "Delete this record? This action cannot be undone.";
pub const CLEAR_ALL_PROMPT: &str = "Clear all records from storage? This action cannot be undone.";

/// Synchronous yes/no prompt run before destructive operations.
pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> ConfirmationGate for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of a form action, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The action succeeded; carries the success message.
    Done(&'static str),
    /// The action failed; carries the user-facing error message.
    Rejected(String),
    /// The confirmation gate declined; nothing happened.
    Cancelled,
}

impl FormOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Done(message) => Some(*message),
            Self::Rejected(message) => Some(message.as_str()),
            Self::Cancelled => None,
        }
    }
}

impl From<StoreError> for FormOutcome {
    fn from(value: StoreError) -> Self {
        Self::Rejected(value.user_message())
    }
}

/// Keeps only ASCII digits.
pub fn filter_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Keeps only characters a name may contain.
pub fn filter_name_chars(input: &str) -> String {
    input
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic() || ch.is_whitespace() || matches!(*ch, '\'' | '-'))
        .collect()
}

/// Raw state of the student form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    fields: StudentRecord,
    message: Option<String>,
}

impl StudentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &StudentRecord {
        &self.fields
    }

    /// Last status message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_name(&mut self, value: &str) {
        self.fields.name = filter_name_chars(value);
    }

    pub fn set_student_id(&mut self, value: &str) {
        self.fields.student_id = filter_digits(value);
    }

    pub fn set_email(&mut self, value: &str) {
        self.fields.email = value.to_string();
    }

    pub fn set_contact(&mut self, value: &str) {
        self.fields.contact = filter_digits(value);
    }

    /// Label of the submit button for the store's current mode.
    pub fn submit_label<R: StudentRepository>(&self, store: &RecordStore<R>) -> &'static str {
        match store.edit_state() {
            EditState::Idle => ADD_LABEL,
            EditState::Editing(_) => UPDATE_LABEL,
        }
    }

    /// Adds or updates a record from the current field values.
    pub fn submit<R: StudentRepository>(&mut self, store: &mut RecordStore<R>) -> FormOutcome {
        let candidate = self.fields.trimmed();
        let result = if store.edit_state().is_editing() {
            store.commit_edit(&candidate).map(|()| UPDATED_MESSAGE)
        } else {
            store.add(&candidate).map(|()| ADDED_MESSAGE)
        };

        let outcome = match result {
            Ok(message) => {
                self.fields = StudentRecord::default();
                FormOutcome::Done(message)
            }
            Err(err) => FormOutcome::from(err),
        };
        self.message = outcome.message().map(str::to_string);
        outcome
    }

    /// Starts editing `index` and pre-fills the fields from it.
    pub fn begin_edit<R: StudentRepository>(
        &mut self,
        store: &mut RecordStore<R>,
        index: usize,
    ) -> FormOutcome {
        let outcome = match store.start_edit(index) {
            Ok(record) => {
                self.fields = record;
                FormOutcome::Done(EDITING_MESSAGE)
            }
            Err(err) => FormOutcome::from(err),
        };
        self.message = outcome.message().map(str::to_string);
        outcome
    }

    /// Clears the fields and any active edit. Also the Escape action.
    pub fn reset<R: StudentRepository>(&mut self, store: &mut RecordStore<R>) {
        store.cancel_edit();
        self.fields = StudentRecord::default();
        self.message = None;
    }

    /// Deletes `index` once the gate confirms.
    pub fn delete_record<R: StudentRepository>(
        &mut self,
        store: &mut RecordStore<R>,
        index: usize,
        gate: &mut impl ConfirmationGate,
    ) -> FormOutcome {
        if !gate.confirm(DELETE_PROMPT) {
            return FormOutcome::Cancelled;
        }
        let was_editing = store.edit_state().is_editing();
        let outcome = match store.delete(index) {
            Ok(()) => {
                if was_editing && !store.edit_state().is_editing() {
                    self.fields = StudentRecord::default();
                }
                FormOutcome::Done(DELETED_MESSAGE)
            }
            Err(err) => FormOutcome::from(err),
        };
        self.message = outcome.message().map(str::to_string);
        outcome
    }

    /// Empties the collection once the gate confirms.
    pub fn clear_all_records<R: StudentRepository>(
        &mut self,
        store: &mut RecordStore<R>,
        gate: &mut impl ConfirmationGate,
    ) -> FormOutcome {
        if !gate.confirm(CLEAR_ALL_PROMPT) {
            return FormOutcome::Cancelled;
        }
        let outcome = match store.clear_all() {
            Ok(()) => {
                self.fields = StudentRecord::default();
                FormOutcome::Done(CLEARED_MESSAGE)
            }
            Err(err) => FormOutcome::from(err),
        };
        self.message = outcome.message().map(str::to_string);
        outcome
    }
}
