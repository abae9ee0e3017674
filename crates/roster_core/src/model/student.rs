//! Student record domain model.
//!
//! # Responsibility
//! - Define the canonical record shape shared by the store, the form and the
//!   persisted blob.
//! - Own field-format validation with a fixed check order.
//!
//! # Invariants
//! - Validation is ordered; the first failing check is the only one reported.
//! - Numeric fields accept ASCII digits only.
//! - Serialized field names are `name`, `studentId`, `email`, `contact`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'\-]{2,60}$").expect("valid name regex"));
static STUDENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,20}$").expect("valid student id regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,15}$").expect("valid contact regex"));

/// One managed student entry. All fields are stored as text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Display name, letters/whitespace/hyphen/apostrophe.
    pub name: String,
    /// Numeric identifier, unique across the collection on add.
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub email: String,
    /// Phone number, digits only.
    pub contact: String,
}

/// Field-format failure reported by [`StudentRecord::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentValidationError {
    /// At least one field is empty after trimming.
    MissingFields,
    InvalidName,
    InvalidId,
    InvalidEmail,
    InvalidContact,
}

impl StudentValidationError {
    /// Message shown next to the form.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::MissingFields => "All fields are required. Please fill in every field.",
            Self::InvalidName => {
                "Name must contain only letters, spaces, hyphens, or apostrophes (2-60 chars)."
            }
            Self::InvalidId => "Student ID must contain only digits.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::InvalidContact => "Contact number must be digits only and at least 10 digits.",
        }
    }

    /// Stable short code used in log events.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InvalidName => "invalid_name",
            Self::InvalidId => "invalid_id",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidContact => "invalid_contact",
        }
    }
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message())
    }
}

impl Error for StudentValidationError {}

impl StudentRecord {
    /// Builds a record from raw field values without validating them.
    pub fn new(
        name: impl Into<String>,
        student_id: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    /// Returns a copy with leading/trailing whitespace removed from every field.
    ///
    /// Form input is always trimmed before it reaches validation or storage.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            student_id: self.student_id.trim().to_string(),
            email: self.email.trim().to_string(),
            contact: self.contact.trim().to_string(),
        }
    }

    /// Checks field formats in a fixed order and reports the first failure.
    ///
    /// Order: presence, name, student id, email, contact.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        let fields = [
            self.name.as_str(),
            self.student_id.as_str(),
            self.email.as_str(),
            self.contact.as_str(),
        ];
        if fields.iter().any(|value| value.trim().is_empty()) {
            return Err(StudentValidationError::MissingFields);
        }
        if !NAME_RE.is_match(&self.name) {
            return Err(StudentValidationError::InvalidName);
        }
        if !STUDENT_ID_RE.is_match(&self.student_id) {
            return Err(StudentValidationError::InvalidId);
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(StudentValidationError::InvalidEmail);
        }
        if !CONTACT_RE.is_match(&self.contact) {
            return Err(StudentValidationError::InvalidContact);
        }
        Ok(())
    }
}
