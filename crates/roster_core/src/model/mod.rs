//! Domain model for managed student records.
//!
//! # Responsibility
//! - Define the record shape persisted in the collection blob.
//! - Keep field-format rules next to the data they constrain.
//!
//! # Invariants
//! - Records entering the collection through the store have passed
//!   `StudentRecord::validate()`.

pub mod student;
