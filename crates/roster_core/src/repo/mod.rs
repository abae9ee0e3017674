//! Persistence layer for the student collection.
//!
//! # Responsibility
//! - Define the load/save contract consumed by the record store.
//! - Isolate blob encoding and storage-backend details from store logic.
//!
//! # Invariants
//! - Load never propagates a malformed blob to callers of `load()`.
//! - Save replaces the whole stored collection.

pub mod student_repo;
