//! Core use-case services.
//!
//! # Responsibility
//! - Own the record collection and its edit state (`record_store`).
//! - Adapt form and table interactions onto store calls (`form`, `table_view`).
//!
//! # Invariants
//! - Presentation adapters never mutate the collection except through the store.

pub mod form;
pub mod record_store;
pub mod table_view;
