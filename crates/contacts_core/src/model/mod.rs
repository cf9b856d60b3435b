//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record shared by store, service and shell.
//! - Own the key-value shape used by the backing file.
//!
//! # Invariants
//! - `name` is the lookup key; uniqueness is not enforced by the model.
//! - Field formats are free-form text and never validated beyond presence.

pub mod contact;
