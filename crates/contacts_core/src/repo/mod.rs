//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the name-keyed contact access contract.
//! - Keep backing-file details out of service and shell code.
//!
//! # Invariants
//! - Every successful mutation is flushed to the backing file before return.
//! - A failed flush reverts the in-memory mutation and surfaces the error.

pub mod contact_repo;
