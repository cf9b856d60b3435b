//! Core domain logic for the contacts address book.
//! This crate owns the contact record, its backing file and every
//! add/find/edit/delete rule; shells only translate user intents.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, LoggingError};
pub use model::contact::{Contact, ContactKv, ContactValidationError, MalformedRecordError};
pub use repo::contact_repo::{ContactRepository, JsonContactStore};
pub use service::contact_service::{ContactPatch, ContactService, ServiceError, ServiceResult};
pub use storage::{StoreError, StoreResult, DEFAULT_STORE_FILE_NAME};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
