//! Contact repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Own the ordered in-memory contact list and its backing file.
//! - Provide add/find/list/edit/delete with first-match name semantics.
//!
//! # Invariants
//! - Insertion order is preserved; duplicate names are allowed.
//! - Lookups compare names case-insensitively and pick the first match.
//! - Memory and disk agree after every call, successful or not.

use crate::model::contact::Contact;
use crate::storage::{load_contacts, write_contacts, StoreResult};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Repository interface for name-keyed contact operations.
pub trait ContactRepository {
    fn add(&mut self, contact: Contact) -> StoreResult<()>;
    fn find_by_name(&self, name: &str) -> Option<&Contact>;
    fn list_all(&self) -> &[Contact];
    fn edit(
        &mut self,
        target_name: &str,
        new_name: String,
        new_phone: String,
        new_email: String,
    ) -> StoreResult<bool>;
    fn delete(&mut self, name: &str) -> StoreResult<bool>;
}

/// Write-through contact store backed by one JSON file.
#[derive(Debug)]
pub struct JsonContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl JsonContactStore {
    /// Opens the store at `path`, loading any existing contacts.
    ///
    /// A missing file yields an empty store. A corrupt or malformed file
    /// fails construction, so no write can ever replace it.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let contacts = load_contacts(&path)?;
        Ok(Self { path, contacts })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Rewrites the backing file from the current in-memory list.
    pub fn persist(&self) -> StoreResult<()> {
        write_contacts(&self.path, &self.contacts)
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.matches_name(name))
    }
}

impl ContactRepository for JsonContactStore {
    fn add(&mut self, contact: Contact) -> StoreResult<()> {
        self.contacts.push(contact);
        if let Err(err) = self.persist() {
            self.contacts.pop();
            warn!(
                "event=contact_add module=repo status=rolled_back error_code={}",
                err.code()
            );
            return Err(err);
        }
        info!(
            "event=contact_add module=repo status=ok count={}",
            self.contacts.len()
        );
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.matches_name(name))
    }

    fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    fn edit(
        &mut self,
        target_name: &str,
        new_name: String,
        new_phone: String,
        new_email: String,
    ) -> StoreResult<bool> {
        let Some(index) = self.position_by_name(target_name) else {
            info!("event=contact_edit module=repo status=not_found");
            return Ok(false);
        };

        let replacement = Contact {
            name: new_name,
            phone: new_phone,
            email: new_email,
        };
        let previous = std::mem::replace(&mut self.contacts[index], replacement);
        if let Err(err) = self.persist() {
            self.contacts[index] = previous;
            warn!(
                "event=contact_edit module=repo status=rolled_back index={} error_code={}",
                index,
                err.code()
            );
            return Err(err);
        }
        info!("event=contact_edit module=repo status=ok index={}", index);
        Ok(true)
    }

    fn delete(&mut self, name: &str) -> StoreResult<bool> {
        let Some(index) = self.position_by_name(name) else {
            info!("event=contact_delete module=repo status=not_found");
            return Ok(false);
        };

        let removed = self.contacts.remove(index);
        if let Err(err) = self.persist() {
            self.contacts.insert(index, removed);
            warn!(
                "event=contact_delete module=repo status=rolled_back index={} error_code={}",
                index,
                err.code()
            );
            return Err(err);
        }
        info!(
            "event=contact_delete module=repo status=ok index={} count={}",
            index,
            self.contacts.len()
        );
        Ok(true)
    }
}
