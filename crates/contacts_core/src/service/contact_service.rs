//! Contact use-case service.
//!
//! # Responsibility
//! - Provide the add/view/find/edit/delete entry points used by shells.
//! - Normalize user input before it reaches the repository.
//!
//! # Invariants
//! - New contacts are trimmed and must have every field non-empty.
//! - Edit keeps the current value for any blank or absent patch field.
//! - Service APIs never bypass repository persistence contracts.

use crate::model::contact::{Contact, ContactValidationError};
use crate::repo::contact_repo::ContactRepository;
use crate::storage::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    Validation(ContactValidationError),
    Store(StoreError),
    NotFound(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound(name) => write!(f, "contact not found: {name}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ContactValidationError> for ServiceError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Replacement values for an edit; `None` or blank keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactPatch {
    fn resolve(&self, current: &Contact) -> Contact {
        Contact {
            name: pick(self.name.as_deref(), &current.name),
            phone: pick(self.phone.as_deref(), &current.phone),
            email: pick(self.email.as_deref(), &current.email),
        }
    }
}

/// Use-case service wrapper for contact operations.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Adds a contact from raw field input.
    ///
    /// # Contract
    /// - Fields are trimmed; any empty field is rejected before I/O.
    /// - Appends at the end of the list; duplicate names are accepted.
    /// - Returns the stored contact.
    pub fn add_contact(&mut self, name: &str, phone: &str, email: &str) -> ServiceResult<Contact> {
        let contact = Contact::new(name.trim(), phone.trim(), email.trim());
        contact.validate()?;
        self.repo.add(contact.clone())?;
        Ok(contact)
    }

    /// Lists every contact in insertion order.
    pub fn list_contacts(&self) -> &[Contact] {
        self.repo.list_all()
    }

    /// Finds the first contact whose name matches, ignoring case.
    pub fn find_contact(&self, name: &str) -> Option<&Contact> {
        self.repo.find_by_name(name.trim())
    }

    /// Edits the first contact named `target`.
    ///
    /// # Contract
    /// - Blank/absent patch fields keep their current value.
    /// - Returns `NotFound` without touching the backing file when no
    ///   contact matches.
    /// - Returns the contact as stored after the edit.
    pub fn edit_contact(&mut self, target: &str, patch: &ContactPatch) -> ServiceResult<Contact> {
        let target = target.trim();
        let updated = match self.repo.find_by_name(target) {
            Some(current) => patch.resolve(current),
            None => return Err(ServiceError::NotFound(target.to_string())),
        };

        let edited = self.repo.edit(
            target,
            updated.name.clone(),
            updated.phone.clone(),
            updated.email.clone(),
        )?;
        if !edited {
            return Err(ServiceError::NotFound(target.to_string()));
        }
        Ok(updated)
    }

    /// Deletes the first contact named `name`.
    pub fn delete_contact(&mut self, name: &str) -> ServiceResult<()> {
        let name = name.trim();
        if self.repo.delete(name)? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(name.to_string()))
        }
    }
}

fn pick(candidate: Option<&str>, current: &str) -> String {
    match candidate.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => current.to_string(),
    }
}
