//! Contact record and its key-value wire shape.
//!
//! # Responsibility
//! - Provide the `Contact` value object (`name`, `phone`, `email`).
//! - Convert between `Contact` and the plain key-value map stored on disk.
//!
//! # Invariants
//! - `to_kv()` emits exactly the keys `name`, `phone`, `email`.
//! - `from_kv()` requires all three keys as strings and ignores extra keys.
//! - Presence validation is applied on insert paths only, never on load.

use serde::Serialize;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key-value representation of one contact in the backing file.
pub type ContactKv = Map<String, Value>;

pub const FIELD_NAME: &str = "name";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_EMAIL: &str = "email";

/// One address book entry.
///
/// The derived `Serialize` writes the same object as `to_kv()`; storage uses
/// it to encode whole contact lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Display name, also used as the case-insensitive lookup key.
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Raised when a persisted key-value map cannot become a `Contact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecordError {
    MissingField(&'static str),
    InvalidFieldType(&'static str),
}

impl Display for MalformedRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "contact record is missing `{field}`"),
            Self::InvalidFieldType(field) => {
                write!(f, "contact record field `{field}` must be a string")
            }
        }
    }
}

impl Error for MalformedRecordError {}

/// Presence-only validation failure for user-supplied contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyField(&'static str),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "contact `{field}` cannot be empty"),
        }
    }
}

impl Error for ContactValidationError {}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Serializes this contact into its on-disk key-value map.
    pub fn to_kv(&self) -> ContactKv {
        let mut kv = ContactKv::new();
        kv.insert(FIELD_NAME.to_string(), Value::String(self.name.clone()));
        kv.insert(FIELD_PHONE.to_string(), Value::String(self.phone.clone()));
        kv.insert(FIELD_EMAIL.to_string(), Value::String(self.email.clone()));
        kv
    }

    /// Rebuilds a contact from a key-value map.
    ///
    /// # Errors
    /// - `MissingField` when any of `name|phone|email` is absent.
    /// - `InvalidFieldType` when a required key holds a non-string value.
    pub fn from_kv(kv: &ContactKv) -> Result<Self, MalformedRecordError> {
        let name = required_text(kv, FIELD_NAME)?;
        let phone = required_text(kv, FIELD_PHONE)?;
        let email = required_text(kv, FIELD_EMAIL)?;
        Ok(Self { name, phone, email })
    }

    /// Checks that every field is non-blank.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        for (field, value) in [
            (FIELD_NAME, &self.name),
            (FIELD_PHONE, &self.phone),
            (FIELD_EMAIL, &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(ContactValidationError::EmptyField(field));
            }
        }
        Ok(())
    }

    /// Case-insensitive exact comparison against the lookup key.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Renders `name - phone - email` for list views.
    pub fn display_line(&self) -> String {
        format!("{} - {} - {}", self.name, self.phone, self.email)
    }
}

fn required_text(kv: &ContactKv, field: &'static str) -> Result<String, MalformedRecordError> {
    match kv.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(MalformedRecordError::InvalidFieldType(field)),
        None => Err(MalformedRecordError::MissingField(field)),
    }
}
