//! Command dispatch for the contacts shell.
//!
//! # Responsibility
//! - Map the add/view/find/edit/delete intents onto `ContactService`.
//! - Turn results into user-facing messages with a success flag.
//!
//! # Invariants
//! - Dispatch never panics; every failure becomes a response message.
//! - Edit/delete targets are passed as names, never parsed from list lines.

use clap::{Args, Subcommand};
use contacts_core::{ContactPatch, ContactRepository, ContactService, ServiceError};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a contact; every field is required.
    Add(AddArgs),
    /// List all contacts in insertion order.
    #[command(visible_alias = "view")]
    List,
    /// Show the first contact whose name matches (case-insensitive).
    Find {
        /// Contact name to look up.
        name: String,
    },
    /// Edit the first contact whose name matches; omitted fields are kept.
    Edit(EditArgs),
    /// Delete the first contact whose name matches.
    Delete {
        /// Contact name to delete.
        name: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[arg(long = "name", short = 'n', default_value = "")]
    pub name: String,
    #[arg(long = "phone", short = 'p', default_value = "")]
    pub phone: String,
    #[arg(long = "email", short = 'e', default_value = "")]
    pub email: String,
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    /// Name of the contact to edit.
    pub target: String,
    /// New name.
    #[arg(long = "name", short = 'n')]
    pub name: Option<String>,
    /// New phone.
    #[arg(long = "phone", short = 'p')]
    pub phone: Option<String>,
    /// New email.
    #[arg(long = "email", short = 'e')]
    pub email: Option<String>,
}

/// Outcome of one shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellResponse {
    pub ok: bool,
    pub lines: Vec<String>,
}

impl ShellResponse {
    fn success(lines: Vec<String>) -> Self {
        Self { ok: true, lines }
    }

    fn message(message: impl Into<String>) -> Self {
        Self::success(vec![message.into()])
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            lines: vec![message.into()],
        }
    }
}

/// Runs `command` against `service`.
pub fn dispatch<R: ContactRepository>(
    service: &mut ContactService<R>,
    command: &Command,
) -> ShellResponse {
    match command {
        Command::Add(args) => match service.add_contact(&args.name, &args.phone, &args.email) {
            Ok(contact) => ShellResponse::message(format!("Contact {} added.", contact.name)),
            Err(ServiceError::Validation(_)) => {
                ShellResponse::failure("Please fill in all fields.")
            }
            Err(err) => ShellResponse::failure(format!("Failed to add contact: {err}")),
        },
        Command::List => {
            let contacts = service.list_contacts();
            if contacts.is_empty() {
                ShellResponse::message("No contacts available.")
            } else {
                ShellResponse::success(contacts.iter().map(|c| c.display_line()).collect())
            }
        }
        Command::Find { name } => match service.find_contact(name) {
            Some(contact) => ShellResponse::message(contact.display_line()),
            None => ShellResponse::failure(format!("Contact {} not found.", name.trim())),
        },
        Command::Edit(args) => {
            let patch = ContactPatch {
                name: args.name.clone(),
                phone: args.phone.clone(),
                email: args.email.clone(),
            };
            match service.edit_contact(&args.target, &patch) {
                Ok(_) => {
                    ShellResponse::message(format!("Contact {} updated.", args.target.trim()))
                }
                Err(ServiceError::NotFound(_)) => {
                    ShellResponse::failure("Failed to update contact.")
                }
                Err(err) => ShellResponse::failure(format!("Failed to update contact: {err}")),
            }
        }
        Command::Delete { name } => match service.delete_contact(name) {
            Ok(()) => ShellResponse::message(format!("Contact {} deleted.", name.trim())),
            Err(ServiceError::NotFound(_)) => ShellResponse::failure("Failed to delete contact."),
            Err(err) => ShellResponse::failure(format!("Failed to delete contact: {err}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{dispatch, AddArgs, Command, EditArgs};
    use contacts_core::{ContactService, JsonContactStore};

    fn add(name: &str, phone: &str, email: &str) -> Command {
        Command::Add(AddArgs {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        })
    }

    #[test]
    fn list_on_empty_store_reports_no_contacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut service =
            ContactService::new(JsonContactStore::open(dir.path().join("c.json")).unwrap());

        let response = dispatch(&mut service, &Command::List);

        assert!(response.ok);
        assert_eq!(response.lines, vec!["No contacts available.".to_string()]);
    }

    #[test]
    fn add_requires_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let mut service =
            ContactService::new(JsonContactStore::open(dir.path().join("c.json")).unwrap());

        let response = dispatch(&mut service, &add("Alice", "", "a@x"));

        assert!(!response.ok);
        assert_eq!(response.lines, vec!["Please fill in all fields.".to_string()]);
    }

    #[test]
    fn add_list_edit_delete_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut service =
            ContactService::new(JsonContactStore::open(dir.path().join("c.json")).unwrap());

        assert!(dispatch(&mut service, &add("Alice", "1", "a@x")).ok);
        assert!(dispatch(&mut service, &add("Bob", "2", "b@x")).ok);
        let listed = dispatch(&mut service, &Command::List);
        assert_eq!(listed.lines, vec!["Alice - 1 - a@x", "Bob - 2 - b@x"]);

        let edit = Command::Edit(EditArgs {
            target: "alice".to_string(),
            name: None,
            phone: Some("9".to_string()),
            email: None,
        });
        let edited = dispatch(&mut service, &edit);
        assert!(edited.ok);
        assert_eq!(edited.lines, vec!["Contact alice updated."]);

        let found = dispatch(
            &mut service,
            &Command::Find {
                name: "ALICE".to_string(),
            },
        );
        assert_eq!(found.lines, vec!["Alice - 9 - a@x"]);

        let deleted = dispatch(
            &mut service,
            &Command::Delete {
                name: "bob".to_string(),
            },
        );
        assert!(deleted.ok);
        let missing = dispatch(
            &mut service,
            &Command::Delete {
                name: "bob".to_string(),
            },
        );
        assert!(!missing.ok);
        assert_eq!(missing.lines, vec!["Failed to delete contact."]);
    }
}
