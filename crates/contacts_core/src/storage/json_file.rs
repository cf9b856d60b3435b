//! JSON file load/replace utilities.
//!
//! # Responsibility
//! - Load the contact array from disk with first-run tolerance.
//! - Replace the contact array atomically enough for small files.
//!
//! # Invariants
//! - The temp file handle is closed before rename on every path.
//! - A failed write removes its temp file and reports `StorageWrite`.

use super::{StoreError, StoreResult};
use crate::model::contact::{Contact, ContactKv};
use log::{error, info, warn};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const TEMP_SUFFIX: &str = ".tmp";

/// Loads every contact stored at `path`.
///
/// # Errors
/// - `StorageRead` when the file exists but cannot be read.
/// - `CorruptStore` when the content is not UTF-8 JSON holding an array of
///   objects.
/// - `MalformedRecord` when any element lacks a required string field; the
///   whole load is aborted rather than skipping the element.
pub fn load_contacts(path: &Path) -> StoreResult<Vec<Contact>> {
    let started_at = Instant::now();
    info!("event=store_load module=storage status=start");

    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(
                "event=store_load module=storage status=ok mode=fresh count=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(Vec::new());
        }
        Err(err) => {
            error!(
                "event=store_load module=storage status=error error_code=storage_read_failed error={}",
                err
            );
            return Err(StoreError::StorageRead {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    let entries: Vec<ContactKv> = serde_json::from_slice(&raw).map_err(|err| {
        error!(
            "event=store_load module=storage status=error error_code=corrupt_store line={} column={}",
            err.line(),
            err.column()
        );
        StoreError::CorruptStore {
            path: path.to_path_buf(),
            source: err,
        }
    })?;

    let contacts = entries
        .iter()
        .enumerate()
        .map(|(index, kv)| {
            Contact::from_kv(kv).map_err(|source| {
                error!(
                    "event=store_load module=storage status=error error_code=malformed_record index={}",
                    index
                );
                StoreError::MalformedRecord { index, source }
            })
        })
        .collect::<StoreResult<Vec<_>>>()?;

    info!(
        "event=store_load module=storage status=ok mode=file count={} duration_ms={}",
        contacts.len(),
        started_at.elapsed().as_millis()
    );
    Ok(contacts)
}

/// Replaces the backing file at `path` with `contacts`.
///
/// Content is written to a sibling temp file, synced, then renamed over the
/// target, so readers observe either the old or the new array.
pub fn write_contacts(path: &Path, contacts: &[Contact]) -> StoreResult<()> {
    let started_at = Instant::now();
    let result = serde_json::to_vec_pretty(contacts)
        .map_err(io::Error::from)
        .and_then(|bytes| replace_file(path, &bytes));

    match result {
        Ok(()) => {
            info!(
                "event=store_persist module=storage status=ok count={} duration_ms={}",
                contacts.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_persist module=storage status=error duration_ms={} error_code=storage_write_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(StoreError::StorageWrite {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Returns the sibling temp path used while replacing `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("contacts"));
    file_name.push(TEMP_SUFFIX);
    path.with_file_name(file_name)
}

fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path_for(path);
    let outcome = write_synced(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if outcome.is_err() {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            if cleanup.kind() != io::ErrorKind::NotFound {
                warn!(
                    "event=store_persist module=storage status=warn error_code=temp_cleanup_failed error={}",
                    cleanup
                );
            }
        }
    }
    outcome
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
