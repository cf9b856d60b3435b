//! Shell configuration resolution.
//!
//! # Responsibility
//! - Decide which backing file and log directory a run uses.
//!
//! # Invariants
//! - Precedence is flag, then environment variable, then default.
//! - Blank environment values are treated as unset.

use contacts_core::{default_log_level, DEFAULT_STORE_FILE_NAME};
use std::path::{Path, PathBuf};

pub const STORE_FILE_ENV: &str = "CONTACTS_FILE";
pub const LOG_DIR_ENV: &str = "CONTACTS_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "CONTACTS_LOG_LEVEL";

/// Effective settings for one shell invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub store_path: PathBuf,
    /// `None` leaves logging disabled.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl ShellConfig {
    /// Resolves settings from flags and the process environment.
    pub fn resolve(
        file: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        log_level: Option<String>,
        cwd: &Path,
    ) -> Self {
        Self::resolve_with(file, log_dir, log_level, cwd, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        file: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        log_level: Option<String>,
        cwd: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let env_value = |key: &str| {
            env(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let store_path = file
            .or_else(|| env_value(STORE_FILE_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE_NAME));
        let log_dir = log_dir
            .or_else(|| env_value(LOG_DIR_ENV).map(PathBuf::from))
            .map(|dir| absolutize(cwd, dir));
        let log_level = log_level
            .or_else(|| env_value(LOG_LEVEL_ENV))
            .unwrap_or_else(|| default_log_level().to_string());

        Self {
            store_path,
            log_dir,
            log_level,
        }
    }
}

// Logging only accepts absolute directories.
fn absolutize(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{ShellConfig, LOG_DIR_ENV, STORE_FILE_ENV};
    use std::path::{Path, PathBuf};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_to_contacts_json_without_logging() {
        let config = ShellConfig::resolve_with(None, None, None, Path::new("/home/u"), no_env);
        assert_eq!(config.store_path, PathBuf::from("contacts.json"));
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn flag_wins_over_environment() {
        let env = |key: &str| (key == STORE_FILE_ENV).then(|| "/env/book.json".to_string());
        let config = ShellConfig::resolve_with(
            Some(PathBuf::from("/flag/book.json")),
            None,
            None,
            Path::new("/"),
            env,
        );
        assert_eq!(config.store_path, PathBuf::from("/flag/book.json"));
    }

    #[test]
    fn blank_environment_is_ignored_and_log_dir_is_made_absolute() {
        let env = |key: &str| match key {
            STORE_FILE_ENV => Some("   ".to_string()),
            LOG_DIR_ENV => Some(" logs ".to_string()),
            _ => None,
        };
        let config =
            ShellConfig::resolve_with(None, None, Some("warn".into()), Path::new("/work"), env);
        assert_eq!(config.store_path, PathBuf::from("contacts.json"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/work/logs")));
        assert_eq!(config.log_level, "warn");
    }
}
