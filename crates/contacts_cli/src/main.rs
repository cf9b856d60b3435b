//! Command-line shell for the contacts address book.
//!
//! # Responsibility
//! - Parse user intents and forward them to `contacts_core`.
//! - Print results and exit non-zero on failure.

mod config;
mod shell;

use anyhow::Context;
use clap::Parser;
use config::ShellConfig;
use contacts_core::{init_logging, ContactService, JsonContactStore};
use log::info;
use shell::{dispatch, Command};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "contacts", version, about = "Personal address book")]
struct Cli {
    /// Backing file (defaults to $CONTACTS_FILE, then ./contacts.json).
    #[arg(long = "file", short = 'f', global = true)]
    file: Option<PathBuf>,

    /// Directory for rolling logs (defaults to $CONTACTS_LOG_DIR; off if unset).
    #[arg(long = "log-dir", global = true)]
    log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long = "log-level", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = ShellConfig::resolve(cli.file, cli.log_dir, cli.log_level, &cwd);

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, &log_dir.to_string_lossy())
            .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;
    }
    info!(
        "event=shell_start module=cli status=ok version={}",
        contacts_core::core_version()
    );

    let store = JsonContactStore::open(&config.store_path).with_context(|| {
        format!(
            "cannot open contacts at `{}`; fix or move the file before making changes",
            config.store_path.display()
        )
    })?;
    let mut service = ContactService::new(store);

    let response = dispatch(&mut service, &cli.command);
    for line in &response.lines {
        if response.ok {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
    }

    Ok(if response.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
