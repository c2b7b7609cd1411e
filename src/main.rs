//! agenda: a deadline-first personal task list for the terminal.
//!
//! Startup wiring only: argument parsing, logging, storage location, and
//! dispatch into the interactive menu or a subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use agenda::cli::{Cli, Command, ExportArgs};
use agenda::db::Database;
use agenda::menu;
use agenda::repo::TaskRepository;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new().create(true).append(true).open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let db_path = match cli.database {
        Some(path) => path,
        None => default_db_path()?,
    };
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }

    let db = Database::open(&db_path)?;
    info!(path = %db_path.display(), "task database ready");
    let repo = TaskRepository::new(db);

    match cli.command {
        Some(Command::Export(args)) => run_export(&repo, args)?,
        Some(Command::Menu) | None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            menu::run(&repo, stdin, stdout)?;
        }
    }

    Ok(())
}

/// Default storage location: `<user data dir>/agenda/tasks.db`.
fn default_db_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("no user data directory available")?;
    Ok(base.join("agenda").join("tasks.db"))
}

/// Run the export command
fn run_export(repo: &TaskRepository, args: ExportArgs) -> Result<()> {
    let tasks = repo.view_all()?;
    let json_output = serde_json::to_string_pretty(&tasks)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &json_output)?;
        eprintln!("Exported {} task(s) to {}", tasks.len(), path.display());
    } else {
        println!("{}", json_output);
    }

    Ok(())
}
