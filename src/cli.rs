//! CLI definitions for agenda
//!
//! This module defines the command-line surface using clap's derive macros.
//! With no subcommand the binary drops into the interactive menu.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Deadline-first personal task list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the task database (default: <user data dir>/agenda/tasks.db)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off (default), 1/stdout, 2/stderr, or filename
    #[arg(short, long, default_value = "off", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive menu (default if no subcommand given)
    Menu,

    /// Export every task as JSON, earliest deadline first
    Export(ExportArgs),
}

/// Arguments for the export subcommand
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
