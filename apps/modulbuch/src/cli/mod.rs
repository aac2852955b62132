//! # Modulbuch CLI Module
//!
//! This module implements the CLI interface for Modulbuch.
//!
//! ## Available Commands
//!
//! - `list` - Show all modules with their grade summary
//! - `add` - Add a new module
//! - `edit` - Edit an existing module
//! - `remove` - Remove a module
//! - `show` - Show one module in detail
//! - `status` - Show store status
//! - `init` - Initialize a new database

mod commands;

use crate::form::ValidationError;
use clap::{Parser, Subcommand};
use modulbuch_core::StorageError;
use std::path::PathBuf;
use thiserror::Error;

pub use commands::*;

// =============================================================================
// CLI ERRORS
// =============================================================================

/// Errors a CLI command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// The store could not be read, written or decoded.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The entered module data failed form validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Modulbuch - a personal module gradebook
///
/// Keeps academic modules with their number, title and up to two grades in a
/// local database and computes grade averages.
#[derive(Parser, Debug)]
#[command(name = "modulbuch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the module database
    #[arg(short = 'D', long, global = true, default_value = "modulbuch.redb")]
    pub database: PathBuf,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all modules with their grade summary
    List,

    /// Add a new module
    Add {
        /// Module number (at least 4 characters)
        #[arg(short, long)]
        number: String,

        /// Module title (at least 4 characters)
        #[arg(short, long)]
        title: String,

        /// First grade (1.0 to 6.0)
        #[arg(long)]
        grade1: Option<String>,

        /// Second grade (1.0 to 6.0)
        #[arg(long)]
        grade2: Option<String>,
    },

    /// Edit an existing module
    Edit {
        /// Id of the module to edit
        id: u64,

        /// New module number
        #[arg(short, long)]
        number: Option<String>,

        /// New module title
        #[arg(short, long)]
        title: Option<String>,

        /// New first grade; pass an empty string to clear it
        #[arg(long)]
        grade1: Option<String>,

        /// New second grade; pass an empty string to clear it
        #[arg(long)]
        grade2: Option<String>,
    },

    /// Remove a module
    Remove {
        /// Id of the module to remove
        id: u64,
    },

    /// Show one module in detail
    Show {
        /// Id of the module to show
        id: u64,
    },

    /// Show store status
    Status,

    /// Initialize a new empty database
    Init {
        /// Force initialization even if the database exists
        #[arg(short, long)]
        force: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::List) => cmd_list(&cli.database, json_mode),
        Some(Commands::Add {
            number,
            title,
            grade1,
            grade2,
        }) => cmd_add(
            &cli.database,
            json_mode,
            &number,
            &title,
            grade1.as_deref(),
            grade2.as_deref(),
        ),
        Some(Commands::Edit {
            id,
            number,
            title,
            grade1,
            grade2,
        }) => cmd_edit(
            &cli.database,
            json_mode,
            id,
            number.as_deref(),
            title.as_deref(),
            grade1.as_deref(),
            grade2.as_deref(),
        ),
        Some(Commands::Remove { id }) => cmd_remove(&cli.database, json_mode, id),
        Some(Commands::Show { id }) => cmd_show(&cli.database, json_mode, id),
        Some(Commands::Status) => cmd_status(&cli.database, json_mode),
        Some(Commands::Init { force }) => cmd_init(&cli.database, force),
        None => {
            // No subcommand - show the module list by default
            cmd_list(&cli.database, json_mode)
        }
    }
}
