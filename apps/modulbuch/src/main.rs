//! # Modulbuch
//!
//! The main binary for the Modulbuch personal gradebook.
//!
//! This application keeps academic modules (number, title, up to two grades)
//! in a local embedded database and computes grade averages. The CLI layer
//! validates form input and drives the three store operations in
//! `modulbuch-core`; the core itself owns no user-facing text.
//!
//! ## Usage
//!
//! ```bash
//! # Add a module
//! modulbuch add -n M335 -t "Mobile Apps" --grade1 5.0 --grade2 4.5
//!
//! # Show the module list with averages
//! modulbuch list
//!
//! # Edit and remove
//! modulbuch edit 1 --grade2 5.5
//! modulbuch remove 1
//! ```

use clap::Parser;
use modulbuch::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing — MODULBUCH_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("MODULBUCH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "modulbuch=debug"
    } else {
        "modulbuch=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
