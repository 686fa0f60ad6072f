//! # Clipboard Store
//!
//! A minimal persistent key-value store driven from the command line, with
//! the option of pushing a stored value onto the operating system clipboard.
//!
//! ## Features
//!
//! - JSON-backed store restored at start and rewritten after every change
//! - Atomic replacement of the store file on save
//! - Best-effort OS clipboard writes with a printed fallback
//! - Case-insensitive subcommands, verbatim keys and values
//!
//! ## Example
//!
//! ```no_run
//! use clipboard_store::core::Store;
//!
//! let mut store = Store::load("clipboard.json")?;
//! store.set("greeting", "hello world");
//! store.save()?;
//! assert_eq!(store.get("greeting"), Some("hello world"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr; stdout carries command output only.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
