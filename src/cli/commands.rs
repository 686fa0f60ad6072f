//! Command implementations for the CLI

use crate::{
    cli::Command,
    core::{ClipboardWriter, Store},
    error::{ClipError, Result},
};
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Execute the appropriate command against the store, writing user-facing
/// text to `out`
#[instrument(skip(store, clipboard, out))]
pub fn execute_command<W: Write>(
    command: &Command,
    store: &mut Store,
    clipboard: &dyn ClipboardWriter,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Add { key, value } => execute_add_command(store, key.as_deref(), value, out),
        Command::Retrieve { key } => execute_retrieve_command(store, key.as_deref(), out),
        Command::Copy { key } => execute_copy_command(store, clipboard, key.as_deref(), out),
        Command::List => execute_list_command(store, out),
        Command::Unknown(argv) => Err(ClipError::unknown_command(
            argv.first().map_or_else(String::new, |verb| verb.to_lowercase()),
        )),
    }
}

/// Execute the add command
fn execute_add_command<W: Write>(
    store: &mut Store,
    key: Option<&str>,
    value: &[String],
    out: &mut W,
) -> Result<()> {
    let Some(key) = key.filter(|_| !value.is_empty()) else {
        return Err(ClipError::validation(
            "'add' command requires both key and value",
        ));
    };
    if key.is_empty() {
        return Err(ClipError::validation("Key cannot be empty"));
    }

    let value = value.join(" ");
    store.set(key, value.as_str());
    store.save()?;

    info!("Stored key '{}' ({} entries)", key, store.len());
    writeln!(out, "Added '{value}' with key '{key}'")?;
    Ok(())
}

/// Execute the retrieve command
fn execute_retrieve_command<W: Write>(
    store: &Store,
    key: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let value = lookup(store, "retrieve", key)?;
    writeln!(out, "{value}")?;
    Ok(())
}

/// Execute the copy command
///
/// A clipboard failure is only a warning: the value is printed instead.
fn execute_copy_command<W: Write>(
    store: &Store,
    clipboard: &dyn ClipboardWriter,
    key: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let value = lookup(store, "copy", key)?;

    match clipboard.write_text(value) {
        Ok(()) => {
            writeln!(out, "Copied to OS clipboard: {value}")?;
        }
        Err(e) => {
            warn!("Clipboard write failed: {}", e);
            writeln!(out, "Warning: Failed to copy to OS clipboard: {e}")?;
            writeln!(out, "{value}")?;
        }
    }
    Ok(())
}

/// Execute the list command
fn execute_list_command<W: Write>(store: &Store, out: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "Clipboard is empty")?;
        return Ok(());
    }

    writeln!(out, "Stored keys:")?;
    for key in store.keys() {
        writeln!(out, "  - {key}")?;
    }
    Ok(())
}

fn lookup<'s>(store: &'s Store, verb: &str, key: Option<&str>) -> Result<&'s str> {
    let key = match key {
        None => {
            return Err(ClipError::validation(format!(
                "'{verb}' command requires a key"
            )));
        }
        Some("") => return Err(ClipError::validation("Key cannot be empty")),
        Some(key) => key,
    };

    debug!("Looking up key '{}'", key);
    store.get(key).ok_or_else(|| ClipError::not_found(key))
}
