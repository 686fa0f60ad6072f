//! Core functionality for the clipboard store
//!
//! Contains the persistent key-value store and the OS clipboard adapter.

pub mod clipboard;
pub mod store;

pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use store::Store;
