//! # si-core
//!
//! Core domain models and ports for StashIt.
//!
//! This crate contains pure stack logic without any infrastructure dependencies.
//! Everything that touches the clipboard, the file manager, the filesystem or the
//! key-value store is expressed as a port in [`ports`].

pub mod clipboard;
pub mod config;
pub mod drop;
pub mod error;
pub mod ids;
pub mod path;
pub mod ports;
pub mod stack;

// Re-export commonly used types at the crate root
pub use clipboard::ClipboardPayload;
pub use config::StashConfig;
pub use drop::{DropFailure, DropMode, DropReport};
pub use error::StashError;
pub use ids::ItemId;
pub use path::normalize_path;
pub use stack::{FileItem, Stack, StackItem, TextItem, TimestampMs};
