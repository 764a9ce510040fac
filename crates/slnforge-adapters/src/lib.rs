//! Infrastructure adapters for Slnforge.
//!
//! This crate implements the ports defined in
//! `slnforge-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod command;
pub mod config_source;
pub mod filesystem;

// Re-export commonly used adapters
pub use command::{RecordingRunner, SystemRunner};
pub use config_source::JsonConfigSource;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
