//! Application layer for slnforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Toolchain**: Command construction for the external toolchain
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod stage;
pub mod toolchain;

// Re-export main services
pub use services::ScaffoldService;

// Re-export port traits (for adapter implementation)
pub use ports::{
    CommandOutput, CommandRequest, CommandRunner, Filesystem, NoopObserver, ScaffoldObserver,
};

pub use error::ApplicationError;
pub use stage::ScaffoldStage;
