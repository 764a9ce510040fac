//! slnforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the slnforge
//! solution scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          slnforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Driven: Runner, Filesystem, Observer) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    slnforge-adapters (Infrastructure)   │
//! │  (SystemRunner, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (SolutionModel, resolver, dockerfile)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use slnforge_core::{
//!     application::{NoopObserver, ScaffoldService},
//!     domain::{resolver, templates},
//! };
//!
//! # fn demo(raw: slnforge_core::domain::RawSolution,
//! #         policy: slnforge_core::domain::AppPolicy,
//! #         runner: Box<dyn slnforge_core::application::CommandRunner>,
//! #         filesystem: Box<dyn slnforge_core::application::Filesystem>)
//! #         -> slnforge_core::error::SlnforgeResult<()> {
//! // 1. Resolve the immutable model from the raw document
//! let model = resolver::resolve(&raw, templates::PROJECT_FILE_EXTENSION)?;
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ScaffoldService::new(runner, filesystem, Box::new(NoopObserver));
//! let solution_dir = service.execute(&model, &policy, "resources/static-files".as_ref())?;
//! # let _ = solution_dir;
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService, ScaffoldStage,
        ports::{
            CommandOutput, CommandRequest, CommandRunner, Filesystem, NoopObserver,
            ScaffoldObserver,
        },
    };
    pub use crate::domain::{
        AppPolicy, DockerImages, ProjectModel, RawSolution, SolutionModel, StaticFileSpec,
    };
    pub use crate::error::{SlnforgeError, SlnforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
