// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for slnforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and process execution concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable model**: Resolved once, accessor-only afterwards
//! - **Rich domain model**: Derivation lives in the model, not services

// Public API - what the world sees
pub mod dockerfile;
pub mod error;
pub mod model;
pub mod policy;
pub mod raw;
pub mod resolver;
pub mod templates;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use model::{DockerImages, ProjectModel, SolutionModel, StaticFileSpec};
pub use policy::AppPolicy;
pub use raw::{RawDockerImages, RawProject, RawSolution, RawStaticFile};
