// ============================================================================
// domain/errors.rs - SOLUTION MODEL ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for reporting at multiple layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Solution name must not be empty")]
    EmptySolutionName,

    #[error("Solution declares no projects")]
    NoProjects,

    #[error("Duplicate project name: {name}")]
    DuplicateProjectName { name: String },

    // ========================================================================
    // Resolution Errors (404-level equivalent)
    // ========================================================================
    #[error("Project '{project}' references unknown project '{reference}'")]
    UnresolvedReference { project: String, reference: String },

    #[error("No shippable project uses the '{template}' template")]
    NoEntryPoint { template: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptySolutionName => vec![
                "Set a non-empty \"name\" in the solution configuration".into(),
            ],
            Self::NoProjects => vec![
                "Declare at least one entry under \"projects\"".into(),
            ],
            Self::DuplicateProjectName { name } => vec![
                format!("Two projects are both named '{}'", name),
                "Project names must be unique within a solution".into(),
            ],
            Self::UnresolvedReference { project, reference } => vec![
                format!(
                    "'{}' lists '{}' in projectReferences, but no project has that name",
                    project, reference
                ),
                "References must match the \"name\" of another declared project".into(),
            ],
            Self::NoEntryPoint { template } => vec![
                format!("The container image needs a '{}' project as its entry point", template),
                "Add one, or check that it is not excluded as a test template".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptySolutionName | Self::NoProjects | Self::DuplicateProjectName { .. } => {
                ErrorCategory::Validation
            }
            Self::UnresolvedReference { .. } | Self::NoEntryPoint { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
