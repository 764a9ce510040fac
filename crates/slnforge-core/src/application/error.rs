//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::stage::ScaffoldStage;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The toolchain binary could not be started at all.
    #[error("Failed to launch `{command}`: {reason}")]
    ToolLaunch { command: String, reason: String },

    /// A toolchain command ran and exited unsuccessfully.
    #[error("'{stage}' failed: `{command}` {}", exit_summary(.status))]
    ToolFailed {
        stage: ScaffoldStage,
        command: String,
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

fn exit_summary(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("(exit status {code})"),
        None => "(terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ToolLaunch { command, .. } => vec![
                format!("Could not start: {}", command),
                "Check that the dotnet SDK is installed and on PATH".into(),
            ],
            Self::ToolFailed { command, stderr, stdout, .. } => {
                let mut suggestions = vec![format!("Command: {}", command)];
                let output = if stderr.trim().is_empty() { stdout } else { stderr };
                if !output.trim().is_empty() {
                    suggestions.push(format!("Toolchain output:\n{}", output.trim_end()));
                }
                suggestions
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ToolLaunch { .. } | Self::ToolFailed { .. } => ErrorCategory::Toolchain,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
