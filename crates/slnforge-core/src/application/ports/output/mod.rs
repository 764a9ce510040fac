//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `slnforge-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::application::stage::ScaffoldStage;
use crate::error::SlnforgeResult;

// ── Command vocabulary ────────────────────────────────────────────────────────

/// A toolchain invocation.
///
/// Environment overrides are merged over the inherited process environment;
/// they never replace it. The working directory, when set, applies to this
/// invocation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    env: Vec<(String, String)>,
}

impl CommandRequest {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
    pub fn env_overrides(&self) -> &[(String, String)] {
        &self.env
    }
}

impl fmt::Display for CommandRequest {
    /// The shell-style command line, for progress echo and error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a completed toolchain invocation.
///
/// `status` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    status: Option<i32>,
    stdout: String,
    stderr: String,
}

impl CommandOutput {
    pub fn new(status: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    pub fn status(&self) -> Option<i32> {
        self.status
    }
    pub fn stdout(&self) -> &str {
        &self.stdout
    }
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

// ── Ports ─────────────────────────────────────────────────────────────────────

/// Port for running external toolchain commands.
///
/// Implemented by:
/// - `slnforge_adapters::command::SystemRunner` (production)
/// - `slnforge_adapters::command::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion, capturing its output.
    ///
    /// `Err` means the command could not be launched at all. A command that
    /// ran and exited unsuccessfully is `Ok` with a non-success status;
    /// turning that into a failure is the caller's decision.
    fn run(&self, request: &CommandRequest) -> SlnforgeResult<CommandOutput>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `slnforge_adapters::filesystem::LocalFilesystem` (production)
/// - `slnforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SlnforgeResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SlnforgeResult<()>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> SlnforgeResult<String>;

    /// Remove a file. Removing a file that does not exist is not an error.
    fn remove_file(&self, path: &Path) -> SlnforgeResult<()>;
}

/// Port for scaffolding progress reporting.
///
/// Every method defaults to a no-op so implementations subscribe only to the
/// events they care about. The CLI implements this over its console output;
/// library embedders can pass [`NoopObserver`].
pub trait ScaffoldObserver: Send + Sync {
    /// A stage is about to run.
    fn stage_started(&self, _stage: ScaffoldStage) {}

    /// A sub-step within the current stage.
    fn task(&self, _message: &str) {}

    /// A toolchain command is about to run.
    fn command(&self, _line: &str) {}

    /// An informational note within the current stage.
    fn note(&self, _message: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {}
