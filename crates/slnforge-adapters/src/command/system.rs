//! System process adapter for the external toolchain.

use std::process::Command;

use tracing::debug;

use slnforge_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRequest, CommandRunner},
    },
    error::SlnforgeResult,
};

/// Production command runner using `std::process::Command`.
///
/// Environment overrides are merged over the inherited environment; the
/// working directory applies per invocation only. The process-wide working
/// directory is never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system command runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, request: &CommandRequest) -> SlnforgeResult<CommandOutput> {
        let mut command = Command::new(request.program());
        command.args(request.arguments());
        if let Some(cwd) = request.cwd() {
            command.current_dir(cwd);
        }
        command.envs(request.env_overrides().iter().map(|(k, v)| (k, v)));

        debug!(command = %request, "Spawning toolchain process");
        let output = command.output().map_err(|e| ApplicationError::ToolLaunch {
            command: request.to_string(),
            reason: e.to_string(),
        })?;

        // `code()` is None when the process was terminated by a signal.
        Ok(CommandOutput::new(
            output.status.code(),
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        ))
    }
}
