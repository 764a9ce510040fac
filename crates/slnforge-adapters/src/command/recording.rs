//! In-memory command runner for testing.

use std::sync::{Arc, RwLock};

use slnforge_core::{
    application::ports::{CommandOutput, CommandRequest, CommandRunner},
    error::SlnforgeResult,
};

/// Test command runner that records every request instead of spawning
/// processes.
///
/// Every command succeeds with empty output unless a failure has been
/// scripted with [`fail_when`](RecordingRunner::fail_when). Clones share
/// the same transcript.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<RwLock<RecordingRunnerInner>>,
}

#[derive(Debug, Default)]
struct RecordingRunnerInner {
    transcript: Vec<String>,
    failures: Vec<(String, CommandOutput)>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a failure: any command line containing `fragment` yields
    /// `output` instead of success.
    pub fn fail_when(&self, fragment: &str, output: CommandOutput) {
        let mut inner = self.inner.write().unwrap_or_else(poisoned);
        inner.failures.push((fragment.to_string(), output));
    }

    /// Rendered command lines in execution order.
    pub fn transcript(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap_or_else(poisoned);
        inner.transcript.clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, request: &CommandRequest) -> SlnforgeResult<CommandOutput> {
        let line = request.to_string();
        let mut inner = self.inner.write().unwrap_or_else(poisoned);
        inner.transcript.push(line.clone());

        let scripted = inner
            .failures
            .iter()
            .find(|(fragment, _)| line.contains(fragment))
            .map(|(_, output)| output.clone());
        Ok(scripted.unwrap_or_else(|| CommandOutput::new(Some(0), String::new(), String::new())))
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> T {
    panic!("recording runner lock poisoned")
}
