//! Scaffolding progress rendering.

use slnforge_core::application::{ScaffoldStage, ports::ScaffoldObserver};

use crate::output::OutputManager;

/// Renders scaffolding progress through the [`OutputManager`].
///
/// Write failures are dropped; progress output never aborts a run.
pub struct ConsoleObserver {
    output: OutputManager,
}

impl ConsoleObserver {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl ScaffoldObserver for ConsoleObserver {
    fn stage_started(&self, stage: ScaffoldStage) {
        let _ = self.output.action(stage.label());
    }

    fn task(&self, message: &str) {
        let _ = self.output.task(message);
    }

    fn command(&self, line: &str) {
        let _ = self.output.exec(line);
    }

    fn note(&self, message: &str) {
        let _ = self.output.note(message);
    }
}
