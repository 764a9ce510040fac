//! Application policy document.
//!
//! Policy is the half of configuration that belongs to the tool installation
//! rather than to any one solution: where solutions are created, and which
//! toolchain templates count as test projects. It is loaded once at startup
//! and passed by reference; there is no global policy state.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Installation-level policy, deserialized from the app config document.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppPolicy {
    solution_output_dir: PathBuf,
    test_project_templates: Vec<String>,
}

impl AppPolicy {
    pub fn new(
        solution_output_dir: impl Into<PathBuf>,
        test_project_templates: Vec<String>,
    ) -> Self {
        Self {
            solution_output_dir: solution_output_dir.into(),
            test_project_templates,
        }
    }

    /// Directory under which solution roots are created.
    pub fn solution_output_dir(&self) -> &Path {
        &self.solution_output_dir
    }

    /// Templates whose projects are test-only and never shipped.
    pub fn test_project_templates(&self) -> &[String] {
        &self.test_project_templates
    }

    /// Whether a toolchain template marks a project as test-only.
    pub fn is_test_template(&self, template: &str) -> bool {
        self.test_project_templates.iter().any(|t| t == template)
    }
}
