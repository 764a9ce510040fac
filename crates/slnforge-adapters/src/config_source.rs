//! Static configuration source.
//!
//! Two JSON documents drive a run: the application policy (where solutions
//! land, which templates count as test projects) and the solution
//! description (what to scaffold). Both are loaded once at startup and
//! passed down by value; nothing re-reads configuration mid-run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use slnforge_core::{
    domain::{AppPolicy, RawSolution},
    error::{SlnforgeError, SlnforgeResult},
};

/// Loads the application policy and solution description from JSON files.
#[derive(Debug, Clone)]
pub struct JsonConfigSource {
    app_config: PathBuf,
    solution_config: PathBuf,
}

/// Wire shape of the application policy document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolicyDocument {
    solution_output_dir: PathBuf,
    test_project_templates: Vec<String>,
}

impl JsonConfigSource {
    /// Create a source reading from the two given document paths.
    pub fn new(app_config: impl Into<PathBuf>, solution_config: impl Into<PathBuf>) -> Self {
        Self {
            app_config: app_config.into(),
            solution_config: solution_config.into(),
        }
    }

    /// Load and parse both documents.
    pub fn load(&self) -> SlnforgeResult<(AppPolicy, RawSolution)> {
        let policy: PolicyDocument = self.parse_document(&self.app_config)?;
        let solution: RawSolution = self.parse_document(&self.solution_config)?;
        Ok((
            AppPolicy::new(policy.solution_output_dir, policy.test_project_templates),
            solution,
        ))
    }

    fn parse_document<T: DeserializeOwned>(&self, path: &Path) -> SlnforgeResult<T> {
        let text = fs::read_to_string(path).map_err(|e| SlnforgeError::Configuration {
            message: format!("Cannot read '{}': {}", path.display(), e),
        })?;
        serde_json::from_str(&text).map_err(|e| SlnforgeError::Configuration {
            message: format!("Cannot parse '{}': {}", path.display(), e),
        })
    }
}
