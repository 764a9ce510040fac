//! Raw document to solution model resolution.
//!
//! Resolution is the single construction path for [`SolutionModel`]: validate
//! the raw document, then derive every computed field exactly once. Pure by
//! contract; no I/O, no clock, no environment. Resolving the same document
//! twice yields equal models.

use std::collections::HashSet;

use crate::domain::error::DomainError;
use crate::domain::model::{DockerImages, ProjectModel, SolutionModel, StaticFileSpec};
use crate::domain::raw::RawSolution;

/// Resolve a raw solution document into an immutable [`SolutionModel`].
///
/// `project_file_extension` is the extension (without dot) appended to each
/// project's full name to form its project file name.
pub fn resolve(
    raw: &RawSolution,
    project_file_extension: &str,
) -> Result<SolutionModel, DomainError> {
    validate(raw)?;

    let projects = raw
        .projects
        .iter()
        .map(|p| ProjectModel::derive(p, &raw.name, &raw.target_framework, project_file_extension))
        .collect();

    let static_files = raw.static_files.iter().map(StaticFileSpec::from).collect();

    Ok(SolutionModel::new(
        raw.name.clone(),
        raw.target_framework.clone(),
        projects,
        static_files,
        DockerImages::from(&raw.docker),
    ))
}

fn validate(raw: &RawSolution) -> Result<(), DomainError> {
    if raw.name.trim().is_empty() {
        return Err(DomainError::EmptySolutionName);
    }
    if raw.projects.is_empty() {
        return Err(DomainError::NoProjects);
    }

    let mut seen = HashSet::new();
    for project in &raw.projects {
        if !seen.insert(project.name.as_str()) {
            return Err(DomainError::DuplicateProjectName {
                name: project.name.clone(),
            });
        }
    }

    Ok(())
}
