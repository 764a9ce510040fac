//! The resolved solution model.
//!
//! A [`SolutionModel`] is the fully-derived, validated description of the
//! solution to scaffold. It is produced once by the
//! [`resolver`](crate::domain::resolver) and never mutated afterwards: all
//! fields are private, there are no setters, and every derived value is
//! computed at construction. Two resolutions of the same raw document compare
//! equal.
//!
//! # Path coordinates
//!
//! `dir` and `path` on a project are *solution-layout* coordinates: strings
//! joined with `/`, relative to the solution root. They are fed verbatim to
//! the toolchain and into the build descriptor, so their rendering must not
//! depend on the host path separator. Host filesystem paths are formed by
//! joining these onto the solution root at execution time.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use crate::domain::raw::{RawDockerImages, RawProject, RawStaticFile};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-resolved solution description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionModel {
    name: String,
    target_framework: String,
    projects: Vec<ProjectModel>,
    static_files: Vec<StaticFileSpec>,
    docker: DockerImages,
}

impl SolutionModel {
    pub(crate) fn new(
        name: String,
        target_framework: String,
        projects: Vec<ProjectModel>,
        static_files: Vec<StaticFileSpec>,
        docker: DockerImages,
    ) -> Self {
        Self {
            name,
            target_framework,
            projects,
            static_files,
            docker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn target_framework(&self) -> &str {
        &self.target_framework
    }
    /// Projects in declaration order. Order is load-bearing: stages iterate it.
    pub fn projects(&self) -> &[ProjectModel] {
        &self.projects
    }
    pub fn static_files(&self) -> &[StaticFileSpec] {
        &self.static_files
    }
    pub fn docker(&self) -> &DockerImages {
        &self.docker
    }

    /// Look up a project by its short name.
    pub fn project_named(&self, name: &str) -> Option<&ProjectModel> {
        self.projects.iter().find(|p| p.name() == name)
    }
}

// ── Project ───────────────────────────────────────────────────────────────────

/// One resolved project, with all derived fields materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectModel {
    name: String,
    template: String,
    base_dir: String,
    project_references: Vec<String>,
    full_name: String,
    file_name: String,
    dir: String,
    path: String,
    framework: String,
}

impl ProjectModel {
    /// Derive a project from its raw declaration.
    ///
    /// - `full_name` is `{solution}.{name}`
    /// - `file_name` is `{full_name}.{extension}`
    /// - `dir` is `base_dir` joined with `full_name`
    /// - `path` is `dir` joined with `file_name`
    /// - `framework` is denormalized from the solution's target framework
    pub(crate) fn derive(
        raw: &RawProject,
        solution_name: &str,
        target_framework: &str,
        project_file_extension: &str,
    ) -> Self {
        let full_name = format!("{}.{}", solution_name, raw.name);
        let file_name = format!("{}.{}", full_name, project_file_extension);
        let dir = join_layout(&raw.base_dir, &full_name);
        let path = join_layout(&dir, &file_name);

        Self {
            name: raw.name.clone(),
            template: raw.template.clone(),
            base_dir: raw.base_dir.clone(),
            project_references: raw.project_references.clone(),
            full_name,
            file_name,
            dir,
            path,
            framework: target_framework.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn template(&self) -> &str {
        &self.template
    }
    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }
    pub fn project_references(&self) -> &[String] {
        &self.project_references
    }
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
    /// Project directory, relative to the solution root.
    pub fn dir(&self) -> &str {
        &self.dir
    }
    /// Project file path, relative to the solution root.
    pub fn path(&self) -> &str {
        &self.path
    }
    pub fn framework(&self) -> &str {
        &self.framework
    }
}

// ── Static files ──────────────────────────────────────────────────────────────

/// A file to copy from the assets directory into the scaffolded solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFileSpec {
    name: String,
    destination: String,
}

impl StaticFileSpec {
    pub(crate) fn new(name: String, destination: String) -> Self {
        Self { name, destination }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    /// Destination directory relative to the solution root. `"."` is the root.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl From<&RawStaticFile> for StaticFileSpec {
    fn from(raw: &RawStaticFile) -> Self {
        Self::new(raw.name.clone(), raw.destination.clone())
    }
}

// ── Container images ──────────────────────────────────────────────────────────

/// Base images for the generated two-stage build descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerImages {
    runtime_image: String,
    sdk_image: String,
}

impl DockerImages {
    pub(crate) fn new(runtime_image: String, sdk_image: String) -> Self {
        Self {
            runtime_image,
            sdk_image,
        }
    }

    pub fn runtime_image(&self) -> &str {
        &self.runtime_image
    }
    pub fn sdk_image(&self) -> &str {
        &self.sdk_image
    }
}

impl From<&RawDockerImages> for DockerImages {
    fn from(raw: &RawDockerImages) -> Self {
        Self::new(raw.runtime_image.clone(), raw.sdk_image.clone())
    }
}

// ── Layout path joining ───────────────────────────────────────────────────────

/// Join two solution-layout segments with `/`, collapsing a `.` or empty base.
///
/// `join_layout(".", "Shop.Api")` is `Shop.Api`, not `./Shop.Api`; the
/// toolchain and the build descriptor both expect root-relative paths with no
/// leading dot segment.
pub(crate) fn join_layout(base: &str, leaf: &str) -> String {
    if base.is_empty() || base == "." {
        return leaf.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), leaf)
}
