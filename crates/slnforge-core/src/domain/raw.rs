//! Raw solution description document.
//!
//! This is the serde mirror of the JSON document a user writes. Nothing here
//! is validated or derived; the [`resolver`](crate::domain::resolver) turns a
//! raw document into an immutable [`SolutionModel`](crate::domain::SolutionModel).
//!
//! Field names follow the document's camelCase keys.

use serde::Deserialize;

/// Top-level solution description as written in the config document.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawSolution {
    /// Solution name. Also the prefix of every project's full name.
    pub name: String,

    /// Target framework moniker passed to every project creation (e.g. `net8.0`).
    pub target_framework: String,

    /// Projects to create, in declaration order.
    pub projects: Vec<RawProject>,

    /// Static files to copy into the solution after scaffolding.
    #[serde(default)]
    pub static_files: Vec<RawStaticFile>,

    /// Container images for the generated build descriptor.
    pub docker: RawDockerImages,
}

/// One project declaration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    /// Short name, unique within the solution (e.g. `Api`).
    pub name: String,

    /// Toolchain template identifier (e.g. `webapi`, `classlib`, `xunit`).
    pub template: String,

    /// Directory the project lives under, relative to the solution root.
    /// `"."` places it directly in the root.
    pub base_dir: String,

    /// Short names of other projects this one references.
    #[serde(default)]
    pub project_references: Vec<String>,
}

/// A file to copy from the assets directory into the solution.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawStaticFile {
    /// File name inside the assets directory.
    pub name: String,

    /// Destination directory relative to the solution root. `"."` is the root.
    pub destination: String,
}

/// Base images for the two-stage container build.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawDockerImages {
    /// Image the published output runs on.
    pub runtime_image: String,

    /// Image the build stage compiles with.
    pub sdk_image: String,
}
