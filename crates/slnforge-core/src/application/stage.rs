//! The fixed scaffolding stage sequence.

use std::fmt;

/// One stage of the scaffolding workflow, in execution order.
///
/// The sequence is fixed: every run performs all eight stages in this order,
/// and the first failing stage aborts the remainder. Stage identity travels
/// with toolchain failures so an error names where the run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStage {
    CreateSolutionRoot,
    CreateSolutionContainer,
    CreateProjects,
    RemovePlaceholders,
    WireReferences,
    RegisterProjects,
    CopyStaticFiles,
    WriteDockerfile,
}

impl ScaffoldStage {
    /// All stages in execution order.
    pub const ALL: [ScaffoldStage; 8] = [
        Self::CreateSolutionRoot,
        Self::CreateSolutionContainer,
        Self::CreateProjects,
        Self::RemovePlaceholders,
        Self::WireReferences,
        Self::RegisterProjects,
        Self::CopyStaticFiles,
        Self::WriteDockerfile,
    ];

    /// Human-readable banner for progress output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CreateSolutionRoot => "Create solution folder",
            Self::CreateSolutionContainer => "Create solution file",
            Self::CreateProjects => "Create projects",
            Self::RemovePlaceholders => "Remove auto-generated template files",
            Self::WireReferences => "Add project references",
            Self::RegisterProjects => "Add projects to solution",
            Self::CopyStaticFiles => "Copy static files",
            Self::WriteDockerfile => "Generate Dockerfile",
        }
    }
}

impl fmt::Display for ScaffoldStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
