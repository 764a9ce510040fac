//! Command construction for the external `dotnet` toolchain.
//!
//! Builders only; nothing here runs anything. Every request is executed by
//! the orchestrator with the solution root as working directory, so all paths
//! passed to the toolchain are solution-relative layout coordinates.

use crate::application::ports::CommandRequest;
use crate::domain::ProjectModel;

/// The toolchain binary, resolved through PATH.
pub const DOTNET: &str = "dotnet";

/// `dotnet new sln -n {name}`
pub fn new_solution(name: &str) -> CommandRequest {
    CommandRequest::new(DOTNET).args(["new", "sln", "-n", name])
}

/// `dotnet new {template} -f {framework} -n {full_name} -o {dir}`
pub fn new_project(project: &ProjectModel) -> CommandRequest {
    CommandRequest::new(DOTNET).args([
        "new",
        project.template(),
        "-f",
        project.framework(),
        "-n",
        project.full_name(),
        "-o",
        project.dir(),
    ])
}

/// `dotnet add {from} reference {to}`
pub fn add_reference(from: &ProjectModel, to: &ProjectModel) -> CommandRequest {
    CommandRequest::new(DOTNET).args(["add", from.path(), "reference", to.path()])
}

/// `dotnet sln add {path}`
pub fn register_project(project: &ProjectModel) -> CommandRequest {
    CommandRequest::new(DOTNET).args(["sln", "add", project.path()])
}

// ── Tests ─────────────────────────────────────────────────────────────────────
