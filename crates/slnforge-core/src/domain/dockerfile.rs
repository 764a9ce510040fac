//! Deployment descriptor synthesis.
//!
//! Produces the two-stage container build file for a resolved solution. Pure
//! text generation; writing the result to disk is the orchestrator's job.

use crate::domain::error::DomainError;
use crate::domain::model::SolutionModel;
use crate::domain::policy::AppPolicy;
use crate::domain::templates;

/// File name of the descriptor, relative to the solution root.
pub const DOCKERFILE_NAME: &str = "Dockerfile";

/// Synthesize the Dockerfile for a resolved solution.
///
/// The build stage copies each shippable project's file individually (so
/// restore results cache per project), restores and publishes the entry
/// project, and the runtime stage carries only the published output.
///
/// The entry point is the first shippable project, in declaration order,
/// whose template is [`templates::SERVICE_ENTRY_TEMPLATE`]. Test projects
/// are never copied and never considered for entry.
pub fn synthesize(model: &SolutionModel, policy: &AppPolicy) -> Result<String, DomainError> {
    let shippable: Vec<_> = model
        .projects()
        .iter()
        .filter(|p| templates::is_shippable(p.template(), policy))
        .collect();

    let entry = shippable
        .iter()
        .find(|p| p.template() == templates::SERVICE_ENTRY_TEMPLATE)
        .ok_or_else(|| DomainError::NoEntryPoint {
            template: templates::SERVICE_ENTRY_TEMPLATE.to_string(),
        })?;

    let copy_lines = shippable
        .iter()
        .map(|p| format!("COPY [\"{}\", \"{}/\"]", p.path(), p.dir()))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        r#"
# Stage 1: Build
FROM {sdk_image} AS build
WORKDIR /app

# Copy project files individually to leverage Docker caching
{copy_lines}

# Restore packages
RUN dotnet restore "{entry_path}"

# Copy the entire source code
COPY . ./

# Build and publish the application
RUN dotnet publish "{entry_path}" -c Release -o out --no-restore

# Stage 2: Runtime
# Use a lightweight runtime image to run the application (reduces final image size)
FROM {runtime_image} AS runtime
WORKDIR /app

# Copy the published application from the build stage
COPY --from=build /app/out ./

# Run the application
ENTRYPOINT ["dotnet", "{entry_full_name}.dll"]
"#,
        sdk_image = model.docker().sdk_image(),
        copy_lines = copy_lines,
        entry_path = entry.path(),
        runtime_image = model.docker().runtime_image(),
        entry_full_name = entry.full_name(),
    ))
}
