//! Implementation of the scaffold run.
//!
//! Responsibility: load the configuration documents, resolve the solution
//! model, and drive the core scaffold service. No business logic lives here.

use tracing::{debug, info, instrument};

use slnforge_adapters::{JsonConfigSource, LocalFilesystem, SystemRunner};
use slnforge_core::{
    application::ScaffoldService,
    domain::{SolutionModel, resolver, templates::PROJECT_FILE_EXTENSION},
    error::SlnforgeError,
};

use crate::{cli::Cli, error::CliResult, observer::ConsoleObserver, output::OutputManager};

/// Execute a scaffold run.
///
/// Dispatch sequence:
/// 1. Load both configuration documents
/// 2. Resolve the frozen solution model
/// 3. Show the configuration summary
/// 4. Early-exit if `--dry-run`
/// 5. Execute scaffolding via `ScaffoldService`
#[instrument(skip_all)]
pub fn execute(cli: Cli, output: OutputManager) -> CliResult<()> {
    // 1. Load configuration documents
    let source = JsonConfigSource::new(&cli.app_config, &cli.solution_config);
    let (policy, raw) = source.load()?;

    // 2. Resolve the model
    let model =
        resolver::resolve(&raw, PROJECT_FILE_EXTENSION).map_err(SlnforgeError::from)?;
    debug!(
        solution = %model.name(),
        projects = model.projects().len(),
        "Solution model resolved"
    );

    // 3. Configuration summary
    show_configuration(&model, &output)?;

    // 4. Dry run: describe but do not execute.
    if cli.dry_run {
        output.print("")?;
        output.info(&format!(
            "Dry run: would scaffold '{}' under {}",
            model.name(),
            policy.solution_output_dir().display(),
        ))?;
        return Ok(());
    }

    // 5. Wire adapters and run
    let service = ScaffoldService::new(
        Box::new(SystemRunner::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ConsoleObserver::new(output.clone())),
    );

    info!(solution = %model.name(), "Scaffold started");
    let solution_dir = service.execute(&model, &policy, &cli.assets_dir)?;
    info!(solution = %model.name(), "Scaffold completed");

    output.print("")?;
    output.success("Solution structure created successfully!")?;
    output.print(&format!("  cd {}", solution_dir.display()))?;

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(model: &SolutionModel, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration:")?;
    out.print(&format!("  \u{2022} Solution Name:     {}", model.name()))?;
    out.print(&format!(
        "  \u{2022} Target Framework:  {}",
        model.target_framework()
    ))?;
    out.print(&format!(
        "  \u{2022} Projects:          {}",
        model.projects().len()
    ))?;
    out.print("")?;
    out.print("Projects to create:")?;

    for (i, project) in model.projects().iter().enumerate() {
        out.print(&format!("  {}. {}", i + 1, project.name()))?;
        out.print(&format!("     Template:   {}", project.template()))?;
        out.print(&format!("     Path:       {}", project.path()))?;
        let references = if project.project_references().is_empty() {
            "None".to_string()
        } else {
            project.project_references().join(", ")
        };
        out.print(&format!("     References: {references}"))?;
        if i < model.projects().len() - 1 {
            out.print("")?;
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
