//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and help
//! text.  No business logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// There are no subcommands: running `slnforge` with no arguments scaffolds
/// the solution described by the configuration documents.
#[derive(Debug, Parser)]
#[command(
    name    = "slnforge",
    bin_name = "slnforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Configuration-driven .NET solution scaffolding",
    long_about = "Slnforge reads a solution description and drives the dotnet \
                  CLI to create the solution, its projects, references, and \
                  deployment files in one pass.",
    after_help = "EXAMPLES:\n\
        \x20 slnforge\n\
        \x20 slnforge --dry-run\n\
        \x20 slnforge -v --solution-config shop.solution.json\n\
        \x20 slnforge --assets-dir ./shared-assets"
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Application policy document (output directory, test templates).
    #[arg(
        long = "app-config",
        value_name = "FILE",
        default_value = "config/app.config.json",
        help = "Application policy document"
    )]
    pub app_config: PathBuf,

    /// Solution description document.
    #[arg(
        long = "solution-config",
        value_name = "FILE",
        default_value = "config/solution.config.json",
        help = "Solution description document"
    )]
    pub solution_config: PathBuf,

    /// Directory holding the static file sources to copy into the solution.
    #[arg(
        long = "assets-dir",
        value_name = "DIR",
        default_value = "resources/static-files",
        help = "Static file source directory"
    )]
    pub assets_dir: PathBuf,

    /// Resolve and display the solution without executing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
