//! Toolchain template knowledge.
//!
//! Everything the domain knows about the external toolchain's project
//! templates lives here: which template plays the deployment entry role,
//! which placeholder sources a freshly-created project carries, and what
//! "shippable" means. All checks are plain lookups; no other module should
//! grow a `match` on template names.
//!
//! Test-template membership is deliberately *not* static: it comes from the
//! [`AppPolicy`] so installations can teach the tool new test templates
//! without a code change.

use crate::domain::policy::AppPolicy;

// ── Template identifiers ──────────────────────────────────────────────────────

/// Extension of a project file, without the leading dot.
pub const PROJECT_FILE_EXTENSION: &str = "csproj";

/// Template of the project that becomes the container entry point.
pub const SERVICE_ENTRY_TEMPLATE: &str = "webapi";

/// Template whose fresh projects carry a placeholder class file.
pub const CLASS_LIBRARY_TEMPLATE: &str = "classlib";

// ── Placeholder sources ───────────────────────────────────────────────────────

/// Placeholder source generated by the class-library template.
pub const CLASS_LIBRARY_PLACEHOLDER: &str = "Class1.cs";

/// Placeholder source generated by every test template.
pub const TEST_PLACEHOLDER: &str = "UnitTest1.cs";

/// Placeholder files to delete from a freshly-created project.
///
/// The two conditions are independent: a template that is both the class
/// library and policy-listed as a test template sheds both placeholders.
/// Unknown templates shed nothing.
pub fn removable_artifacts(template: &str, policy: &AppPolicy) -> Vec<&'static str> {
    let mut artifacts = Vec::new();
    if template == CLASS_LIBRARY_TEMPLATE {
        artifacts.push(CLASS_LIBRARY_PLACEHOLDER);
    }
    if policy.is_test_template(template) {
        artifacts.push(TEST_PLACEHOLDER);
    }
    artifacts
}

/// Whether a project with this template ships in the container image.
///
/// Test projects build and run in CI but never deploy.
pub fn is_shippable(template: &str, policy: &AppPolicy) -> bool {
    !policy.is_test_template(template)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
