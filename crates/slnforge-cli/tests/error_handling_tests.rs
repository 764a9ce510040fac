//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const APP_CONFIG: &str = r#"{
  "solutionOutputDir": "out",
  "testProjectTemplates": ["xunit"]
}"#;

/// Write both config documents into `root/config/`.
fn write_configs(root: &Path, solution_config: &str) {
    fs::create_dir_all(root.join("config")).unwrap();
    fs::write(root.join("config/app.config.json"), APP_CONFIG).unwrap();
    fs::write(root.join("config/solution.config.json"), solution_config).unwrap();
}

/// Minimal solution document with the given projects array.
fn solution_with_projects(projects: &str) -> String {
    format!(
        r#"{{
  "name": "Shop",
  "targetFramework": "net8.0",
  "projects": {projects},
  "docker": {{
    "runtimeImage": "mcr.microsoft.com/dotnet/aspnet:8.0",
    "sdkImage": "mcr.microsoft.com/dotnet/sdk:8.0"
  }}
}}"#
    )
}

/// Place a stub `dotnet` on PATH that always succeeds.
#[cfg(unix)]
fn stub_toolchain(root: &Path) -> String {
    use std::os::unix::fs::PermissionsExt;

    let bin = root.join("stub-bin");
    fs::create_dir_all(&bin).unwrap();
    let dotnet = bin.join("dotnet");
    fs::write(&dotnet, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&dotnet, fs::Permissions::from_mode(0o755)).unwrap();

    format!(
        "{}:{}",
        bin.display(),
        std::env::var("PATH").unwrap_or_default()
    )
}

#[test]
fn test_error_with_suggestions_duplicate_project_name() {
    let temp = TempDir::new().unwrap();
    write_configs(
        temp.path(),
        &solution_with_projects(
            r#"[
      { "name": "Api", "template": "webapi", "baseDir": "src" },
      { "name": "Api", "template": "classlib", "baseDir": "src" }
    ]"#,
        ),
    );

    let mut cmd = Command::cargo_bin("slnforge").unwrap();
    cmd.current_dir(temp.path())
        .arg("--no-color")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Duplicate project name: Api"))
        .stderr(predicate::str::contains("unique"));
}

#[test]
fn test_error_with_suggestions_empty_project_list() {
    let temp = TempDir::new().unwrap();
    write_configs(temp.path(), &solution_with_projects("[]"));

    let mut cmd = Command::cargo_bin("slnforge").unwrap();
    cmd.current_dir(temp.path())
        .arg("--no-color")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no projects"))
        .stderr(predicate::str::contains("projects"));
}

#[test]
fn test_error_malformed_solution_document_names_the_file() {
    let temp = TempDir::new().unwrap();
    write_configs(temp.path(), "{ this is not json");

    let mut cmd = Command::cargo_bin("slnforge").unwrap();
    cmd.current_dir(temp.path())
        .arg("--no-color")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("solution.config.json"));
}

#[test]
#[cfg(unix)]
fn test_error_with_suggestions_unresolved_reference() {
    let temp = TempDir::new().unwrap();
    write_configs(
        temp.path(),
        &solution_with_projects(
            r#"[
      {
        "name": "Api",
        "template": "webapi",
        "baseDir": "src",
        "projectReferences": ["Ghost"]
      }
    ]"#,
        ),
    );
    let path = stub_toolchain(temp.path());

    let mut cmd = Command::cargo_bin("slnforge").unwrap();
    cmd.current_dir(temp.path())
        .env("PATH", path)
        .arg("--no-color")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'Api'"))
        .stderr(predicate::str::contains("'Ghost'"))
        .stderr(predicate::str::contains("projectReferences"));
}

#[test]
#[cfg(unix)]
fn test_error_with_suggestions_no_entry_point() {
    // A classlib-only solution scaffolds fine until the Dockerfile stage,
    // which needs a webapi project to point the container at.
    let temp = TempDir::new().unwrap();
    write_configs(
        temp.path(),
        &solution_with_projects(r#"[{ "name": "Core", "template": "classlib", "baseDir": "src" }]"#),
    );
    let path = stub_toolchain(temp.path());

    let mut cmd = Command::cargo_bin("slnforge").unwrap();
    cmd.current_dir(temp.path())
        .env("PATH", path)
        .arg("--no-color")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("webapi"))
        .stderr(predicate::str::contains("entry point"));
}

#[test]
fn test_verbose_hint_present_in_error_output() {
    let temp = TempDir::new().unwrap();
    write_configs(temp.path(), &solution_with_projects("[]"));

    let mut cmd = Command::cargo_bin("slnforge").unwrap();
    cmd.current_dir(temp.path())
        .arg("--no-color")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--verbose"));
}
