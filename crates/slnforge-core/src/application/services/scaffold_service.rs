//! Scaffold Service - main application orchestrator.
//!
//! This service drives the entire scaffolding workflow against a resolved
//! solution model:
//! 1. Create the solution root directory
//! 2. Create the solution container file
//! 3. Create every project
//! 4. Remove auto-generated placeholder files
//! 5. Wire project references
//! 6. Register every project in the solution
//! 7. Copy static files from the assets directory
//! 8. Synthesize and write the Dockerfile
//!
//! Stages run strictly in order. The first failure aborts the remainder and
//! propagates; partial results stay on disk (no rollback, re-running against
//! the same directory is undefined).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRequest, CommandRunner, Filesystem, ScaffoldObserver},
        stage::ScaffoldStage,
        toolchain,
    },
    domain::{AppPolicy, DomainError, ProjectModel, SolutionModel, dockerfile, templates},
    error::SlnforgeResult,
};

/// Main scaffolding service.
///
/// Owns the driven ports and runs the fixed stage sequence against them.
pub struct ScaffoldService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    observer: Box<dyn ScaffoldObserver>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        observer: Box<dyn ScaffoldObserver>,
    ) -> Self {
        Self {
            runner,
            filesystem,
            observer,
        }
    }

    /// Scaffold a solution.
    ///
    /// `assets_dir` is where static file sources are read from. Returns the
    /// solution root directory on success.
    #[instrument(
        skip_all,
        fields(
            solution = %model.name(),
            projects = model.projects().len()
        )
    )]
    pub fn execute(
        &self,
        model: &SolutionModel,
        policy: &AppPolicy,
        assets_dir: &Path,
    ) -> SlnforgeResult<PathBuf> {
        let solution_dir = policy.solution_output_dir().join(model.name());
        info!(dir = %solution_dir.display(), "Scaffolding solution");

        // 1. Solution root
        self.observer.stage_started(ScaffoldStage::CreateSolutionRoot);
        self.observer
            .task(&format!("Creating folder: {}", model.name()));
        self.filesystem.create_dir_all(&solution_dir)?;

        // 2. Solution container
        self.observer
            .stage_started(ScaffoldStage::CreateSolutionContainer);
        self.run_tool(
            ScaffoldStage::CreateSolutionContainer,
            &solution_dir,
            toolchain::new_solution(model.name()),
        )?;

        // 3. Projects
        self.observer.stage_started(ScaffoldStage::CreateProjects);
        for project in model.projects() {
            self.run_tool(
                ScaffoldStage::CreateProjects,
                &solution_dir,
                toolchain::new_project(project),
            )?;
        }

        // 4. Placeholder removal
        self.observer
            .stage_started(ScaffoldStage::RemovePlaceholders);
        for project in model.projects() {
            self.remove_placeholders(&solution_dir, project, policy)?;
        }

        // 5. Reference wiring
        self.observer.stage_started(ScaffoldStage::WireReferences);
        self.wire_references(model, &solution_dir)?;

        // 6. Solution registration
        self.observer.stage_started(ScaffoldStage::RegisterProjects);
        for project in model.projects() {
            self.run_tool(
                ScaffoldStage::RegisterProjects,
                &solution_dir,
                toolchain::register_project(project),
            )?;
        }

        // 7. Static files
        self.observer.stage_started(ScaffoldStage::CopyStaticFiles);
        self.copy_static_files(model, &solution_dir, assets_dir)?;

        // 8. Dockerfile
        self.observer.stage_started(ScaffoldStage::WriteDockerfile);
        self.write_dockerfile(model, policy, &solution_dir)?;

        info!("Solution scaffold complete");
        Ok(solution_dir)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Run one toolchain command from the solution root.
    ///
    /// A command that cannot be launched propagates as-is; one that exits
    /// unsuccessfully becomes a stage failure carrying its captured output.
    fn run_tool(
        &self,
        stage: ScaffoldStage,
        solution_dir: &Path,
        request: CommandRequest,
    ) -> SlnforgeResult<()> {
        let request = request.current_dir(solution_dir);
        let line = request.to_string();
        self.observer.command(&line);
        debug!(command = %line, "Running toolchain command");

        let output = self.runner.run(&request)?;
        if !output.success() {
            warn!(command = %line, status = ?output.status(), "Toolchain command failed");
            return Err(ApplicationError::ToolFailed {
                stage,
                command: line,
                status: output.status(),
                stdout: output.stdout().to_string(),
                stderr: output.stderr().to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Delete the placeholder sources a project's template generated.
    ///
    /// Missing placeholders are fine; newer toolchain versions stopped
    /// generating some of them.
    fn remove_placeholders(
        &self,
        solution_dir: &Path,
        project: &ProjectModel,
        policy: &AppPolicy,
    ) -> SlnforgeResult<()> {
        self.observer
            .task(&format!("Removing files for {}", project.full_name()));

        let artifacts = templates::removable_artifacts(project.template(), policy);
        if artifacts.is_empty() {
            self.observer.note("No files to remove");
            return Ok(());
        }

        for artifact in artifacts {
            let path = solution_dir.join(project.dir()).join(artifact);
            self.observer
                .note(&format!("{}: Removing at {}", artifact, path.display()));
            self.filesystem.remove_file(&path)?;
        }
        Ok(())
    }

    /// Wire declared references, resolving each name as it is reached.
    ///
    /// Resolution is interleaved with execution on purpose: an unresolved
    /// name surfaces exactly where the toolchain call would have happened,
    /// after every earlier reference was already added.
    fn wire_references(&self, model: &SolutionModel, solution_dir: &Path) -> SlnforgeResult<()> {
        for project in model.projects() {
            self.observer
                .task(&format!("Setting up references for {}", project.full_name()));

            if project.project_references().is_empty() {
                self.observer.note("No references to set up");
                continue;
            }

            for reference in project.project_references() {
                let target = model.project_named(reference).ok_or_else(|| {
                    DomainError::UnresolvedReference {
                        project: project.name().to_string(),
                        reference: reference.clone(),
                    }
                })?;

                self.run_tool(
                    ScaffoldStage::WireReferences,
                    solution_dir,
                    toolchain::add_reference(project, target),
                )?;
            }
        }
        Ok(())
    }

    /// Copy each declared static file from the assets directory.
    fn copy_static_files(
        &self,
        model: &SolutionModel,
        solution_dir: &Path,
        assets_dir: &Path,
    ) -> SlnforgeResult<()> {
        if model.static_files().is_empty() {
            self.observer.note("No static files to copy");
            return Ok(());
        }

        for spec in model.static_files() {
            self.observer.task(&format!(
                "Copying {} to {}",
                spec.name(),
                spec.destination()
            ));

            let destination_dir = if spec.destination() == "." {
                solution_dir.to_path_buf()
            } else {
                solution_dir.join(spec.destination())
            };

            self.filesystem.create_dir_all(&destination_dir)?;
            let content = self.filesystem.read_to_string(&assets_dir.join(spec.name()))?;
            self.filesystem
                .write_file(&destination_dir.join(spec.name()), &content)?;
        }
        Ok(())
    }

    /// Synthesize the Dockerfile and write it into the solution root.
    fn write_dockerfile(
        &self,
        model: &SolutionModel,
        policy: &AppPolicy,
        solution_dir: &Path,
    ) -> SlnforgeResult<()> {
        let path = solution_dir.join(dockerfile::DOCKERFILE_NAME);
        self.observer
            .task(&format!("Dockerfile: Creating at {}", path.display()));

        let content = dockerfile::synthesize(model, policy)?;
        self.filesystem.write_file(&path, &content)?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use mockall::Sequence;

    use super::*;
    use crate::application::ports::output::{MockCommandRunner, MockFilesystem};
    use crate::application::ports::{CommandOutput, NoopObserver};
    use crate::domain::templates::PROJECT_FILE_EXTENSION;
    use crate::domain::{RawDockerImages, RawProject, RawSolution, RawStaticFile, resolver};
    use crate::error::SlnforgeError;

    fn raw_project(name: &str, template: &str, base_dir: &str, refs: &[&str]) -> RawProject {
        RawProject {
            name: name.into(),
            template: template.into(),
            base_dir: base_dir.into(),
            project_references: refs.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn shop_model(projects: Vec<RawProject>, static_files: Vec<RawStaticFile>) -> SolutionModel {
        let raw = RawSolution {
            name: "Shop".into(),
            target_framework: "net8.0".into(),
            projects,
            static_files,
            docker: RawDockerImages {
                runtime_image: "aspnet:8.0".into(),
                sdk_image: "sdk:8.0".into(),
            },
        };
        resolver::resolve(&raw, PROJECT_FILE_EXTENSION).unwrap()
    }

    fn policy() -> AppPolicy {
        AppPolicy::new("output", vec!["xunit".into()])
    }

    fn ok_output() -> CommandOutput {
        CommandOutput::new(Some(0), "", "")
    }

    /// Observer that records stage banners.
    #[derive(Default)]
    struct StageRecorder(Mutex<Vec<ScaffoldStage>>);

    impl ScaffoldObserver for Arc<StageRecorder> {
        fn stage_started(&self, stage: ScaffoldStage) {
            self.0.lock().unwrap().push(stage);
        }
    }

    #[test]
    fn full_run_performs_every_stage_in_order() {
        let model = shop_model(
            vec![
                raw_project("Api", "webapi", "src", &["Core"]),
                raw_project("Core", "classlib", "src", &[]),
            ],
            vec![RawStaticFile {
                name: ".gitignore".into(),
                destination: ".".into(),
            }],
        );

        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        let expected_commands = [
            "dotnet new sln -n Shop",
            "dotnet new webapi -f net8.0 -n Shop.Api -o src/Shop.Api",
            "dotnet new classlib -f net8.0 -n Shop.Core -o src/Shop.Core",
            "dotnet add src/Shop.Api/Shop.Api.csproj reference src/Shop.Core/Shop.Core.csproj",
            "dotnet sln add src/Shop.Api/Shop.Api.csproj",
            "dotnet sln add src/Shop.Core/Shop.Core.csproj",
        ];
        for expected in expected_commands {
            runner
                .expect_run()
                .once()
                .in_sequence(&mut seq)
                .withf(move |request| request.to_string() == expected)
                .returning(|_| Ok(ok_output()));
        }

        let mut filesystem = MockFilesystem::new();
        filesystem
            .expect_create_dir_all()
            .times(2)
            .returning(|_| Ok(()));
        filesystem
            .expect_remove_file()
            .once()
            .withf(|path| path.ends_with("output/Shop/src/Shop.Core/Class1.cs"))
            .returning(|_| Ok(()));
        filesystem
            .expect_read_to_string()
            .once()
            .withf(|path| path.ends_with("assets/.gitignore"))
            .returning(|_| Ok("bin/\nobj/\n".into()));
        filesystem
            .expect_write_file()
            .once()
            .withf(|path, content| {
                path.ends_with("output/Shop/.gitignore") && content == "bin/\nobj/\n"
            })
            .returning(|_, _| Ok(()));
        filesystem
            .expect_write_file()
            .once()
            .withf(|path, content| {
                path.ends_with("output/Shop/Dockerfile")
                    && content.contains("FROM sdk:8.0 AS build")
                    && content.contains(r#"ENTRYPOINT ["dotnet", "Shop.Api.dll"]"#)
            })
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(
            Box::new(runner),
            Box::new(filesystem),
            Box::new(NoopObserver),
        );
        let dir = service
            .execute(&model, &policy(), Path::new("assets"))
            .unwrap();
        assert_eq!(dir, PathBuf::from("output/Shop"));
    }

    #[test]
    fn stages_are_announced_in_fixed_order() {
        let model = shop_model(vec![raw_project("Api", "webapi", "src", &[])], vec![]);

        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|_| Ok(ok_output()));
        let mut filesystem = MockFilesystem::new();
        filesystem.expect_create_dir_all().returning(|_| Ok(()));
        filesystem.expect_write_file().returning(|_, _| Ok(()));

        let stages = Arc::new(StageRecorder::default());
        let service = ScaffoldService::new(
            Box::new(runner),
            Box::new(filesystem),
            Box::new(stages.clone()),
        );
        service
            .execute(&model, &policy(), Path::new("assets"))
            .unwrap();

        assert_eq!(*stages.0.lock().unwrap(), ScaffoldStage::ALL);
    }

    #[test]
    fn commands_run_from_the_solution_root() {
        let model = shop_model(vec![raw_project("Api", "webapi", "src", &[])], vec![]);

        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|request| request.cwd() == Some(Path::new("output/Shop")))
            .returning(|_| Ok(ok_output()));
        let mut filesystem = MockFilesystem::new();
        filesystem.expect_create_dir_all().returning(|_| Ok(()));
        filesystem.expect_write_file().returning(|_, _| Ok(()));

        let service = ScaffoldService::new(
            Box::new(runner),
            Box::new(filesystem),
            Box::new(NoopObserver),
        );
        service
            .execute(&model, &policy(), Path::new("assets"))
            .unwrap();
    }

    #[test]
    fn failed_project_creation_aborts_the_run() {
        let model = shop_model(
            vec![
                raw_project("Api", "webapi", "src", &[]),
                raw_project("Core", "classlib", "src", &[]),
            ],
            vec![],
        );

        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        runner
            .expect_run()
            .once()
            .in_sequence(&mut seq)
            .withf(|request| request.to_string() == "dotnet new sln -n Shop")
            .returning(|_| Ok(ok_output()));
        // Api creation fails; nothing after it may run.
        runner
            .expect_run()
            .once()
            .in_sequence(&mut seq)
            .withf(|request| request.to_string().starts_with("dotnet new webapi"))
            .returning(|_| Ok(CommandOutput::new(Some(1), "", "template not found")));

        let mut filesystem = MockFilesystem::new();
        filesystem
            .expect_create_dir_all()
            .once()
            .returning(|_| Ok(()));

        let service = ScaffoldService::new(
            Box::new(runner),
            Box::new(filesystem),
            Box::new(NoopObserver),
        );
        let err = service
            .execute(&model, &policy(), Path::new("assets"))
            .unwrap_err();

        match err {
            SlnforgeError::Application(ApplicationError::ToolFailed {
                stage,
                status,
                stderr,
                ..
            }) => {
                assert_eq!(stage, ScaffoldStage::CreateProjects);
                assert_eq!(status, Some(1));
                assert_eq!(stderr, "template not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unresolved_reference_aborts_before_its_toolchain_call() {
        let model = shop_model(
            vec![raw_project("Api", "webapi", "src", &["Ghost"])],
            vec![],
        );

        let mut runner = MockCommandRunner::new();
        // Solution + one project; the reference lookup fails before any
        // `dotnet add` is attempted, and registration never happens.
        runner.expect_run().times(2).returning(|_| Ok(ok_output()));
        let mut filesystem = MockFilesystem::new();
        filesystem
            .expect_create_dir_all()
            .once()
            .returning(|_| Ok(()));

        let service = ScaffoldService::new(
            Box::new(runner),
            Box::new(filesystem),
            Box::new(NoopObserver),
        );
        let err = service
            .execute(&model, &policy(), Path::new("assets"))
            .unwrap_err();

        match err {
            SlnforgeError::Domain(DomainError::UnresolvedReference { project, reference }) => {
                assert_eq!(project, "Api");
                assert_eq!(reference, "Ghost");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn launch_failure_propagates_unchanged() {
        let model = shop_model(vec![raw_project("Api", "webapi", "src", &[])], vec![]);

        let mut runner = MockCommandRunner::new();
        runner.expect_run().once().returning(|_| {
            Err(ApplicationError::ToolLaunch {
                command: "dotnet new sln -n Shop".into(),
                reason: "No such file or directory".into(),
            }
            .into())
        });
        let mut filesystem = MockFilesystem::new();
        filesystem
            .expect_create_dir_all()
            .once()
            .returning(|_| Ok(()));

        let service = ScaffoldService::new(
            Box::new(runner),
            Box::new(filesystem),
            Box::new(NoopObserver),
        );
        let err = service
            .execute(&model, &policy(), Path::new("assets"))
            .unwrap_err();

        assert!(matches!(
            err,
            SlnforgeError::Application(ApplicationError::ToolLaunch { .. })
        ));
    }

    #[test]
    fn missing_entry_point_fails_at_the_final_stage() {
        // Everything before the Dockerfile succeeds; synthesis then fails.
        let model = shop_model(vec![raw_project("Core", "classlib", "src", &[])], vec![]);

        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(3).returning(|_| Ok(ok_output()));
        let mut filesystem = MockFilesystem::new();
        filesystem
            .expect_create_dir_all()
            .once()
            .returning(|_| Ok(()));
        filesystem
            .expect_remove_file()
            .once()
            .returning(|_| Ok(()));
        filesystem.expect_write_file().never();

        let service = ScaffoldService::new(
            Box::new(runner),
            Box::new(filesystem),
            Box::new(NoopObserver),
        );
        let err = service
            .execute(&model, &policy(), Path::new("assets"))
            .unwrap_err();

        assert!(matches!(
            err,
            SlnforgeError::Domain(DomainError::NoEntryPoint { .. })
        ));
    }

    #[test]
    fn filesystem_failure_during_copy_names_the_file() {
        let model = shop_model(
            vec![raw_project("Api", "webapi", "src", &[])],
            vec![RawStaticFile {
                name: "README.md".into(),
                destination: "docs".into(),
            }],
        );

        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|_| Ok(ok_output()));
        let mut filesystem = MockFilesystem::new();
        filesystem.expect_create_dir_all().returning(|_| Ok(()));
        filesystem.expect_read_to_string().once().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file or directory".into(),
            }
            .into())
        });
        filesystem.expect_write_file().never();

        let service = ScaffoldService::new(
            Box::new(runner),
            Box::new(filesystem),
            Box::new(NoopObserver),
        );
        let err = service
            .execute(&model, &policy(), Path::new("assets"))
            .unwrap_err();

        match err {
            SlnforgeError::Application(ApplicationError::FilesystemError { path, .. }) => {
                assert!(path.ends_with("assets/README.md"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
