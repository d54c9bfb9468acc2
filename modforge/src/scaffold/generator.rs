//! Module generator orchestrator
//!
//! Runs the selected [`Task`]s for a module in a fixed order. Each artifact
//! is attempted independently: a failure is recorded in the
//! [`GenerationReport`] and the next artifact is still attempted. Existing
//! files are never overwritten.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::fs::{make_directory, write_new, WriteOutcome};
use super::layout::{ArtifactSpec, ProjectLayout, TaskPlan};
use super::migration::{MigrationCreator, MigrationError, SqlMigrationCreator};
use super::report::{ArtifactOutcome, ArtifactStatus, GenerationReport};
use super::stubs::{Placeholders, StubError, StubId, StubRenderer, StubRepository};
use super::task::Task;
use crate::config::GeneratorSettings;
use crate::naming::ModuleName;

/// Label of the migration artifact
pub const MIGRATION_LABEL: &str = "Migration";

/// Errors raised while producing a single artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The stub could not be loaded
    #[error(transparent)]
    Stub(#[from] StubError),

    /// The stub failed to render
    #[error("failed to render stub '{stub}': {source}")]
    Render {
        /// Stub being rendered
        stub: StubId,
        /// Template error
        source: minijinja::Error,
    },

    /// The target directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory being created
        path: PathBuf,
        /// The underlying IO error
        source: io::Error,
    },

    /// The file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File being written
        path: PathBuf,
        /// The underlying IO error
        source: io::Error,
    },
}

/// Load and render a stub
pub(crate) fn render_stub(
    stubs: &StubRepository,
    renderer: &StubRenderer,
    stub: StubId,
    placeholders: &Placeholders,
) -> Result<String, ArtifactError> {
    let source = stubs.load(stub)?;
    renderer
        .render(&source, placeholders)
        .map_err(|source| ArtifactError::Render { stub, source })
}

/// Generates the artifacts of a module
pub struct ModuleGenerator {
    layout: ProjectLayout,
    stubs: StubRepository,
    renderer: StubRenderer,
    migrations: Box<dyn MigrationCreator>,
}

impl ModuleGenerator {
    /// Create a generator writing below `layout`, with the default SQL
    /// migration collaborator
    #[must_use]
    pub fn new(layout: ProjectLayout, stubs: StubRepository) -> Self {
        let migrations = Box::new(SqlMigrationCreator::new(stubs.clone()));
        Self {
            layout,
            stubs,
            renderer: StubRenderer::new(),
            migrations,
        }
    }

    /// Create a generator from configuration, relative to the working
    /// directory
    #[must_use]
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::new(
            ProjectLayout::from(settings),
            StubRepository::for_project(&settings.stub_dir),
        )
    }

    /// Replace the migration collaborator
    #[must_use]
    pub fn with_migration_creator(mut self, creator: impl MigrationCreator + 'static) -> Self {
        self.migrations = Box::new(creator);
        self
    }

    /// Output layout
    #[must_use]
    pub const fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Run `tasks` for `module`
    ///
    /// Tasks run in [`Task::ALL`] order regardless of the order given;
    /// duplicates run once.
    pub fn generate(&self, module: &ModuleName, tasks: &[Task]) -> GenerationReport {
        let mut report = GenerationReport::default();
        info!(module = %module, tasks = tasks.len(), "generating module");

        for task in Task::ALL.into_iter().filter(|t| tasks.contains(t)) {
            debug!(%task, "running task");
            for outcome in self.run_task(task, module) {
                report.push(outcome);
            }
        }

        info!(
            module = %module,
            created = report.created(),
            existing = report.existing(),
            failed = report.has_failures(),
            "generation finished"
        );
        report
    }

    /// Run a single task
    #[must_use]
    pub fn run_task(&self, task: Task, module: &ModuleName) -> Vec<ArtifactOutcome> {
        match self.layout.plan(task, module) {
            TaskPlan::Files(specs) => specs.iter().map(|spec| self.produce(spec)).collect(),
            TaskPlan::Migration(request) => {
                let (path, status) = match self.migrations.create(&request) {
                    Ok(path) => {
                        info!(path = %path.display(), "migration created");
                        (Some(path), ArtifactStatus::Created)
                    }
                    Err(MigrationError::AlreadyExists { path, .. }) => {
                        (Some(path), ArtifactStatus::AlreadyExists)
                    }
                    Err(e) => {
                        warn!(error = %e, migration = %request.name, "migration failed");
                        (None, ArtifactStatus::Failed(e.to_string()))
                    }
                };
                vec![ArtifactOutcome {
                    label: MIGRATION_LABEL,
                    path,
                    status,
                }]
            }
        }
    }

    fn produce(&self, spec: &ArtifactSpec) -> ArtifactOutcome {
        let status = match self.write_artifact(spec) {
            Ok(WriteOutcome::Written) => {
                info!(path = %spec.path.display(), "{} created", spec.kind.label());
                ArtifactStatus::Created
            }
            Ok(WriteOutcome::Exists) => {
                debug!(path = %spec.path.display(), "{} exists, skipping", spec.kind.label());
                ArtifactStatus::AlreadyExists
            }
            Err(e) => {
                warn!(path = %spec.path.display(), error = %e, "{} failed", spec.kind.label());
                ArtifactStatus::Failed(e.to_string())
            }
        };

        ArtifactOutcome {
            label: spec.kind.label(),
            path: Some(spec.path.clone()),
            status,
        }
    }

    /// Write one artifact unless its target exists
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the stub
    /// cannot be loaded or rendered, or the file cannot be written.
    pub fn write_artifact(&self, spec: &ArtifactSpec) -> Result<WriteOutcome, ArtifactError> {
        if spec.path.exists() {
            return Ok(WriteOutcome::Exists);
        }

        if let Some(parent) = spec.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            make_directory(parent).map_err(|source| ArtifactError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = render_stub(&self.stubs, &self.renderer, spec.stub, &spec.placeholders)?;

        write_new(&spec.path, &contents).map_err(|source| ArtifactError::Write {
            path: spec.path.clone(),
            source,
        })
    }
}

impl std::fmt::Debug for ModuleGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleGenerator")
            .field("layout", &self.layout)
            .field("stubs", &self.stubs)
            .finish_non_exhaustive()
    }
}
