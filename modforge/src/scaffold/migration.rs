//! Migration collaborator
//!
//! The generator does not know how a project stores its migrations. It
//! hands a [`MigrationRequest`] to a [`MigrationCreator`] and reports what
//! comes back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use super::fs::{make_directory, write_new, WriteOutcome};
use super::generator::{render_stub, ArtifactError};
use super::layout::MigrationRequest;
use super::stubs::{StubId, StubRenderer, StubRepository};

/// Timestamp prefix of generated migration files
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Errors raised by a migration collaborator
#[derive(Debug, Error)]
pub enum MigrationError {
    /// A migration with the same name is already present
    #[error("migration '{name}' already exists at {}", path.display())]
    AlreadyExists {
        /// Migration name (`create_products_table`)
        name: String,
        /// The existing file
        path: PathBuf,
    },

    /// Rendering or writing the migration failed
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Any other collaborator failure
    #[error("{0}")]
    Collaborator(String),
}

/// Creates create-table migrations
pub trait MigrationCreator {
    /// Create the migration described by `request`
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::AlreadyExists`] when the migration is
    /// already present, any other variant on failure.
    fn create(&self, request: &MigrationRequest) -> Result<PathBuf, MigrationError>;
}

/// Writes timestamped SQL migrations rendered from `migration.stub`
///
/// Files are named `<timestamp>_<name>.sql`. A second migration with the
/// same name in the same directory is refused regardless of timestamp.
#[derive(Debug, Clone)]
pub struct SqlMigrationCreator {
    stubs: StubRepository,
    renderer: StubRenderer,
    fixed_time: Option<DateTime<Utc>>,
}

impl SqlMigrationCreator {
    /// Create a collaborator resolving stubs through `stubs`
    #[must_use]
    pub fn new(stubs: StubRepository) -> Self {
        Self {
            stubs,
            renderer: StubRenderer::new(),
            fixed_time: None,
        }
    }

    /// Stamp every migration with `time` instead of the current time
    #[must_use]
    pub fn at(mut self, time: DateTime<Utc>) -> Self {
        self.fixed_time = Some(time);
        self
    }

    fn timestamp(&self) -> String {
        self.fixed_time
            .unwrap_or_else(Utc::now)
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    fn existing(dir: &Path, name: &str) -> Option<PathBuf> {
        let suffix = format!("_{name}.sql");
        fs::read_dir(dir)
            .ok()?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .find(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(&suffix))
            })
    }
}

impl MigrationCreator for SqlMigrationCreator {
    fn create(&self, request: &MigrationRequest) -> Result<PathBuf, MigrationError> {
        if let Some(path) = Self::existing(&request.directory, &request.name) {
            return Err(MigrationError::AlreadyExists {
                name: request.name.clone(),
                path,
            });
        }

        make_directory(&request.directory).map_err(|source| ArtifactError::CreateDir {
            path: request.directory.clone(),
            source,
        })?;

        let contents = render_stub(
            &self.stubs,
            &self.renderer,
            StubId::Migration,
            &request.placeholders,
        )?;

        let path = request
            .directory
            .join(format!("{}_{}.sql", self.timestamp(), request.name));
        debug!(path = %path.display(), table = %request.table, "writing migration");

        match write_new(&path, &contents) {
            Ok(WriteOutcome::Written) => Ok(path),
            Ok(WriteOutcome::Exists) => Err(MigrationError::AlreadyExists {
                name: request.name.clone(),
                path,
            }),
            Err(source) => Err(ArtifactError::Write { path, source }.into()),
        }
    }
}
