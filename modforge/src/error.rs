//! Crate-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::naming::NameError;
use crate::observability::ObservabilityError;
use crate::routes::RouteError;
use crate::scaffold::{ArtifactError, MigrationError, StubError};

/// Any error raised by this crate
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid module name
    #[error("Validation error: {0}")]
    Name(#[from] NameError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Route registry or route table error
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    /// Single artifact failure
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// Migration collaborator failure
    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),

    /// Stub could not be loaded
    #[error("Stub error: {0}")]
    Stub(#[from] StubError),

    /// Logging could not be installed
    #[error("Observability error: {0}")]
    Observability(#[from] ObservabilityError),
}

/// Result alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
