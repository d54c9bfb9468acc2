//! Per-artifact outcomes of a generation run

use std::fmt;
use std::path::PathBuf;

/// Status of one attempted artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// Written to disk
    Created,
    /// Skipped because the target already existed; not a failure
    AlreadyExists,
    /// Could not be produced
    Failed(String),
}

/// What happened to one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactOutcome {
    /// Human label (`Controller`, `API Routes`, ...)
    pub label: &'static str,
    /// Target path, when one was computed
    pub path: Option<PathBuf>,
    /// Result
    pub status: ArtifactStatus,
}

impl ArtifactOutcome {
    /// Status line shown to the user
    #[must_use]
    pub fn message(&self) -> String {
        match &self.status {
            ArtifactStatus::Created => format!("{} created successfully.", self.label),
            ArtifactStatus::AlreadyExists => format!("{} already exists!", self.label),
            ArtifactStatus::Failed(reason) => format!("{} failed: {reason}", self.label),
        }
    }

    /// True for [`ArtifactStatus::Failed`]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.status, ArtifactStatus::Failed(_))
    }
}

impl fmt::Display for ArtifactOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Ordered outcomes of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    outcomes: Vec<ArtifactOutcome>,
}

impl GenerationReport {
    /// Record an outcome
    pub fn push(&mut self, outcome: ArtifactOutcome) {
        self.outcomes.push(outcome);
    }

    /// Outcomes in invocation order
    #[must_use]
    pub fn outcomes(&self) -> &[ArtifactOutcome] {
        &self.outcomes
    }

    /// Whether any artifact failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(ArtifactOutcome::is_failure)
    }

    /// Number of artifacts written
    #[must_use]
    pub fn created(&self) -> usize {
        self.count(|s| matches!(s, ArtifactStatus::Created))
    }

    /// Number of artifacts skipped because they existed
    #[must_use]
    pub fn existing(&self) -> usize {
        self.count(|s| matches!(s, ArtifactStatus::AlreadyExists))
    }

    fn count(&self, pred: impl Fn(&ArtifactStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

impl IntoIterator for GenerationReport {
    type Item = ArtifactOutcome;
    type IntoIter = std::vec::IntoIter<ArtifactOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}
