use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("Cannot read {}: {source}", path.display())]
    MissingArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write report {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scenario '{scenario}' produced no {field}")]
    MissingSummaryField {
        scenario: String,
        field: &'static str,
    },

    #[error("Unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}

impl BalanceError {
    /// Errors that mean the harness has nothing meaningful to validate.
    /// These abort the whole run instead of becoming an ERROR line.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingArtifact { .. } | Self::ReportWrite { .. })
    }
}

pub type BalanceResult<T> = Result<T, BalanceError>;
