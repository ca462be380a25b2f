//! Error types in carbon-clusters
//!

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Two pipeline stages disagree on the dimension of an observation
    #[error("dimension mismatch in {stage}: expected {expected}, got {actual}")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("cannot read artifact {0:?}: {1}")]
    ArtifactRead(PathBuf, #[source] std::io::Error),
    #[error("cannot decode artifact {0:?}: {1}")]
    ArtifactDecode(PathBuf, #[source] serde_json::Error),
    #[error("invalid {0} artifact: {1}")]
    InvalidArtifact(&'static str, String),
}

impl Error {
    /// Whether the error happened while loading or validating an artifact
    pub fn is_artifact_load(&self) -> bool {
        !matches!(self, Error::DimensionMismatch { .. })
    }

    pub(crate) fn check_dim(stage: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                stage,
                expected,
                actual,
            })
        }
    }
}
