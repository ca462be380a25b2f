//! Loading of the fitted artifacts
//!
//! Each artifact is a JSON document holding the fitted parameters in
//! `ndarray`'s serde layout (`{"v": 1, "dim": [..], "data": [..]}` per array):
//!
//! * scaler: `{"center": Array1, "scale": Array1}`
//! * projector: `{"embedding": Array2, "mean": Array1 | null}`
//! * clusterer: `{"centroids": Array2}`

use crate::catalog::N_CLUSTERS;
use crate::clustering::Clusterer;
use crate::error::{Error, Result};
use crate::features::N_FEATURES;
use crate::pipeline::Pipeline;
use crate::preprocessing::FeatureScaler;
use crate::reduction::Projector;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Location of the three artifact files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub scaler: PathBuf,
    pub projector: PathBuf,
    pub clusterer: PathBuf,
}

impl ArtifactPaths {
    /// `scaler.json`, `projector.json` and `clusterer.json` inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            scaler: dir.join("scaler.json"),
            projector: dir.join("projector.json"),
            clusterer: dir.join("clusterer.json"),
        }
    }
}

/// The fitted scaler, projector and clusterer
///
/// The store is built once at startup and never mutated afterwards; share it
/// behind an `Arc` to serve concurrent requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactStore {
    scaler: FeatureScaler,
    projector: Projector,
    clusterer: Clusterer,
}

impl ArtifactStore {
    /// Read and validate all three artifacts
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let scaler: FeatureScaler = load_json(&paths.scaler)?;
        let projector: Projector = load_json(&paths.projector)?;
        let clusterer: Clusterer = load_json(&paths.clusterer)?;

        let store = Self::from_parts(scaler, projector, clusterer)?;
        info!(
            n_features = store.projector.n_features(),
            n_components = store.projector.n_components(),
            n_clusters = store.clusterer.n_clusters(),
            "loaded artifacts"
        );
        Ok(store)
    }

    /// Check that the artifacts fit together and form the expected pipeline shape
    pub fn from_parts(
        scaler: FeatureScaler,
        projector: Projector,
        clusterer: Clusterer,
    ) -> Result<Self> {
        if scaler.n_features() != N_FEATURES {
            return Err(Error::InvalidArtifact(
                "scaler",
                format!(
                    "expected {} features, found {}",
                    N_FEATURES,
                    scaler.n_features()
                ),
            ));
        }
        if projector.n_features() != N_FEATURES {
            return Err(Error::InvalidArtifact(
                "projector",
                format!(
                    "expected {} input features, found {}",
                    N_FEATURES,
                    projector.n_features()
                ),
            ));
        }
        if clusterer.n_components() != projector.n_components() {
            return Err(Error::InvalidArtifact(
                "clusterer",
                format!(
                    "centroids have {} components but the projector produces {}",
                    clusterer.n_components(),
                    projector.n_components()
                ),
            ));
        }
        if clusterer.n_clusters() != N_CLUSTERS {
            return Err(Error::InvalidArtifact(
                "clusterer",
                format!(
                    "expected {} centroids, found {}",
                    N_CLUSTERS,
                    clusterer.n_clusters()
                ),
            ));
        }

        Ok(Self {
            scaler,
            projector,
            clusterer,
        })
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn clusterer(&self) -> &Clusterer {
        &self.clusterer
    }

    pub fn pipeline(&self) -> Pipeline<'_> {
        Pipeline::new(&self.scaler, &self.projector, &self.clusterer)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "reading artifact");
    let file = File::open(path).map_err(|e| Error::ArtifactRead(path.to_path_buf(), e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::ArtifactDecode(path.to_path_buf(), e))
}
