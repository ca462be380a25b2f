//! Linear projection into a lower dimensional space
//!
//! The projection is the fitted embedding of a principal component analysis.
//! It maps scaled observations with `n_features` components onto
//! `n_components` components, optionally centering them first.

use crate::error::{Error, Result};
use crate::traits::Transformer;
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Fitted projection
///
/// `embedding` has shape `(n_features, n_components)`, an observation `x` is
/// projected to `(x - mean) · embedding`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProjectorParams")]
pub struct Projector {
    embedding: Array2<f64>,
    mean: Option<Array1<f64>>,
}

#[derive(Deserialize)]
struct ProjectorParams {
    embedding: Array2<f64>,
    #[serde(default)]
    mean: Option<Array1<f64>>,
}

impl TryFrom<ProjectorParams> for Projector {
    type Error = Error;

    fn try_from(params: ProjectorParams) -> Result<Self> {
        Self::new(params.embedding, params.mean)
    }
}

impl Projector {
    pub fn new(embedding: Array2<f64>, mean: Option<Array1<f64>>) -> Result<Self> {
        let (n_features, n_components) = embedding.dim();
        if n_features == 0 || n_components == 0 {
            return Err(Error::InvalidArtifact(
                "projector",
                format!("empty embedding of shape {:?}", embedding.dim()),
            ));
        }
        if let Some(mean) = &mean {
            if mean.len() != n_features {
                return Err(Error::InvalidArtifact(
                    "projector",
                    format!(
                        "mean has {} components but the embedding expects {} features",
                        mean.len(),
                        n_features
                    ),
                ));
            }
        }
        let finite = embedding.iter().all(|x| x.is_finite())
            && mean.iter().flatten().all(|x| x.is_finite());
        if !finite {
            return Err(Error::InvalidArtifact(
                "projector",
                "parameters must be finite".into(),
            ));
        }

        Ok(Self { embedding, mean })
    }

    /// Projection matrix with shape `(n_features, n_components)`
    pub fn embedding(&self) -> &Array2<f64> {
        &self.embedding
    }

    pub fn mean(&self) -> Option<&Array1<f64>> {
        self.mean.as_ref()
    }

    /// Input dimension
    pub fn n_features(&self) -> usize {
        self.embedding.nrows()
    }

    /// Output dimension
    pub fn n_components(&self) -> usize {
        self.embedding.ncols()
    }
}

impl<'a, D: Data<Elem = f64>> Transformer<&'a ArrayBase<D, Ix1>, Array1<f64>> for Projector {
    fn transform(&self, x: &'a ArrayBase<D, Ix1>) -> Result<Array1<f64>> {
        Error::check_dim("projector", self.n_features(), x.len())?;
        let projected = match &self.mean {
            Some(mean) => (x - mean).dot(&self.embedding),
            None => x.dot(&self.embedding),
        };
        Ok(projected)
    }
}

impl<'a, D: Data<Elem = f64>> Transformer<&'a ArrayBase<D, Ix2>, Array2<f64>> for Projector {
    /// Projects an array of size (n_observations, n_features) to (n_observations, n_components)
    fn transform(&self, x: &'a ArrayBase<D, Ix2>) -> Result<Array2<f64>> {
        Error::check_dim("projector", self.n_features(), x.ncols())?;
        let projected = match &self.mean {
            Some(mean) => (x - mean).dot(&self.embedding),
            None => x.dot(&self.embedding),
        };
        Ok(projected)
    }
}
