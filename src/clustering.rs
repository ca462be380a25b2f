//! Nearest-centroid assignment
//!
//! The centroids are the result of a k-means fit done offline. Given a set of
//! centroids, an observation is assigned to a cluster by choosing the nearest
//! centroid under the Euclidean distance.

use crate::error::{Error, Result};
use crate::traits::{Predict, Transformer};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};
use ndarray_stats::DeviationExt;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Fitted set of centroids
///
/// `centroids` has shape `(n_clusters, n_components)`, the i-th row is the
/// centroid of cluster `i`.
///
/// ```rust
/// use carbon_clusters::clustering::Clusterer;
/// use carbon_clusters::traits::Predict;
/// use ndarray::array;
///
/// let clusterer = Clusterer::new(array![[0., 0.], [10., 10.]]).unwrap();
/// let cluster: usize = clusterer.predict(&array![9., 8.]).unwrap();
/// assert_eq!(cluster, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClustererParams")]
pub struct Clusterer {
    centroids: Array2<f64>,
}

#[derive(Deserialize)]
struct ClustererParams {
    centroids: Array2<f64>,
}

impl TryFrom<ClustererParams> for Clusterer {
    type Error = Error;

    fn try_from(params: ClustererParams) -> Result<Self> {
        Self::new(params.centroids)
    }
}

impl Clusterer {
    pub fn new(centroids: Array2<f64>) -> Result<Self> {
        if centroids.nrows() == 0 {
            return Err(Error::InvalidArtifact(
                "clusterer",
                "there has to be at least one centroid".into(),
            ));
        }
        if centroids.ncols() == 0 {
            return Err(Error::InvalidArtifact(
                "clusterer",
                "centroids have no components".into(),
            ));
        }
        if centroids.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidArtifact(
                "clusterer",
                "centroids must be finite".into(),
            ));
        }

        Ok(Self { centroids })
    }

    /// Centroids with shape `(n_clusters, n_components)`
    pub fn centroids(&self) -> &Array2<f64> {
        &self.centroids
    }

    pub fn n_clusters(&self) -> usize {
        self.centroids.nrows()
    }

    /// Dimension of the space the centroids live in
    pub fn n_components(&self) -> usize {
        self.centroids.ncols()
    }

    /// Index of the centroid closest to `observation`
    pub fn assign<D: Data<Elem = f64>>(&self, observation: &ArrayBase<D, Ix1>) -> Result<usize> {
        Error::check_dim("clusterer", self.n_components(), observation.len())?;
        Ok(closest_centroid(&self.centroids, observation).0)
    }
}

impl<'a, D: Data<Elem = f64>> Transformer<&'a ArrayBase<D, Ix1>, Array1<f64>> for Clusterer {
    /// Euclidean distance of the observation to every centroid, in centroid order
    fn transform(&self, observation: &'a ArrayBase<D, Ix1>) -> Result<Array1<f64>> {
        Error::check_dim("clusterer", self.n_components(), observation.len())?;
        Ok(self
            .centroids
            .map_axis(Axis(1), |centroid| sq_dist(&centroid, observation).sqrt()))
    }
}

impl<'a, D: Data<Elem = f64>> Predict<&'a ArrayBase<D, Ix1>, usize> for Clusterer {
    fn predict(&self, observation: &'a ArrayBase<D, Ix1>) -> Result<usize> {
        self.assign(observation)
    }
}

impl<'a, D: Data<Elem = f64>> Predict<&'a ArrayBase<D, Ix2>, Array1<usize>> for Clusterer {
    /// Given an input matrix `observations`, with shape `(n_observations, n_components)`,
    /// `predict` returns, for each observation, the index of the closest centroid.
    fn predict(&self, observations: &'a ArrayBase<D, Ix2>) -> Result<Array1<usize>> {
        Error::check_dim("clusterer", self.n_components(), observations.ncols())?;
        Ok(observations.map_axis(Axis(1), |observation| {
            closest_centroid(&self.centroids, &observation).0
        }))
    }
}

fn sq_dist(
    a: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    b: &ArrayBase<impl Data<Elem = f64>, Ix1>,
) -> f64 {
    // both operands are checked against the centroid dimension beforehand
    a.sq_l2_dist(b).unwrap_or(f64::INFINITY)
}

/// Given a matrix of centroids with shape (n_centroids, n_components) and an observation,
/// return the index of the closest centroid (the index of the corresponding row in `centroids`)
/// together with the squared distance to it.
///
/// Centroids are scanned in row order and only a strictly smaller distance replaces the
/// current minimum, so on ties the lowest index wins.
pub(crate) fn closest_centroid(
    // (n_centroids, n_components)
    centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    // (n_components)
    observation: &ArrayBase<impl Data<Elem = f64>, Ix1>,
) -> (usize, f64) {
    let first_centroid = centroids.row(0);
    let (mut closest_index, mut minimum_distance) = (0, sq_dist(&first_centroid, observation));

    for (centroid_index, centroid) in centroids.rows().into_iter().enumerate().skip(1) {
        let distance = sq_dist(&centroid, observation);
        if distance < minimum_distance {
            closest_index = centroid_index;
            minimum_distance = distance;
        }
    }
    (closest_index, minimum_distance)
}
