//! Scale, project and assign in one call

use crate::clustering::Clusterer;
use crate::error::Result;
use crate::features::FeatureVector;
use crate::preprocessing::FeatureScaler;
use crate::reduction::Projector;
use crate::traits::{Predict, Transformer};
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

/// Composition of the three fitted stages
///
/// A pipeline borrows its stages, usually from an
/// [`ArtifactStore`](crate::store::ArtifactStore). Running it is pure: the same
/// observation always ends up in the same cluster. A dimension mismatch in any
/// stage is returned unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    scaler: &'a FeatureScaler,
    projector: &'a Projector,
    clusterer: &'a Clusterer,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        scaler: &'a FeatureScaler,
        projector: &'a Projector,
        clusterer: &'a Clusterer,
    ) -> Self {
        Self {
            scaler,
            projector,
            clusterer,
        }
    }

    /// Cluster index of a single country
    pub fn run(&self, features: &FeatureVector) -> Result<usize> {
        self.predict(&features.to_array())
    }
}

impl<'a, 'b, D: Data<Elem = f64>> Predict<&'b ArrayBase<D, Ix1>, usize> for Pipeline<'a> {
    fn predict(&self, x: &'b ArrayBase<D, Ix1>) -> Result<usize> {
        let scaled = self.scaler.transform(x)?;
        let projected = self.projector.transform(&scaled)?;
        self.clusterer.assign(&projected)
    }
}

impl<'a, 'b, D: Data<Elem = f64>> Predict<&'b ArrayBase<D, Ix2>, Array1<usize>> for Pipeline<'a> {
    /// Cluster index of every row of a `(n_observations, n_features)` matrix
    fn predict(&self, x: &'b ArrayBase<D, Ix2>) -> Result<Array1<usize>> {
        let scaled = self.scaler.transform(x)?;
        let projected = self.projector.transform(&scaled)?;
        self.clusterer.predict(&projected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use ndarray::{array, Array2};

    struct Stages {
        scaler: FeatureScaler,
        projector: Projector,
        clusterer: Clusterer,
    }

    impl Stages {
        fn new() -> Self {
            Stages {
                scaler: FeatureScaler::new(
                    array![10.0, 0.4, 0.3, 0.2, 0.1],
                    array![5.0, 0.2, 0.1, 0.1, 0.05],
                )
                .unwrap(),
                projector: Projector::new(
                    array![
                        [0.5, 0.1],
                        [0.5, -0.2],
                        [0.4, 0.6],
                        [0.4, 0.3],
                        [0.4, -0.7]
                    ],
                    None,
                )
                .unwrap(),
                clusterer: Clusterer::new(array![[-1.0, -1.0], [0.0, 0.0], [2.0, 1.0]]).unwrap(),
            }
        }

        fn pipeline(&self) -> Pipeline<'_> {
            Pipeline::new(&self.scaler, &self.projector, &self.clusterer)
        }
    }

    #[test]
    fn runs_all_stages() {
        let stages = Stages::new();
        let pipeline = stages.pipeline();

        // scaled to [-1, 1, -1, -1, 0], projected to [-0.8, -1.2]
        let features = FeatureVector::new(5.0, 0.6, 0.2, 0.1, 0.1);
        assert_eq!(pipeline.run(&features).unwrap(), 0);

        // scaled to [4, 0, 0, 0, 0], projected to [2.0, 0.4]
        let features = FeatureVector::new(30.0, 0.4, 0.3, 0.2, 0.1);
        assert_eq!(pipeline.run(&features).unwrap(), 2);
    }

    #[test]
    fn is_deterministic() {
        let stages = Stages::new();
        let features = FeatureVector::new(7.5, 0.3, 0.3, 0.3, 0.1);
        let first = stages.pipeline().run(&features).unwrap();
        for _ in 0..100 {
            assert_eq!(stages.pipeline().run(&features).unwrap(), first);
        }
    }

    #[test]
    fn all_zero_features_get_a_cluster() {
        let stages = Stages::new();
        let idx = stages
            .pipeline()
            .run(&FeatureVector::new(0.0, 0.0, 0.0, 0.0, 0.0))
            .unwrap();
        assert!(idx < stages.clusterer.n_clusters());
    }

    #[test]
    fn batch_matches_single_runs() {
        let stages = Stages::new();
        let pipeline = stages.pipeline();
        let records: Array2<f64> = array![
            [5.0, 0.6, 0.2, 0.1, 0.1],
            [30.0, 0.4, 0.3, 0.2, 0.1],
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [10.0, 0.4, 0.3, 0.2, 0.1]
        ];

        let memberships = pipeline.predict(&records).unwrap();
        for (row, &membership) in records.rows().into_iter().zip(memberships.iter()) {
            let single: usize = pipeline.predict(&row).unwrap();
            assert_eq!(single, membership);
        }
    }

    #[test]
    fn propagates_dimension_mismatch() {
        let stages = Stages::new();
        let clusterer = Clusterer::new(array![[0.0, 0.0, 0.0]]).unwrap();
        let pipeline = Pipeline::new(&stages.scaler, &stages.projector, &clusterer);

        let err = pipeline
            .run(&FeatureVector::new(5.0, 0.6, 0.2, 0.1, 0.1))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                stage: "clusterer",
                expected: 3,
                actual: 2
            }
        ));
    }
}
