//! Linear scaling of raw features
//!
//! The scaler is fitted offline and only applied here: every feature is
//! centered by its `center` component and divided by its `scale` component.

use crate::error::{Error, Result};
use crate::traits::Transformer;
use approx::abs_diff_eq;
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Fitted standard scaler
///
/// Applies `(x - center) / scale` to each feature. Both vectors have one
/// component per feature and no component of `scale` is zero.
///
/// ### Example
///
/// ```rust
/// use carbon_clusters::preprocessing::FeatureScaler;
/// use carbon_clusters::traits::Transformer;
/// use ndarray::array;
///
/// let scaler = FeatureScaler::new(array![1., 2.], array![2., 4.]).unwrap();
/// let scaled = scaler.transform(&array![3., 2.]).unwrap();
/// assert_eq!(scaled, array![1., 0.]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScalerParams")]
pub struct FeatureScaler {
    center: Array1<f64>,
    scale: Array1<f64>,
}

#[derive(Deserialize)]
struct ScalerParams {
    center: Array1<f64>,
    scale: Array1<f64>,
}

impl TryFrom<ScalerParams> for FeatureScaler {
    type Error = Error;

    fn try_from(params: ScalerParams) -> Result<Self> {
        Self::new(params.center, params.scale)
    }
}

impl FeatureScaler {
    /// Builds a scaler from its fitted parameters, checking that they can be applied
    pub fn new(center: Array1<f64>, scale: Array1<f64>) -> Result<Self> {
        if center.is_empty() {
            return Err(Error::InvalidArtifact("scaler", "no features".into()));
        }
        if center.len() != scale.len() {
            return Err(Error::InvalidArtifact(
                "scaler",
                format!(
                    "center has {} components but scale has {}",
                    center.len(),
                    scale.len()
                ),
            ));
        }
        if center.iter().chain(scale.iter()).any(|x| !x.is_finite()) {
            return Err(Error::InvalidArtifact(
                "scaler",
                "parameters must be finite".into(),
            ));
        }
        if let Some(idx) = scale.iter().position(|&s| abs_diff_eq!(s, 0.0)) {
            return Err(Error::InvalidArtifact(
                "scaler",
                format!("scale of feature {} is zero", idx),
            ));
        }

        Ok(Self { center, scale })
    }

    /// Array of size `n_features` that is subtracted from each feature
    pub fn center(&self) -> &Array1<f64> {
        &self.center
    }

    /// Array of size `n_features` that divides each centered feature
    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    pub fn n_features(&self) -> usize {
        self.center.len()
    }

    /// Undo the scaling of a single observation: `x * scale + center`
    pub fn inverse_transform<D: Data<Elem = f64>>(
        &self,
        x: &ArrayBase<D, Ix1>,
    ) -> Result<Array1<f64>> {
        Error::check_dim("scaler", self.n_features(), x.len())?;
        Ok(x * &self.scale + &self.center)
    }
}

impl<'a, D: Data<Elem = f64>> Transformer<&'a ArrayBase<D, Ix1>, Array1<f64>> for FeatureScaler {
    fn transform(&self, x: &'a ArrayBase<D, Ix1>) -> Result<Array1<f64>> {
        Error::check_dim("scaler", self.n_features(), x.len())?;
        Ok((x - &self.center) / &self.scale)
    }
}

impl<'a, D: Data<Elem = f64>> Transformer<&'a ArrayBase<D, Ix2>, Array2<f64>> for FeatureScaler {
    /// Scales an array of size (n_observations, n_features), column by column
    fn transform(&self, x: &'a ArrayBase<D, Ix2>) -> Result<Array2<f64>> {
        Error::check_dim("scaler", self.n_features(), x.ncols())?;
        Ok((x - &self.center) / &self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn scaler() -> FeatureScaler {
        FeatureScaler::new(
            array![10.0, 0.4, 0.3, 0.2, 0.1],
            array![5.0, 0.2, 0.1, 0.1, 0.05],
        )
        .unwrap()
    }

    #[test]
    fn standardizes_each_feature() {
        let scaled = scaler().transform(&array![5.0, 0.6, 0.2, 0.1, 0.1]).unwrap();
        assert_abs_diff_eq!(scaled, array![-1.0, 1.0, -1.0, -1.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn scales_records_row_by_row() {
        let records = array![[5.0, 0.6, 0.2, 0.1, 0.1], [10.0, 0.4, 0.3, 0.2, 0.1]];
        let scaled = scaler().transform(&records).unwrap();
        assert_abs_diff_eq!(
            scaled,
            array![[-1.0, 1.0, -1.0, -1.0, 0.0], [0.0, 0.0, 0.0, 0.0, 0.0]],
            epsilon = 1e-12
        );
    }

    #[test]
    fn descale_recovers_input() {
        let scaler = scaler();
        for x in &[
            array![5.0, 0.6, 0.2, 0.1, 0.1],
            array![0.0, 0.0, 0.0, 0.0, 0.0],
            array![12345.678, 0.25, 0.25, 0.25, 0.25],
        ] {
            let roundtrip = scaler
                .inverse_transform(&scaler.transform(x).unwrap())
                .unwrap();
            assert_abs_diff_eq!(roundtrip, *x, epsilon = 1e-9);
        }
    }

    #[test]
    fn rejects_wrong_dimension() {
        let err = scaler().transform(&array![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 5,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_scale() {
        let err = FeatureScaler::new(array![0.0, 0.0], array![1.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact("scaler", _)));
    }

    #[test]
    fn rejects_length_disagreement() {
        assert!(FeatureScaler::new(array![0.0, 0.0], array![1.0]).is_err());
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{
            "center": {"v": 1, "dim": [2], "data": [0.0, 0.0]},
            "scale": {"v": 1, "dim": [2], "data": [1.0, 0.0]}
        }"#;
        assert!(serde_json::from_str::<FeatureScaler>(json).is_err());

        let json = json.replace("[1.0, 0.0]", "[1.0, 2.0]");
        let scaler: FeatureScaler = serde_json::from_str(&json).unwrap();
        assert_eq!(scaler.scale(), &array![1.0, 2.0]);
    }
}
