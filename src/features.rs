//! Raw feature vector of a single country
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Number of features every artifact is trained on
pub const N_FEATURES: usize = 5;

/// Feature names, in the column order the artifacts expect
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "Total",
    "Coal_Ratio",
    "Oil_Ratio",
    "Gas_Ratio",
    "Cement_Ratio",
];

/// Carbon-emission composition of a country
///
/// `total` is the total emission (in thousands of tonnes of CO2), the ratios
/// are the shares of coal, oil, gas and cement in that total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub total: f64,
    pub coal_ratio: f64,
    pub oil_ratio: f64,
    pub gas_ratio: f64,
    pub cement_ratio: f64,
}

impl FeatureVector {
    pub fn new(
        total: f64,
        coal_ratio: f64,
        oil_ratio: f64,
        gas_ratio: f64,
        cement_ratio: f64,
    ) -> Self {
        Self {
            total,
            coal_ratio,
            oil_ratio,
            gas_ratio,
            cement_ratio,
        }
    }

    /// Values in [`FEATURE_NAMES`] order
    pub fn values(&self) -> [f64; N_FEATURES] {
        [
            self.total,
            self.coal_ratio,
            self.oil_ratio,
            self.gas_ratio,
            self.cement_ratio,
        ]
    }

    pub fn to_array(&self) -> Array1<f64> {
        Array1::from(self.values().to_vec())
    }
}

impl From<FeatureVector> for Array1<f64> {
    fn from(features: FeatureVector) -> Self {
        features.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn column_order_matches_names() {
        let features = FeatureVector::new(5.0, 0.6, 0.2, 0.1, 0.1);
        assert_eq!(features.to_array(), array![5.0, 0.6, 0.2, 0.1, 0.1]);
        assert_eq!(FEATURE_NAMES[0], "Total");
        assert_eq!(FEATURE_NAMES[4], "Cement_Ratio");
    }
}
