//! Request and response bodies of the HTTP API

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use carbon_clusters::FeatureVector;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

pub const RUNNING_MESSAGE: &str = "🚀 Carbon Emission Clustering API is Running!";

pub const INTERPRETATION: &str =
    "Cluster ini menunjukkan kategori negara berdasarkan pola emisi karbon dan konsumsi energi.";

/// Emission data of a single country, as sent to `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionData {
    #[serde(rename = "Country")]
    pub country: String,
    /// Total carbon emission, in thousands of tonnes of CO2
    #[serde(rename = "Total")]
    pub total: f64,
    #[serde(rename = "Coal_Ratio")]
    pub coal_ratio: f64,
    #[serde(rename = "Oil_Ratio")]
    pub oil_ratio: f64,
    #[serde(rename = "Gas_Ratio")]
    pub gas_ratio: f64,
    #[serde(rename = "Cement_Ratio")]
    pub cement_ratio: f64,
}

impl EmissionData {
    /// Field level checks that the JSON schema alone cannot express
    pub fn validate(&self) -> Result<(), ApiError> {
        let fields = [
            ("Total", self.total),
            ("Coal_Ratio", self.coal_ratio),
            ("Oil_Ratio", self.oil_ratio),
            ("Gas_Ratio", self.gas_ratio),
            ("Cement_Ratio", self.cement_ratio),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(ApiError::Validation(format!(
                "{}: expected a finite number, got {}",
                name, value
            ))),
            None => Ok(()),
        }
    }

    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(
            self.total,
            self.coal_ratio,
            self.oil_ratio,
            self.gas_ratio,
            self.cement_ratio,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "Negara")]
    pub country: String,
    #[serde(rename = "Prediksi Cluster")]
    pub cluster: usize,
    #[serde(rename = "Deskripsi Cluster")]
    pub description: String,
    #[serde(rename = "Interpretasi")]
    pub interpretation: String,
}

/// An error returned to the client
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body does not match the schema
    #[error("{0}")]
    Validation(String),
    #[error("prediction failed: {0}")]
    Pipeline(#[from] carbon_clusters::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_capitalised_field_names() {
        let data: EmissionData = serde_json::from_str(
            r#"{"Country": "Indonesia", "Total": 5, "Coal_Ratio": 0.6,
                "Oil_Ratio": 0.2, "Gas_Ratio": 0.1, "Cement_Ratio": 0.1}"#,
        )
        .unwrap();
        assert_eq!(data.country, "Indonesia");
        assert_eq!(data.features(), FeatureVector::new(5.0, 0.6, 0.2, 0.1, 0.1));
        assert!(data.validate().is_ok());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let data = EmissionData {
            country: "Atlantis".into(),
            total: f64::INFINITY,
            coal_ratio: 0.0,
            oil_ratio: 0.0,
            gas_ratio: 0.0,
            cement_ratio: f64::NAN,
        };
        let err = data.validate().unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().starts_with("Total"));
    }

    #[test]
    fn response_keys() {
        let response = PredictResponse {
            country: "Indonesia".into(),
            cluster: 1,
            description: "desc".into(),
            interpretation: INTERPRETATION.into(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["Negara"], "Indonesia");
        assert_eq!(value["Prediksi Cluster"], 1);
        assert_eq!(value["Deskripsi Cluster"], "desc");
        assert_eq!(value["Interpretasi"], INTERPRETATION);
    }

    #[test]
    fn pipeline_errors_are_server_errors() {
        let err = ApiError::from(carbon_clusters::Error::DimensionMismatch {
            stage: "projector",
            expected: 5,
            actual: 4,
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
