use crate::api::{
    ApiError, EmissionData, PredictResponse, RootResponse, INTERPRETATION, RUNNING_MESSAGE,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use carbon_clusters::catalog;
use carbon_clusters::store::ArtifactStore;
use std::sync::Arc;
use tracing::{debug, error};

/// Request handler state: the loaded artifacts, shared read-only between requests
#[derive(Clone)]
pub struct ClusterService {
    store: Arc<ArtifactStore>,
}

impl ClusterService {
    pub fn new(store: ArtifactStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/predict", post(predict))
            .with_state(self)
    }

    /// Runs the pipeline for one validated request
    pub fn predict(&self, data: &EmissionData) -> Result<PredictResponse, ApiError> {
        let cluster = self.store.pipeline().run(&data.features())?;

        Ok(PredictResponse {
            country: data.country.clone(),
            cluster,
            description: catalog::describe(cluster).to_string(),
            interpretation: INTERPRETATION.to_string(),
        })
    }
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: RUNNING_MESSAGE.to_string(),
    })
}

async fn predict(
    State(service): State<ClusterService>,
    payload: Result<Json<EmissionData>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(data) = payload?;
    data.validate()?;

    match service.predict(&data) {
        Ok(response) => {
            debug!(country = %data.country, cluster = response.cluster, "predicted cluster");
            Ok(Json(response))
        }
        Err(e) => {
            error!(country = %data.country, "prediction failed: {}", e);
            Err(e)
        }
    }
}
