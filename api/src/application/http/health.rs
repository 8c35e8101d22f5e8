use axum::{Router, extract::State, routing::get};
use cookwise_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub latency_ms: u64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse),
        (status = 503, description = "Database unreachable"),
    ),
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    let latency_ms = state.service.health().await.map_err(|e| {
        error!("health check failed: {e}");
        ApiError::ServiceUnavailable("database unreachable".to_string())
    })?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        latency_ms,
    }))
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database not ready"),
    ),
)]
pub async fn get_readiness(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(|e| {
        error!("readiness check failed: {e}");
        ApiError::ServiceUnavailable("database not ready".to_string())
    })?;

    if !status.healthy {
        return Err(ApiError::ServiceUnavailable(
            "database not ready".to_string(),
        ));
    }

    Ok(Response::OK(status))
}

#[derive(OpenApi)]
#[openapi(paths(get_health, get_readiness))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(&state.path("/health"), get(get_health))
        .route(&state.path("/health/ready"), get(get_readiness))
}
