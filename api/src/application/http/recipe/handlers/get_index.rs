use axum::extract::State;
use cookwise_core::domain::recipe::entities::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IndexResponse {
    pub default_language: String,
    /// Form target: `POST` with `ingredients`, `language` and `image`.
    pub submit_url: String,
    pub detect_url: String,
    pub history_url: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "recipe",
    summary = "Input form description",
    responses(
        (status = 200, body = IndexResponse)
    ),
)]
pub async fn get_index(State(state): State<AppState>) -> Result<Response<IndexResponse>, ApiError> {
    Ok(Response::OK(IndexResponse {
        default_language: DEFAULT_LANGUAGE.to_string(),
        submit_url: state.path("/"),
        detect_url: state.path("/detect"),
        history_url: state.path("/history"),
    }))
}
