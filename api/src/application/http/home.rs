use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AboutResponse {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[utoipa::path(
    get,
    path = "/about",
    tag = "home",
    summary = "About Cookwise",
    responses(
        (status = 200, body = AboutResponse)
    ),
)]
pub async fn get_about() -> Result<Response<AboutResponse>, ApiError> {
    Ok(Response::OK(AboutResponse {
        name: "Cookwise".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Low-cost, fuel-saving recipes from the ingredients you already have, \
                      with a nutrition estimate and suggestions to balance the meal."
            .to_string(),
    }))
}

#[derive(OpenApi)]
#[openapi(paths(get_about))]
pub struct HomeApiDoc;

pub fn home_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(&state.path("/about"), get(get_about))
}
