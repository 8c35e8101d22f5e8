use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response as AxumResponse},
};
use cookwise_core::domain::{
    history::{ports::HistoryService, value_objects::ViewHistoryInput},
    recipe::entities::RecipeView,
};
use tracing::debug;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/view/{id}",
    tag = "history",
    summary = "Redisplay a saved recipe",
    params(
        ("id" = Uuid, Path, description = "Saved record id"),
    ),
    responses(
        (status = 200, body = RecipeView),
        (status = 303, description = "Unknown id, redirect to the history list"),
    ),
)]
pub async fn view_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<AxumResponse, ApiError> {
    let view = state
        .service
        .view_record(ViewHistoryInput { record_id: id })
        .await
        .map_err(ApiError::from)?;

    match view {
        Some(view) => Ok(Response::OK(view).into_response()),
        None => {
            debug!("history record {id} not found");
            Ok(Redirect::to(&state.path("/history")).into_response())
        }
    }
}
