use axum::extract::State;
use cookwise_core::domain::history::{entities::HistoryRecord, ports::HistoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListHistoryResponse {
    pub data: Vec<HistoryRecord>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    summary = "List saved recipes, newest first",
    responses(
        (status = 200, body = ListHistoryResponse)
    ),
)]
pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Response<ListHistoryResponse>, ApiError> {
    let records = state.service.list_records().await.map_err(ApiError::from)?;

    Ok(Response::OK(ListHistoryResponse { data: records }))
}
