use axum::extract::State;
use cookwise_core::domain::history::{
    entities::HistoryRecord, ports::HistoryService, value_objects::SaveHistoryInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    history::validators::SaveHistoryRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveHistoryResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub data: HistoryRecord,
}

#[utoipa::path(
    post,
    path = "/save",
    tag = "history",
    summary = "Save a recipe result",
    request_body = SaveHistoryRequest,
    responses(
        (status = 200, body = SaveHistoryResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "A field is too long"),
    ),
)]
pub async fn save_history(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveHistoryRequest>,
) -> Result<Response<SaveHistoryResponse>, ApiError> {
    let record = state
        .service
        .save_record(SaveHistoryInput {
            ingredients: payload.ingredients,
            markdown: payload.markdown,
            nutrition: payload.nutrition,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SaveHistoryResponse {
        status: "ok".to_string(),
        data: record,
    }))
}
