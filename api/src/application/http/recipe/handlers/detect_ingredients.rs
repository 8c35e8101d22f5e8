use axum::extract::{Multipart, State};
use cookwise_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::{DetectForm, read_image},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DetectIngredientsResponse {
    pub ingredients: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/detect",
    tag = "recipe",
    summary = "Detect ingredients in a photo",
    description = "Returns the food items recognised in the uploaded image. Recognition failures yield an empty list.",
    request_body(content = DetectForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = DetectIngredientsResponse),
    ),
)]
pub async fn detect_ingredients(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<DetectIngredientsResponse>, ApiError> {
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() == Some("image") {
            image = read_image(field).await?;
        }
    }

    let ingredients = match image {
        Some(image) => state.service.detect_ingredients(image).await,
        None => Vec::new(),
    };

    Ok(Response::OK(DetectIngredientsResponse { ingredients }))
}
