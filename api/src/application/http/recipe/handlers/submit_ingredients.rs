use axum::{
    extract::{Multipart, State},
    response::Redirect,
};
use cookwise_core::domain::recipe::{ports::RecipeService, value_objects::CollectIngredientsInput};
use tracing::{error, info};

use crate::application::http::{
    recipe::validators::{IngredientsForm, IngredientsSubmission, RecipeResultParams},
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    post,
    path = "/",
    tag = "recipe",
    summary = "Submit ingredients",
    description = "Merges typed ingredients with the ones detected in an optional photo, then redirects to the recipe result.",
    request_body(content = IngredientsForm, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Redirect to the recipe result"),
        (status = 400, description = "Malformed form data"),
    ),
)]
pub async fn submit_ingredients(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let submission = IngredientsSubmission::from_multipart(multipart).await?;

    let request = state
        .service
        .collect_ingredients(CollectIngredientsInput {
            ingredients: submission.ingredients,
            language: submission.language,
            image: submission.image,
        })
        .await;

    info!(
        count = request.ingredients.len(),
        language = %request.language,
        "Collected ingredients"
    );

    let query = serde_urlencoded::to_string(RecipeResultParams {
        ingredients: request.ingredients_csv(),
        language: Some(request.language),
    })
    .map_err(|e| {
        error!("Failed to encode result query: {}", e);
        ApiError::InternalServerError("Failed to build redirect".to_string())
    })?;

    Ok(Redirect::to(&format!("{}?{}", state.path("/result"), query)))
}
