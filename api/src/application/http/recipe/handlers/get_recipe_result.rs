use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response as AxumResponse},
};
use cookwise_core::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::RecipeView, ports::RecipeService, value_objects::GenerateRecipeInput},
};

use crate::application::http::{
    recipe::validators::RecipeResultParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/result",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Asks the language model for a recipe, a nutrition estimate and a suggestion. A model failure is reported in the `error` field; an empty ingredient list redirects to the input form.",
    params(RecipeResultParams),
    responses(
        (status = 200, body = RecipeView),
        (status = 303, description = "No ingredients, redirect to the input form"),
    ),
)]
pub async fn get_recipe_result(
    State(state): State<AppState>,
    Query(params): Query<RecipeResultParams>,
) -> Result<AxumResponse, ApiError> {
    let result = state
        .service
        .generate_recipe(GenerateRecipeInput {
            ingredients: params.ingredients,
            language: params.language,
        })
        .await;

    match result {
        Ok(view) => Ok(Response::OK(view).into_response()),
        Err(CoreError::MissingIngredients) => Ok(Redirect::to(&state.path("/")).into_response()),
        Err(e) => Err(ApiError::from(e)),
    }
}
