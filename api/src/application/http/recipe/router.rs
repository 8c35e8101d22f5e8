use super::handlers::{
    detect_ingredients::{__path_detect_ingredients, detect_ingredients},
    get_index::{__path_get_index, get_index},
    get_recipe_result::{__path_get_recipe_result, get_recipe_result},
    submit_ingredients::{__path_submit_ingredients, submit_ingredients},
};
use super::validators::MAX_IMAGE_SIZE;
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_index, submit_ingredients, get_recipe_result, detect_ingredients))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(&state.path("/"), get(get_index).post(submit_ingredients))
        .route(&state.path("/result"), get(get_recipe_result))
        .route(&state.path("/detect"), post(detect_ingredients))
        // headroom over the image limit for the other form fields
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024))
}
