use super::handlers::{
    list_history::{__path_list_history, list_history},
    save_history::{__path_save_history, save_history},
    view_history::{__path_view_history, view_history},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(save_history, list_history, view_history))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(&state.path("/save"), post(save_history))
        .route(&state.path("/history"), get(list_history))
        .route(&state.path("/view/{id}"), get(view_history))
}
