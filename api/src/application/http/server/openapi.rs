use crate::application::http::{
    health::HealthApiDoc, history::router::HistoryApiDoc, home::HomeApiDoc,
    recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Cookwise API",
    description = "Budget recipes from the ingredients you have, with a nutrition estimate."
))]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every route group. All groups are mounted at the root.
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = Self::openapi();
        openapi.merge(RecipeApiDoc::openapi());
        openapi.merge(HistoryApiDoc::openapi());
        openapi.merge(HomeApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_document_lists_every_route() {
        let openapi = ApiDoc::merged();
        let paths: Vec<&str> = openapi.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/",
            "/result",
            "/detect",
            "/save",
            "/history",
            "/view/{id}",
            "/about",
            "/health",
            "/health/ready",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
