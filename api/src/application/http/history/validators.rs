use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Recipe result to keep. Every field is optional and defaults to empty.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct SaveHistoryRequest {
    #[serde(default)]
    #[validate(length(max = 2000, message = "ingredients must be at most 2000 characters"))]
    #[schema(example = "rice,beans")]
    pub ingredients: String,
    #[serde(default)]
    #[validate(length(max = 100000, message = "markdown must be at most 100000 characters"))]
    pub markdown: String,
    #[serde(default)]
    #[validate(length(max = 20000, message = "nutrition must be at most 20000 characters"))]
    #[schema(example = "Calories: 450 kcal, Protein: 12 g")]
    pub nutrition: String,
}
