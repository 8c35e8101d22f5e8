use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_LANGUAGE: &str = "English";

/// Four nutrition values derived from a nutrition line, in chart order.
///
/// Never persisted. Serialized as `[calories, protein, fiber, vitamin_a]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct ChartData {
    pub calories: f64,
    pub protein: f64,
    pub fiber: f64,
    pub vitamin_a: f64,
}

impl ChartData {
    pub fn as_array(&self) -> [f64; 4] {
        [self.calories, self.protein, self.fiber, self.vitamin_a]
    }
}

impl From<[f64; 4]> for ChartData {
    fn from([calories, protein, fiber, vitamin_a]: [f64; 4]) -> Self {
        Self {
            calories,
            protein,
            fiber,
            vitamin_a,
        }
    }
}

impl From<ChartData> for [f64; 4] {
    fn from(chart: ChartData) -> Self {
        chart.as_array()
    }
}

/// The three semantic segments of a model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelReply {
    pub markdown: String,
    pub nutrition: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    pub language: String,
}

impl RecipeRequest {
    pub fn new(ingredients: Vec<String>, language: Option<String>) -> Self {
        let language = language
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Self {
            ingredients,
            language,
        }
    }

    pub fn ingredients_csv(&self) -> String {
        self.ingredients.join(",")
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// Everything the presentation layer needs to render a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeView {
    pub ingredients: String,
    pub markdown: String,
    pub nutrition: String,
    pub suggestion: String,
    #[schema(value_type = Vec<f64>)]
    pub chart_data: ChartData,
    pub language: String,
    pub error: Option<String>,
}

impl RecipeView {
    pub fn from_reply(request: &RecipeRequest, reply: ModelReply, chart_data: ChartData) -> Self {
        Self {
            ingredients: request.ingredients_csv(),
            markdown: reply.markdown,
            nutrition: reply.nutrition,
            suggestion: reply.suggestion,
            chart_data,
            language: request.language.clone(),
            error: None,
        }
    }

    pub fn from_failure(request: &RecipeRequest, error: String) -> Self {
        Self {
            ingredients: request.ingredients_csv(),
            markdown: String::new(),
            nutrition: String::new(),
            suggestion: String::new(),
            chart_data: ChartData::default(),
            language: request.language.clone(),
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedImage {
    pub fn new(file_name: String, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            file_name,
            content_type,
            data,
        }
    }

    pub fn mime_type(&self) -> &str {
        self.content_type
            .as_deref()
            .unwrap_or("application/octet-stream")
    }
}

/// Identifier the image recognition service assigns to a segmented image.
///
/// The service answers with a number, but some deployments send strings;
/// both are echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageId {
    Numeric(u64),
    Text(String),
}

impl ImageId {
    /// Zero and empty identifiers carry no image.
    pub fn is_blank(&self) -> bool {
        match self {
            ImageId::Numeric(id) => *id == 0,
            ImageId::Text(id) => id.trim().is_empty(),
        }
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageId::Numeric(id) => write!(f, "{id}"),
            ImageId::Text(id) => f.write_str(id),
        }
    }
}
