use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{
    common::{ImageRecognitionConfig, entities::app_errors::CoreError},
    recipe::{
        entities::{ImageId, UploadedImage},
        ports::ImageRecognitionClient,
    },
};

/// Client for the LogMeal v2 food recognition API.
#[derive(Debug, Clone)]
pub struct LogMealClient {
    api_key: String,
    base_url: String,
    client: Client,
}

/// Segmentation reply. `imageId` is absent when nothing was recognised.
#[derive(Debug, Deserialize)]
struct SegmentationResponse {
    #[serde(rename = "imageId")]
    image_id: Option<ImageId>,
}

#[derive(Debug, Serialize)]
struct RecipeIngredientsRequest<'a> {
    #[serde(rename = "imageId")]
    image_id: &'a ImageId,
}

/// Ingredient reply. A missing `recipe` means no ingredients.
#[derive(Debug, Deserialize)]
struct RecipeIngredientsResponse {
    #[serde(default)]
    recipe: Vec<RecipeItem>,
}

/// Items without a `name` are skipped.
#[derive(Debug, Deserialize)]
struct RecipeItem {
    name: Option<String>,
}

impl RecipeIngredientsResponse {
    fn names(self) -> Vec<String> {
        self.recipe.into_iter().filter_map(|item| item.name).collect()
    }
}

impl LogMealClient {
    pub fn new(config: &ImageRecognitionConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                error!("Failed to build LogMeal HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.logmeal_api_key.clone(),
            base_url: config.logmeal_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn ensure_success(response: Response, operation: &str) -> Result<Response, CoreError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        error!("LogMeal {} error: {} - {}", operation, status, error_text);

        Err(CoreError::ExternalServiceError(format!(
            "Image recognition {} returned error: {}",
            operation, status
        )))
    }
}

impl ImageRecognitionClient for LogMealClient {
    async fn segment_image(&self, image: UploadedImage) -> Result<Option<ImageId>, CoreError> {
        let part = Part::bytes(image.data.to_vec())
            .file_name(image.file_name.clone())
            .mime_str(image.mime_type())
            .map_err(|e| {
                error!("Invalid upload content type: {}", e);
                CoreError::Invalid
            })?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(self.url("/image/segmentation/complete"))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("LogMeal segmentation request failed: {}", e);
                CoreError::ExternalServiceError(format!("Image recognition error: {}", e))
            })?;

        let response = Self::ensure_success(response, "segmentation").await?;

        let segmentation: SegmentationResponse = response.json().await.map_err(|e| {
            error!("Failed to parse LogMeal segmentation response: {}", e);
            CoreError::ExternalServiceError(format!("Malformed segmentation response: {}", e))
        })?;

        Ok(segmentation.image_id)
    }

    async fn recipe_ingredients(&self, image_id: ImageId) -> Result<Vec<String>, CoreError> {
        let response = self
            .client
            .post(self.url("/nutrition/recipe/ingredients"))
            .bearer_auth(&self.api_key)
            .json(&RecipeIngredientsRequest {
                image_id: &image_id,
            })
            .send()
            .await
            .map_err(|e| {
                error!("LogMeal ingredients request failed for {}: {}", image_id, e);
                CoreError::ExternalServiceError(format!("Image recognition error: {}", e))
            })?;

        let response = Self::ensure_success(response, "ingredients").await?;

        let ingredients: RecipeIngredientsResponse = response.json().await.map_err(|e| {
            error!("Failed to parse LogMeal ingredients response: {}", e);
            CoreError::ExternalServiceError(format!("Malformed ingredients response: {}", e))
        })?;

        Ok(ingredients.names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmentation_response_variants() {
        let response: SegmentationResponse = serde_json::from_str(r#"{"imageId": 1234}"#).unwrap();
        assert_eq!(response.image_id, Some(ImageId::Numeric(1234)));

        let response: SegmentationResponse =
            serde_json::from_str(r#"{"segmentation_results": []}"#).unwrap();
        assert_eq!(response.image_id, None);
    }

    #[test]
    fn test_ingredient_names_skip_unnamed_items() {
        let response: RecipeIngredientsResponse = serde_json::from_str(
            r#"{"recipe": [{"name": "rice", "quantity": 80}, {"quantity": 3}, {"name": "beans"}]}"#,
        )
        .unwrap();
        assert_eq!(response.names(), vec!["rice", "beans"]);

        let response: RecipeIngredientsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.names().is_empty());
    }

    #[test]
    fn test_request_echoes_image_id_type() {
        let numeric = ImageId::Numeric(99);
        let body = serde_json::to_string(&RecipeIngredientsRequest { image_id: &numeric }).unwrap();
        assert_eq!(body, r#"{"imageId":99}"#);
    }
}
