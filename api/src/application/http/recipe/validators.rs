use axum::extract::{Multipart, multipart::Field};
use cookwise_core::domain::recipe::entities::UploadedImage;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Query string of the recipe result page.
#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RecipeResultParams {
    /// Comma separated ingredient list.
    #[serde(default)]
    #[schema(example = "rice,beans,plantain")]
    pub ingredients: String,
    #[schema(example = "English")]
    pub language: Option<String>,
}

/// Ingredient form, sent as `multipart/form-data`.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct IngredientsForm {
    /// Comma separated ingredient list.
    pub ingredients: Option<String>,
    pub language: Option<String>,
    /// Photo of the ingredients.
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

/// Photo upload, sent as `multipart/form-data`.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct DetectForm {
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

/// Parsed ingredient form.
#[derive(Debug, Default)]
pub struct IngredientsSubmission {
    pub ingredients: String,
    pub language: Option<String>,
    pub image: Option<UploadedImage>,
}

impl IngredientsSubmission {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut submission = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            error!("Failed to read multipart field: {}", e);
            ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
        })? {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "ingredients" => {
                    submission.ingredients = field.text().await.map_err(|e| {
                        ApiError::BadRequest(format!("Failed to read ingredients: {}", e))
                    })?;
                }
                "language" => {
                    let language = field.text().await.map_err(|e| {
                        ApiError::BadRequest(format!("Failed to read language: {}", e))
                    })?;
                    submission.language = Some(language);
                }
                "image" => {
                    submission.image = read_image(field).await?;
                }
                _ => {}
            }
        }

        Ok(submission)
    }
}

/// Read an image field. Fields without a file name or without bytes count as
/// "no image".
pub async fn read_image(field: Field<'_>) -> Result<Option<UploadedImage>, ApiError> {
    let Some(file_name) = field
        .file_name()
        .map(str::to_string)
        .filter(|name| !name.is_empty())
    else {
        return Ok(None);
    };
    let content_type = field.content_type().map(str::to_string);

    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

    if data.is_empty() {
        warn!(file_name = %file_name, "Empty image upload ignored");
        return Ok(None);
    }

    if data.len() > MAX_IMAGE_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    Ok(Some(UploadedImage::new(file_name, content_type, data)))
}
