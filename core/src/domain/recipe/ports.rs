use std::future::Future;
use std::path::PathBuf;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{ImageId, RecipeRequest, RecipeView, UploadedImage},
        value_objects::{CollectIngredientsInput, GenerateRecipeInput},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(&self, prompt: String)
    -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Client for the third-party food image recognition service.
///
/// Adapters report every failure as an error; the recipe service decides
/// how to degrade.
#[cfg_attr(test, mockall::automock)]
pub trait ImageRecognitionClient: Send + Sync {
    /// Upload an image for segmentation. `None` when the service returned no id.
    fn segment_image(
        &self,
        image: UploadedImage,
    ) -> impl Future<Output = Result<Option<ImageId>, CoreError>> + Send;

    /// Names of the food items found in a segmented image.
    fn recipe_ingredients(
        &self,
        image_id: ImageId,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

/// Port for keeping a copy of uploaded images
#[cfg_attr(test, mockall::automock)]
pub trait UploadStoragePort: Send + Sync {
    fn store(
        &self,
        image: UploadedImage,
    ) -> impl Future<Output = Result<PathBuf, CoreError>> + Send;
}

/// Service trait for recipe generation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Detect ingredients in a photo. Never fails: any upstream problem
    /// yields an empty list.
    fn detect_ingredients(
        &self,
        image: UploadedImage,
    ) -> impl Future<Output = Vec<String>> + Send;

    /// Merge typed and detected ingredients into a recipe request.
    fn collect_ingredients(
        &self,
        input: CollectIngredientsInput,
    ) -> impl Future<Output = RecipeRequest> + Send;

    /// Ask the LLM for a recipe. LLM failures are reported in
    /// [`RecipeView::error`]; only a missing ingredient list is an `Err`.
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<RecipeView, CoreError>> + Send;
}
