use tracing::{debug, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    history::ports::HistoryRepository,
    recipe::{
        entities::{RecipeRequest, RecipeView, UploadedImage},
        ingredients::{merge_ingredients, parse_ingredient_list},
        nutrition::extract_chart_data,
        ports::{ImageRecognitionClient, LLMClient, RecipeService, UploadStoragePort},
        prompt::build_recipe_prompt,
        reply::split_model_reply,
        value_objects::{CollectIngredientsInput, GenerateRecipeInput},
    },
};

impl<HR, HC, LLM, IR, US> RecipeService for Service<HR, HC, LLM, IR, US>
where
    HR: HistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IR: ImageRecognitionClient,
    US: UploadStoragePort,
{
    #[instrument(skip(self, image), fields(file_name = %image.file_name, size = image.data.len()))]
    async fn detect_ingredients(&self, image: UploadedImage) -> Vec<String> {
        if let Err(e) = self.upload_storage.store(image.clone()).await {
            warn!("Failed to keep a copy of the upload: {}", e);
        }

        let image_id = match self.image_recognition.segment_image(image).await {
            Ok(Some(image_id)) if !image_id.is_blank() => image_id,
            Ok(_) => {
                warn!("Image segmentation returned no image id");
                return Vec::new();
            }
            Err(e) => {
                warn!("Image segmentation failed: {}", e);
                return Vec::new();
            }
        };

        match self.image_recognition.recipe_ingredients(image_id).await {
            Ok(ingredients) => {
                debug!(count = ingredients.len(), "Detected ingredients");
                ingredients
            }
            Err(e) => {
                warn!("Ingredient detection failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn collect_ingredients(&self, input: CollectIngredientsInput) -> RecipeRequest {
        let typed = parse_ingredient_list(&input.ingredients);
        let detected = match input.image {
            Some(image) => self.detect_ingredients(image).await,
            None => Vec::new(),
        };

        RecipeRequest::new(merge_ingredients(typed, detected), input.language)
    }

    #[instrument(skip(self, input))]
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<RecipeView, CoreError> {
        let request = RecipeRequest::new(parse_ingredient_list(&input.ingredients), input.language);
        if request.is_empty() {
            return Err(CoreError::MissingIngredients);
        }

        let prompt = build_recipe_prompt(&request);

        let text = match self.llm_client.generate_text(prompt).await {
            Ok(text) => text,
            Err(e) => {
                let message = match e {
                    CoreError::ExternalServiceError(message) => message,
                    other => other.to_string(),
                };
                return Ok(RecipeView::from_failure(&request, message));
            }
        };

        let reply = split_model_reply(&text);
        let chart_data = extract_chart_data(&reply.nutrition);

        Ok(RecipeView::from_reply(&request, reply, chart_data))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bytes::Bytes;

    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository,
        history::ports::MockHistoryRepository,
        recipe::{
            entities::ImageId,
            ports::{MockImageRecognitionClient, MockLLMClient, MockUploadStoragePort},
        },
    };

    type TestService = Service<
        MockHistoryRepository,
        MockHealthCheckRepository,
        MockLLMClient,
        MockImageRecognitionClient,
        MockUploadStoragePort,
    >;

    fn service(
        llm: MockLLMClient,
        recognition: MockImageRecognitionClient,
        uploads: MockUploadStoragePort,
    ) -> TestService {
        Service::new(
            MockHistoryRepository::new(),
            MockHealthCheckRepository::new(),
            llm,
            recognition,
            uploads,
        )
    }

    fn image() -> UploadedImage {
        UploadedImage::new(
            "plate.jpg".to_string(),
            Some("image/jpeg".to_string()),
            Bytes::from_static(b"\xff\xd8\xff"),
        )
    }

    fn storing_uploads() -> MockUploadStoragePort {
        let mut uploads = MockUploadStoragePort::new();
        uploads
            .expect_store()
            .returning(|_| Box::pin(async { Ok(PathBuf::from("uploads/plate.jpg")) }));
        uploads
    }

    #[tokio::test]
    async fn test_detect_ingredients_happy_path() {
        let mut recognition = MockImageRecognitionClient::new();
        recognition
            .expect_segment_image()
            .times(1)
            .returning(|_| Box::pin(async { Ok(Some(ImageId::Numeric(42))) }));
        recognition
            .expect_recipe_ingredients()
            .withf(|id| *id == ImageId::Numeric(42))
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(vec!["rice".to_string(), "tomato".to_string()]) })
            });

        let service = service(MockLLMClient::new(), recognition, storing_uploads());

        assert_eq!(service.detect_ingredients(image()).await, vec!["rice", "tomato"]);
    }

    #[tokio::test]
    async fn test_detect_ingredients_degrades_on_segmentation_failure() {
        let mut recognition = MockImageRecognitionClient::new();
        recognition.expect_segment_image().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });
        recognition.expect_recipe_ingredients().never();

        let service = service(MockLLMClient::new(), recognition, storing_uploads());

        assert!(service.detect_ingredients(image()).await.is_empty());
    }

    #[tokio::test]
    async fn test_detect_ingredients_skips_blank_image_id() {
        let mut recognition = MockImageRecognitionClient::new();
        recognition
            .expect_segment_image()
            .returning(|_| Box::pin(async { Ok(Some(ImageId::Numeric(0))) }));
        recognition.expect_recipe_ingredients().never();

        let service = service(MockLLMClient::new(), recognition, storing_uploads());

        assert!(service.detect_ingredients(image()).await.is_empty());
    }

    #[tokio::test]
    async fn test_detect_ingredients_survives_storage_failure() {
        let mut uploads = MockUploadStoragePort::new();
        uploads.expect_store().returning(|_| {
            Box::pin(async { Err(CoreError::StorageError("disk full".to_string())) })
        });
        let mut recognition = MockImageRecognitionClient::new();
        recognition
            .expect_segment_image()
            .returning(|_| Box::pin(async { Ok(Some(ImageId::Text("abc".to_string()))) }));
        recognition.expect_recipe_ingredients().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("bad payload".to_string())) })
        });

        let service = service(MockLLMClient::new(), recognition, uploads);

        assert!(service.detect_ingredients(image()).await.is_empty());
    }

    #[tokio::test]
    async fn test_collect_ingredients_merges_typed_and_detected() {
        let mut recognition = MockImageRecognitionClient::new();
        recognition
            .expect_segment_image()
            .returning(|_| Box::pin(async { Ok(Some(ImageId::Numeric(7))) }));
        recognition.expect_recipe_ingredients().returning(|_| {
            Box::pin(async { Ok(vec!["beans".to_string(), "carrot".to_string()]) })
        });

        let service = service(MockLLMClient::new(), recognition, storing_uploads());

        let request = service
            .collect_ingredients(CollectIngredientsInput {
                ingredients: "rice, beans".to_string(),
                language: None,
                image: Some(image()),
            })
            .await;

        assert_eq!(request.ingredients, vec!["rice", "beans", "carrot"]);
        assert_eq!(request.language, "English");
    }

    #[tokio::test]
    async fn test_generate_recipe_requires_ingredients() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().never();

        let service = service(
            llm,
            MockImageRecognitionClient::new(),
            MockUploadStoragePort::new(),
        );

        let result = service
            .generate_recipe(GenerateRecipeInput {
                ingredients: " , ".to_string(),
                language: None,
            })
            .await;

        assert_eq!(result, Err(CoreError::MissingIngredients));
    }

    #[tokio::test]
    async fn test_generate_recipe_parses_reply() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(|prompt| prompt.contains("rice, beans") && prompt.contains("Respond in: French"))
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok("---\n# Diri ak pwa\n---\nNutrition: Calories: 250 kcal, Protein: 10 g, Fiber: 5 g, Vitamin A: 2 mg\n---\nSuggestion: add **greens**\n---".to_string())
                })
            });

        let service = service(
            llm,
            MockImageRecognitionClient::new(),
            MockUploadStoragePort::new(),
        );

        let view = service
            .generate_recipe(GenerateRecipeInput {
                ingredients: "rice,beans".to_string(),
                language: Some("French".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(view.markdown, "# Diri ak pwa");
        assert_eq!(
            view.nutrition,
            "Calories: 250 kcal, Protein: 10 g, Fiber: 5 g, Vitamin A: 2 mg"
        );
        assert_eq!(view.suggestion, "add **greens**");
        assert_eq!(view.chart_data.as_array(), [250.0, 10.0, 5.0, 2.0]);
        assert_eq!(view.ingredients, "rice,beans");
        assert_eq!(view.language, "French");
        assert!(view.error.is_none());
    }

    #[tokio::test]
    async fn test_generate_recipe_surfaces_llm_failure() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().returning(|_| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "LLM API error: connection refused".to_string(),
                ))
            })
        });

        let service = service(
            llm,
            MockImageRecognitionClient::new(),
            MockUploadStoragePort::new(),
        );

        let view = service
            .generate_recipe(GenerateRecipeInput {
                ingredients: "rice".to_string(),
                language: None,
            })
            .await
            .unwrap();

        assert_eq!(view.error.as_deref(), Some("LLM API error: connection refused"));
        assert!(view.markdown.is_empty());
        assert_eq!(view.chart_data.as_array(), [0.0; 4]);
        assert_eq!(view.ingredients, "rice");
    }
}
