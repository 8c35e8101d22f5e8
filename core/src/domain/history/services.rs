use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    history::{
        entities::HistoryRecord,
        ports::{HistoryRepository, HistoryService},
        value_objects::{SaveHistoryInput, ViewHistoryInput},
    },
    recipe::{
        entities::RecipeView,
        ports::{ImageRecognitionClient, LLMClient, UploadStoragePort},
    },
};

impl<HR, HC, LLM, IR, US> HistoryService for Service<HR, HC, LLM, IR, US>
where
    HR: HistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IR: ImageRecognitionClient,
    US: UploadStoragePort,
{
    #[instrument(skip(self, input))]
    async fn save_record(&self, input: SaveHistoryInput) -> Result<HistoryRecord, CoreError> {
        let record = HistoryRecord::new(input.ingredients, input.markdown, input.nutrition);
        let record = self.history_repository.create_record(record).await?;

        info!(record_id = %record.id, "Saved recipe to history");

        Ok(record)
    }

    async fn list_records(&self) -> Result<Vec<HistoryRecord>, CoreError> {
        self.history_repository.list_records().await
    }

    #[instrument(skip(self), fields(record_id = %input.record_id))]
    async fn view_record(&self, input: ViewHistoryInput) -> Result<Option<RecipeView>, CoreError> {
        let record = self.history_repository.get_by_id(input.record_id).await?;

        Ok(record.as_ref().map(RecipeView::from_history))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository,
        history::ports::MockHistoryRepository,
        recipe::ports::{MockImageRecognitionClient, MockLLMClient, MockUploadStoragePort},
    };

    fn service(
        history: MockHistoryRepository,
    ) -> Service<
        MockHistoryRepository,
        MockHealthCheckRepository,
        MockLLMClient,
        MockImageRecognitionClient,
        MockUploadStoragePort,
    > {
        Service::new(
            history,
            MockHealthCheckRepository::new(),
            MockLLMClient::new(),
            MockImageRecognitionClient::new(),
            MockUploadStoragePort::new(),
        )
    }

    #[tokio::test]
    async fn test_save_record_stores_fields_verbatim() {
        let mut history = MockHistoryRepository::new();
        history
            .expect_create_record()
            .withf(|record| {
                record.ingredients == "rice,beans"
                    && record.markdown == "\"# Soup\""
                    && record.nutrition.is_empty()
            })
            .times(1)
            .returning(|record| Box::pin(async move { Ok(record) }));

        let record = service(history)
            .save_record(SaveHistoryInput {
                ingredients: "rice,beans".to_string(),
                markdown: "\"# Soup\"".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(record.markdown, "\"# Soup\"");
    }

    #[tokio::test]
    async fn test_view_record_applies_redisplay() {
        let stored = HistoryRecord::new(
            "rice".to_string(),
            "\"# Rice\nCook it.\"".to_string(),
            "Calories: 120 kcal, Fiber: 2 g".to_string(),
        );
        let id = stored.id;

        let mut history = MockHistoryRepository::new();
        history
            .expect_get_by_id()
            .withf(move |record_id| *record_id == id)
            .returning(move |_| {
                let stored = stored.clone();
                Box::pin(async move { Ok(Some(stored)) })
            });

        let view = service(history)
            .view_record(ViewHistoryInput { record_id: id })
            .await
            .unwrap()
            .expect("record exists");

        assert_eq!(view.markdown, "# **Rice**\nCook it.");
        assert_eq!(view.chart_data.as_array(), [120.0, 0.0, 2.0, 0.0]);
    }

    #[tokio::test]
    async fn test_view_missing_record() {
        let mut history = MockHistoryRepository::new();
        history
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let view = service(history)
            .view_record(ViewHistoryInput {
                record_id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert!(view.is_none());
    }

    #[tokio::test]
    async fn test_list_records_propagates_errors() {
        let mut history = MockHistoryRepository::new();
        history
            .expect_list_records()
            .returning(|| Box::pin(async { Err(CoreError::InternalServerError) }));

        let result = service(history).list_records().await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }
}
