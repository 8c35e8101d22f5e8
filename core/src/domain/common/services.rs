use std::sync::Arc;

use crate::domain::{
    health::ports::HealthCheckRepository,
    history::ports::HistoryRepository,
    recipe::ports::{ImageRecognitionClient, LLMClient, UploadStoragePort},
};

/// Aggregates every port the domain services depend on.
///
/// Service traits (`RecipeService`, `HistoryService`, `HealthCheckService`)
/// are implemented on this type in their own modules.
pub struct Service<HR, HC, LLM, IR, US>
where
    HR: HistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IR: ImageRecognitionClient,
    US: UploadStoragePort,
{
    pub(crate) history_repository: Arc<HR>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) image_recognition: Arc<IR>,
    pub(crate) upload_storage: Arc<US>,
}

impl<HR, HC, LLM, IR, US> Service<HR, HC, LLM, IR, US>
where
    HR: HistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IR: ImageRecognitionClient,
    US: UploadStoragePort,
{
    pub fn new(
        history_repository: HR,
        health_check_repository: HC,
        llm_client: LLM,
        image_recognition: IR,
        upload_storage: US,
    ) -> Self {
        Self {
            history_repository: Arc::new(history_repository),
            health_check_repository: Arc::new(health_check_repository),
            llm_client: Arc::new(llm_client),
            image_recognition: Arc::new(image_recognition),
            upload_storage: Arc::new(upload_storage),
        }
    }
}

impl<HR, HC, LLM, IR, US> Clone for Service<HR, HC, LLM, IR, US>
where
    HR: HistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IR: ImageRecognitionClient,
    US: UploadStoragePort,
{
    fn clone(&self) -> Self {
        Self {
            history_repository: Arc::clone(&self.history_repository),
            health_check_repository: Arc::clone(&self.health_check_repository),
            llm_client: Arc::clone(&self.llm_client),
            image_recognition: Arc::clone(&self.image_recognition),
            upload_storage: Arc::clone(&self.upload_storage),
        }
    }
}
