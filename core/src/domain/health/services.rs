use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    history::ports::HistoryRepository,
    recipe::ports::{ImageRecognitionClient, LLMClient, UploadStoragePort},
};

impl<HR, HC, LLM, IR, US> HealthCheckService for Service<HR, HC, LLM, IR, US>
where
    HR: HistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    IR: ImageRecognitionClient,
    US: UploadStoragePort,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
