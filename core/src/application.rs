use tracing::info;

use crate::{
    domain::common::{CookwiseConfig, services::Service},
    infrastructure::{
        db::sqlite::{Sqlite, SqliteConfig},
        health::SqliteHealthCheckRepository,
        history::SqliteHistoryRepository,
        image_recognition::LogMealClient,
        llm::GeminiLLMClient,
        uploads::LocalUploadStorage,
    },
};

pub type CookwiseService = Service<
    SqliteHistoryRepository,
    SqliteHealthCheckRepository,
    GeminiLLMClient,
    LogMealClient,
    LocalUploadStorage,
>;

/// Wire every adapter from the configuration.
pub async fn create_service(config: CookwiseConfig) -> Result<CookwiseService, anyhow::Error> {
    let sqlite = Sqlite::new(SqliteConfig {
        database_url: config.database.url.clone(),
    })
    .await?;

    let history_repository = SqliteHistoryRepository::new(sqlite.get_db());
    let health_check_repository = SqliteHealthCheckRepository::new(sqlite.get_db());
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    let image_recognition = LogMealClient::new(&config.image_recognition)?;
    let upload_storage = LocalUploadStorage::new(&config.uploads).await?;

    info!(
        model = %config.llm.gemini_model,
        uploads = %config.uploads.directory.display(),
        "Cookwise service ready"
    );

    Ok(Service::new(
        history_repository,
        health_check_repository,
        llm_client,
        image_recognition,
        upload_storage,
    ))
}
