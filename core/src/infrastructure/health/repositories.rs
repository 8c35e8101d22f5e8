use std::time::Instant;

use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct SqliteHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl SqliteHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, CoreError> {
        let started = Instant::now();
        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for SqliteHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        self.ping().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let status = match self.ping().await {
            Ok(latency_ms) => DatabaseHealthStatus {
                healthy: true,
                latency_ms,
            },
            Err(_) => DatabaseHealthStatus {
                healthy: false,
                latency_ms: 0,
            },
        };

        Ok(status)
    }
}
