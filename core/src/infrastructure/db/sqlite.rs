use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{error, info};

use crate::entity::history;

#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub database_url: String,
}

/// Handle on the SQLite store.
///
/// The pool is capped at one connection: the store has a single writer, and
/// an in-memory database only lives as long as its connection.
#[derive(Debug, Clone)]
pub struct Sqlite {
    db: DatabaseConnection,
}

impl Sqlite {
    pub async fn new(config: SqliteConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to {}: {}", config.database_url, e);
            e
        })?;

        let sqlite = Self { db };
        sqlite.create_schema().await?;

        info!("Connected to {}", config.database_url);

        Ok(sqlite)
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    async fn create_schema(&self) -> Result<(), anyhow::Error> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut table = schema.create_table_from_entity(history::Entity);
        table.if_not_exists();

        self.db.execute(backend.build(&table)).await?;

        Ok(())
    }
}
