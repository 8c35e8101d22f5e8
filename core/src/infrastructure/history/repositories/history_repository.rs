use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{entities::HistoryRecord, ports::HistoryRepository},
};
use crate::entity::history::{
    ActiveModel as HistoryActiveModel, Column as HistoryColumn, Entity as HistoryEntity,
};

#[derive(Debug, Clone)]
pub struct SqliteHistoryRepository {
    pub db: DatabaseConnection,
}

impl SqliteHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HistoryRepository for SqliteHistoryRepository {
    async fn create_record(&self, record: HistoryRecord) -> Result<HistoryRecord, CoreError> {
        let active_model = HistoryActiveModel {
            id: Set(record.id),
            ingredients: Set(record.ingredients),
            markdown: Set(record.markdown),
            nutrition: Set(record.nutrition),
            date_created: Set(record.created_at),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            error!("Failed to create history record: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(HistoryRecord::from(model))
    }

    async fn list_records(&self) -> Result<Vec<HistoryRecord>, CoreError> {
        let records = HistoryEntity::find()
            .order_by_desc(HistoryColumn::DateCreated)
            .order_by_desc(HistoryColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list history records: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(HistoryRecord::from)
            .collect::<Vec<HistoryRecord>>();

        Ok(records)
    }

    async fn get_by_id(&self, record_id: Uuid) -> Result<Option<HistoryRecord>, CoreError> {
        let record = HistoryEntity::find()
            .filter(HistoryColumn::Id.eq(record_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get history record by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(HistoryRecord::from);

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::sqlite::{Sqlite, SqliteConfig};

    async fn repository() -> SqliteHistoryRepository {
        let sqlite = Sqlite::new(SqliteConfig {
            database_url: "sqlite::memory:".to_string(),
        })
        .await
        .expect("in-memory database");

        SqliteHistoryRepository::new(sqlite.get_db())
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repository = repository().await;
        let record = HistoryRecord::new(
            "rice,beans".to_string(),
            "# Rice".to_string(),
            "Calories: 100 kcal".to_string(),
        );

        let created = repository.create_record(record.clone()).await.unwrap();
        assert_eq!(created.id, record.id);

        let fetched = repository.get_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(fetched.ingredients, "rice,beans");
        assert_eq!(fetched.markdown, "# Rice");
        assert_eq!(fetched.nutrition, "Calories: 100 kcal");
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let repository = repository().await;
        assert!(repository.get_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repository = repository().await;

        let mut older = HistoryRecord::new("a".into(), String::new(), String::new());
        older.created_at -= chrono::Duration::minutes(5);
        let newer = HistoryRecord::new("b".into(), String::new(), String::new());

        repository.create_record(older).await.unwrap();
        repository.create_record(newer).await.unwrap();

        let listed = repository.list_records().await.unwrap();
        let ingredients: Vec<_> = listed.iter().map(|r| r.ingredients.as_str()).collect();
        assert_eq!(ingredients, vec!["b", "a"]);
    }
}
