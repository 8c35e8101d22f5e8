use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A saved recipe generation result. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub ingredients: String,
    pub markdown: String,
    pub nutrition: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(ingredients: String, markdown: String, nutrition: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            ingredients,
            markdown,
            nutrition,
            created_at: now,
        }
    }
}
