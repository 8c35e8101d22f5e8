use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{
        entities::HistoryRecord,
        value_objects::{SaveHistoryInput, ViewHistoryInput},
    },
    recipe::entities::RecipeView,
};

/// Repository trait for saved recipes
#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    fn create_record(
        &self,
        record: HistoryRecord,
    ) -> impl Future<Output = Result<HistoryRecord, CoreError>> + Send;

    /// All records, newest first.
    fn list_records(&self) -> impl Future<Output = Result<Vec<HistoryRecord>, CoreError>> + Send;

    fn get_by_id(
        &self,
        record_id: Uuid,
    ) -> impl Future<Output = Result<Option<HistoryRecord>, CoreError>> + Send;
}

/// Service trait for the saved recipe history
#[cfg_attr(test, mockall::automock)]
pub trait HistoryService: Send + Sync {
    fn save_record(
        &self,
        input: SaveHistoryInput,
    ) -> impl Future<Output = Result<HistoryRecord, CoreError>> + Send;

    fn list_records(&self) -> impl Future<Output = Result<Vec<HistoryRecord>, CoreError>> + Send;

    /// Display payload of a saved record, or `None` if it does not exist.
    fn view_record(
        &self,
        input: ViewHistoryInput,
    ) -> impl Future<Output = Result<Option<RecipeView>, CoreError>> + Send;
}
