use crate::domain::history::entities::HistoryRecord;
use crate::entity::history::Model as HistoryModel;

impl From<&HistoryModel> for HistoryRecord {
    fn from(model: &HistoryModel) -> Self {
        Self {
            id: model.id,
            ingredients: model.ingredients.clone(),
            markdown: model.markdown.clone(),
            nutrition: model.nutrition.clone(),
            created_at: model.date_created,
        }
    }
}

impl From<HistoryModel> for HistoryRecord {
    fn from(model: HistoryModel) -> Self {
        Self {
            id: model.id,
            ingredients: model.ingredients,
            markdown: model.markdown,
            nutrition: model.nutrition,
            created_at: model.date_created,
        }
    }
}
