use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct SaveHistoryInput {
    pub ingredients: String,
    pub markdown: String,
    pub nutrition: String,
}

#[derive(Debug, Clone)]
pub struct ViewHistoryInput {
    pub record_id: Uuid,
}
