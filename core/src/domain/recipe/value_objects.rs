use crate::domain::recipe::entities::UploadedImage;

#[derive(Debug, Clone)]
pub struct CollectIngredientsInput {
    pub ingredients: String,
    pub language: Option<String>,
    pub image: Option<UploadedImage>,
}

#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    pub ingredients: String,
    pub language: Option<String>,
}
