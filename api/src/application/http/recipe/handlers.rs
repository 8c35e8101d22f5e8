pub mod detect_ingredients;
pub mod get_index;
pub mod get_recipe_result;
pub mod submit_ingredients;
