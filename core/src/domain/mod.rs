pub mod common;
pub mod health;
pub mod history;
pub mod recipe;
