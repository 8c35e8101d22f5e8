pub mod db;
pub mod health;
pub mod history;
pub mod image_recognition;
pub mod llm;
pub mod uploads;
