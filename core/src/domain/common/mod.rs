use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CookwiseConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub image_recognition: ImageRecognitionConfig,
    pub uploads: UploadConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct ImageRecognitionConfig {
    pub logmeal_api_key: String,
    pub logmeal_base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub directory: PathBuf,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let nanos = now.timestamp_subsec_nanos();
    let timestamp = Timestamp::from_unix(NoContext, seconds, nanos);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
