use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use cookwise_core::domain::common::{
    CookwiseConfig, DatabaseConfig, ImageRecognitionConfig, LLMConfig, UploadConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "cookwise", version, about = "Recipe suggestions from the ingredients you have")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub image_recognition: ImageRecognitionArgs,

    #[command(flatten)]
    pub upload: UploadArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(
        long = "database-url",
        env = "DATABASE_URL",
        default_value = "sqlite://history.db?mode=rwc"
    )]
    pub url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_base_url: String,

    #[arg(id = "gemini_timeout_secs", long = "gemini-timeout-secs", env = "GEMINI_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ImageRecognitionArgs {
    #[arg(long = "logmeal-api-key", env = "LOGMEAL_API_KEY", default_value = "")]
    pub logmeal_api_key: String,

    #[arg(
        long = "logmeal-base-url",
        env = "LOGMEAL_BASE_URL",
        default_value = "https://api.logmeal.com/v2"
    )]
    pub logmeal_base_url: String,

    #[arg(id = "logmeal_timeout_secs", long = "logmeal-timeout-secs", env = "LOGMEAL_TIMEOUT_SECS", default_value_t = 20)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct UploadArgs {
    #[arg(long = "upload-dir", env = "UPLOAD_DIR", default_value = "uploads")]
    pub directory: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for CookwiseConfig {
    fn from(args: Args) -> Self {
        CookwiseConfig {
            database: DatabaseConfig { url: args.db.url },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                timeout: Duration::from_secs(args.llm.timeout_secs),
            },
            image_recognition: ImageRecognitionConfig {
                logmeal_api_key: args.image_recognition.logmeal_api_key,
                logmeal_base_url: args.image_recognition.logmeal_base_url,
                timeout: Duration::from_secs(args.image_recognition.timeout_secs),
            },
            uploads: UploadConfig {
                directory: args.upload.directory,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from([
            "cookwise",
            "--database-url",
            "sqlite::memory:",
            "--gemini-api-key",
            "gemini-key",
            "--logmeal-timeout-secs",
            "5",
            "--upload-dir",
            "/tmp/cookwise",
            "--metrics-enabled",
            "false",
        ]);
        assert!(!args.server.metrics_enabled);

        let config = CookwiseConfig::from(args);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.llm.gemini_api_key, "gemini-key");
        assert_eq!(config.image_recognition.timeout, Duration::from_secs(5));
        assert_eq!(config.uploads.directory, PathBuf::from("/tmp/cookwise"));
    }
}
