use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::application::services::{ClassificationPolicy, RoutingAdvisor};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub classification: ClassificationSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationSettings {
    pub max_text_chars: usize,
    pub max_concurrent_requests: usize,
    pub high_confidence_threshold: f64,
    pub medium_confidence_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_bytes: u64,
    pub allowed_content_types: Vec<String>,
    pub staging_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
    #[serde(default)]
    pub level: Option<String>,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<environment>.*` and `APP_` prefixed
    /// environment variables (`APP_LLM__MODEL`, `APP_UPLOAD__ALLOWED_CONTENT_TYPES=a,b`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("llm.base_url", "https://api.openai.com/v1")?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "gpt-4o-mini")?
            .set_default("llm.max_tokens", 1000)?
            .set_default("llm.temperature", 0.1)?
            .set_default("llm.request_timeout_secs", 60)?
            .set_default("classification.max_text_chars", 50_000)?
            .set_default("classification.max_concurrent_requests", 10)?
            .set_default("classification.high_confidence_threshold", 0.8)?
            .set_default("classification.medium_confidence_threshold", 0.6)?
            .set_default("upload.max_file_size_bytes", 10 * 1024 * 1024)?
            .set_default(
                "upload.allowed_content_types",
                vec!["application/pdf", "text/plain"],
            )?
            .set_default("upload.staging_dir", "uploads")?
            .set_default("logging.json", false)?
            .add_source(
                File::with_name(&format!(
                    "appsettings.{}",
                    environment.as_str().to_lowercase()
                ))
                .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("upload.allowed_content_types")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.classification;
        if !(0.0..=1.0).contains(&c.medium_confidence_threshold)
            || !(0.0..=1.0).contains(&c.high_confidence_threshold)
            || c.medium_confidence_threshold > c.high_confidence_threshold
        {
            return Err(ConfigError::Message(
                "confidence thresholds must satisfy 0 <= medium <= high <= 1".to_string(),
            ));
        }
        if c.max_text_chars == 0 || c.max_concurrent_requests == 0 {
            return Err(ConfigError::Message(
                "max_text_chars and max_concurrent_requests must be positive".to_string(),
            ));
        }
        if self.upload.allowed_content_types.is_empty() {
            return Err(ConfigError::Message(
                "upload.allowed_content_types must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn classification_policy(&self) -> ClassificationPolicy {
        ClassificationPolicy {
            max_file_size_bytes: self.upload.max_file_size_bytes,
            allowed_content_types: self.upload.allowed_content_types.clone(),
            max_text_chars: self.classification.max_text_chars,
        }
    }

    pub fn routing_advisor(&self) -> RoutingAdvisor {
        RoutingAdvisor::new(
            self.classification.high_confidence_threshold,
            self.classification.medium_confidence_threshold,
        )
    }
}
