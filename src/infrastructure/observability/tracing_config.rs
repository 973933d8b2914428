use crate::presentation::config::{ENVIRONMENT_VAR, Environment, LoggingSettings};

pub const DEFAULT_FILTER: &str = "info,docroute=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub fn new(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment,
            json_format: logging.json,
            default_filter: logging
                .level
                .clone()
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var(ENVIRONMENT_VAR)
                .ok()
                .and_then(|v| Environment::try_from(v).ok())
                .unwrap_or(Environment::Local),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}
