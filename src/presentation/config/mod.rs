mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ClassificationSettings, LlmSettings, LoggingSettings, ServerSettings, Settings,
    UploadSettings,
};
