//! Startup configuration: environment variables, `.env` and the optional config file.

mod error;
mod manager;

pub use error::ConfigError;
pub use manager::{
    API_KEY_ENV, AppConfig, ConfigFile, ConfigManager, TRACING_API_KEY_ENV, TRACING_FLAG_ENV,
    TraduConfig, TracingConfig,
};
