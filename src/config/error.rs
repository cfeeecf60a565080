use std::path::PathBuf;
use thiserror::Error;

/// Startup configuration problems. Any of these stops the program before the first prompt.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "API key not found. Set the {var} environment variable:\n  \
         export {var}=\"your-api-key\"\n\n\
         Or add it to a .env file in the current directory."
    )]
    MissingApiKey { var: String },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ReadConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ParseConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine the configuration directory (set HOME or XDG_CONFIG_HOME)")]
    NoConfigDir,
}
