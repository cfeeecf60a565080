use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::ConfigError;
use crate::paths;
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Environment variable holding the API key unless the config file names another.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Set to `true` to report tracing as enabled.
pub const TRACING_FLAG_ENV: &str = "LANGSMITH_TRACING";
/// Tracing service credential; required alongside the flag.
pub const TRACING_API_KEY_ENV: &str = "LANGSMITH_API_KEY";

/// Settings in the `[tradu]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraduConfig {
    /// Chat model name.
    pub model: Option<String>,
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tradu/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub tradu: TraduConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingConfig {
    pub enabled: bool,
}

impl TracingConfig {
    fn from_env(env: &impl Fn(&str) -> Option<String>) -> Self {
        let has_key = env(TRACING_API_KEY_ENV).is_some_and(|key| !key.is_empty());
        let flag_on = env(TRACING_FLAG_ENV).is_some_and(|flag| flag == "true");
        Self {
            enabled: has_key && flag_on,
        }
    }
}

/// Everything the program reads from its environment, resolved once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub tracing: TracingConfig,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("tracing", &self.tracing)
            .finish()
    }
}

impl AppConfig {
    /// Loads `.env`, the optional config file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is the normal case; variables already set win over the file.
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let manager = ConfigManager::new()?;
        let config_file = manager.load()?;

        Self::resolve(&config_file, |name| std::env::var(name).ok())
    }

    /// Merges config file settings with values looked up through `env`.
    pub fn resolve(
        config_file: &ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let key_var = config_file
            .tradu
            .api_key_env
            .clone()
            .unwrap_or_else(|| API_KEY_ENV.to_string());

        let api_key = env(key_var.as_str())
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey { var: key_var })?;

        let endpoint = config_file
            .tradu
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let model = config_file
            .tradu
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            endpoint,
            model,
            tracing: TracingConfig::from_env(&env),
        })
    }
}

/// Locates and reads the optional config file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/tradu/config.toml`
    /// or `~/.config/tradu/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self, ConfigError> {
        let dir = paths::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(dir.join("config.toml")))
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Reads the config file, or returns defaults when it does not exist.
    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config file at {}", self.config_path.display());
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(ConfigError::ReadConfigFile {
                    path: self.config_path.clone(),
                    source,
                });
            }
        };

        debug!("Loaded config file {}", self.config_path.display());

        toml::from_str(&contents).map_err(|source| ConfigError::ParseConfigFile {
            path: self.config_path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_load_nonexistent_config_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = manager.load().unwrap();
        assert!(config.tradu.model.is_none());
        assert!(config.tradu.endpoint.is_none());
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(
            manager.config_path(),
            "[tradu]\nmodel = \"gpt-4o\"\nendpoint = \"http://localhost:8080\"\n",
        )
        .unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.tradu.model, Some("gpt-4o".to_string()));
        assert_eq!(
            config.tradu.endpoint,
            Some("http://localhost:8080".to_string())
        );
    }

    #[test]
    fn test_load_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[tradu\nmodel = ").unwrap();

        let result = manager.load();
        assert!(matches!(result, Err(ConfigError::ParseConfigFile { .. })));
    }

    #[test]
    fn test_resolve_defaults() {
        let env = env_from(&[(API_KEY_ENV, "sk-test")]);
        let config = AppConfig::resolve(&ConfigFile::default(), env).unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.endpoint, "https://api.openai.com");
        assert!(!config.tracing.enabled);
    }

    #[test]
    fn test_resolve_missing_api_key() {
        let env = env_from(&[]);
        let result = AppConfig::resolve(&ConfigFile::default(), env);

        let Err(err) = result else {
            panic!("expected a configuration error");
        };
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_resolve_blank_api_key_is_missing() {
        let env = env_from(&[(API_KEY_ENV, "   ")]);
        let result = AppConfig::resolve(&ConfigFile::default(), env);
        assert!(matches!(result, Err(ConfigError::MissingApiKey { .. })));
    }

    #[test]
    fn test_resolve_file_overrides_defaults() {
        let config_file = ConfigFile {
            tradu: TraduConfig {
                model: Some("llama3.2".to_string()),
                endpoint: Some("http://localhost:11434".to_string()),
                api_key_env: Some("LOCAL_LLM_KEY".to_string()),
            },
        };
        let env = env_from(&[("LOCAL_LLM_KEY", "local"), (API_KEY_ENV, "ignored")]);

        let config = AppConfig::resolve(&config_file, env).unwrap();
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.api_key, "local");
    }

    #[test]
    fn test_resolve_custom_key_var_missing() {
        let config_file = ConfigFile {
            tradu: TraduConfig {
                api_key_env: Some("LOCAL_LLM_KEY".to_string()),
                ..TraduConfig::default()
            },
        };
        let env = env_from(&[(API_KEY_ENV, "sk-test")]);

        let Err(err) = AppConfig::resolve(&config_file, env) else {
            panic!("expected a configuration error");
        };
        assert!(err.to_string().contains("LOCAL_LLM_KEY"));
    }

    #[test]
    fn test_tracing_enabled_requires_flag_and_key() {
        let env = env_from(&[
            (API_KEY_ENV, "sk-test"),
            (TRACING_FLAG_ENV, "true"),
            (TRACING_API_KEY_ENV, "ls-key"),
        ]);
        let config = AppConfig::resolve(&ConfigFile::default(), env).unwrap();
        assert!(config.tracing.enabled);
    }

    #[test]
    fn test_tracing_disabled_without_key() {
        let env = env_from(&[(API_KEY_ENV, "sk-test"), (TRACING_FLAG_ENV, "true")]);
        let config = AppConfig::resolve(&ConfigFile::default(), env).unwrap();
        assert!(!config.tracing.enabled);
    }

    #[test]
    fn test_tracing_flag_must_be_exactly_true() {
        let env = env_from(&[
            (API_KEY_ENV, "sk-test"),
            (TRACING_FLAG_ENV, "1"),
            (TRACING_API_KEY_ENV, "ls-key"),
        ]);
        let config = AppConfig::resolve(&ConfigFile::default(), env).unwrap();
        assert!(!config.tracing.enabled);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let env = env_from(&[(API_KEY_ENV, "sk-secret")]);
        let config = AppConfig::resolve(&ConfigFile::default(), env).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("redacted"));
    }
}
