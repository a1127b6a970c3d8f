use serde::{Deserialize, Deserializer};
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Custom deserializer for comma-separated strings
fn deserialize_comma_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(s.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}

/// Application settings with environment variable support.
///
/// `database_url` has no default on purpose: when it is absent the process
/// still starts, with the document store degraded to unavailable.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    // Document store
    pub database_url: Option<String>,
    pub database_name: String,

    // HTTP
    pub port: u16,
    #[serde(deserialize_with = "deserialize_comma_separated")]
    pub cors_allow_origins: Vec<String>,

    // Logging
    pub log_level: String,
    pub log_format: String,
}

impl Settings {
    /// Create new settings instance from environment variables and .env file
    pub fn new() -> Result<Self, ConfigError> {
        Self::new_with_env_file(true)
    }

    /// Create new settings instance with optional .env file loading
    pub fn new_with_env_file(load_env_file: bool) -> Result<Self, ConfigError> {
        // Serialize settings construction to avoid cross-test environment races
        // Tests frequently mutate process env; locking ensures consistent reads
        static SETTINGS_BUILD_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
        let build_mutex = SETTINGS_BUILD_MUTEX.get_or_init(|| Mutex::new(()));
        let _guard = build_mutex
            .lock()
            .expect("Failed to lock settings build mutex");

        // Load .env file if it exists and requested (skip during tests for determinism)
        #[cfg(not(test))]
        {
            if load_env_file {
                dotenvy::dotenv().ok();
            }
        }
        #[cfg(test)]
        let _ = load_env_file;

        let builder = config::Config::builder()
            // Document store defaults
            .set_default("database_url", None::<String>)?
            .set_default("database_name", "casetrack")?
            // HTTP defaults
            .set_default("port", 8000)?
            .set_default("cors_allow_origins", "*")?
            // Logging defaults
            .set_default("log_level", "INFO")?
            .set_default("log_format", "plain")?
            .add_source(config::Environment::default());

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations below cannot race each other.
    #[test]
    fn settings_from_environment() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("DATABASE_NAME");
        std::env::remove_var("PORT");
        std::env::remove_var("CORS_ALLOW_ORIGINS");
        std::env::remove_var("LOG_LEVEL");
        std::env::remove_var("LOG_FORMAT");

        let settings = Settings::new_with_env_file(false).unwrap();
        assert_eq!(settings.database_url, None);
        assert_eq!(settings.database_name, "casetrack");
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.cors_allow_origins, vec!["*".to_string()]);
        assert_eq!(settings.log_level, "INFO");
        assert_eq!(settings.log_format, "plain");

        std::env::set_var("DATABASE_URL", "mongodb://localhost:27017");
        std::env::set_var("DATABASE_NAME", "casetrack_test");
        std::env::set_var("PORT", "9100");
        std::env::set_var("CORS_ALLOW_ORIGINS", "http://a.example, http://b.example,,");

        let settings = Settings::new_with_env_file(false).unwrap();
        assert_eq!(
            settings.database_url.as_deref(),
            Some("mongodb://localhost:27017")
        );
        assert_eq!(settings.database_name, "casetrack_test");
        assert_eq!(settings.port, 9100);
        assert_eq!(
            settings.cors_allow_origins,
            vec!["http://a.example".to_string(), "http://b.example".to_string()]
        );

        std::env::set_var("DATABASE_NAME", "  ");
        let result = Settings::new_with_env_file(false);
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("DATABASE_NAME");
        std::env::remove_var("PORT");
        std::env::remove_var("CORS_ALLOW_ORIGINS");
    }
}
