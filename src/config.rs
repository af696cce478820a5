//! Configuration management for Digital Odyssey
//!
//! Layers built-in defaults, an optional `config.toml` and `DIGITAL_ODYSSEY_*`
//! environment variables into a single [`AppConfig`].

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = "config";
const ENV_PREFIX: &str = "DIGITAL_ODYSSEY";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// SQLite database file
    /// Environment: DIGITAL_ODYSSEY_DATABASE_PATH
    pub database_path: String,

    /// Default log filter, used when RUST_LOG is not set
    pub log_level: String,

    #[serde(flatten)]
    pub credentials: CredentialPolicy,
}

/// Credential validation and hashing parameters
///
/// Changing `pbkdf2_iterations` invalidates every stored credential record,
/// since login recomputes the key with the current value.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CredentialPolicy {
    pub min_username_length: usize,
    pub min_password_length: usize,
    pub pbkdf2_iterations: u32,
    /// Random bytes drawn before hashing into the 64-char salt
    pub salt_entropy_bytes: usize,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            min_username_length: 3,
            min_password_length: 8,
            pbkdf2_iterations: 100_000,
            salt_entropy_bytes: 60,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: "quiz_game.db".to_string(),
            log_level: "info".to_string(),
            credentials: CredentialPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from ./config.toml (optional) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from the given file stem (optional) with environment overrides
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, Self::environment())
    }

    /// `DIGITAL_ODYSSEY_<KEY>` variables, e.g. DIGITAL_ODYSSEY_PBKDF2_ITERATIONS
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(config_path: &str, environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("database_path", defaults.database_path)?
            .set_default("log_level", defaults.log_level)?
            .set_default(
                "min_username_length",
                defaults.credentials.min_username_length as i64,
            )?
            .set_default(
                "min_password_length",
                defaults.credentials.min_password_length as i64,
            )?
            .set_default(
                "pbkdf2_iterations",
                defaults.credentials.pbkdf2_iterations as i64,
            )?
            .set_default(
                "salt_entropy_bytes",
                defaults.credentials.salt_entropy_bytes as i64,
            )?
            .add_source(File::with_name(config_path).required(false))
            .add_source(environment)
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.trim().is_empty() {
            return Err(ConfigError::Message(
                "database_path cannot be empty".into(),
            ));
        }

        if self.credentials.min_username_length == 0 {
            return Err(ConfigError::Message(
                "min_username_length must be greater than 0".into(),
            ));
        }

        if self.credentials.min_password_length == 0 {
            return Err(ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.credentials.pbkdf2_iterations < 1_000 {
            return Err(ConfigError::Message(
                "pbkdf2_iterations must be at least 1000".into(),
            ));
        }

        if self.credentials.salt_entropy_bytes < 32 {
            return Err(ConfigError::Message(
                "salt_entropy_bytes must be at least 32".into(),
            ));
        }

        Ok(())
    }

    /// Get database path as PathBuf
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // Keeps tests independent of DIGITAL_ODYSSEY_* in the ambient environment
    fn load_isolated(config_path: &str, vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let mut env = config::Map::new();
        for (key, value) in vars {
            env.insert(key.to_string(), value.to_string());
        }
        AppConfig::load_with_env(config_path, AppConfig::environment().source(Some(env)))
    }

    #[test]
    fn test_defaults_match_reference_parameters() {
        let config = AppConfig::default();
        assert_eq!(config.database_path, "quiz_game.db");
        assert_eq!(config.credentials.pbkdf2_iterations, 100_000);
        assert_eq!(config.credentials.min_username_length, 3);
        assert_eq!(config.credentials.min_password_length, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let stem = tmp.path().join("absent");
        let config = load_isolated(stem.to_str().unwrap(), &[]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("quiz.toml");
        fs::write(&path, "pbkdf2_iterations = 5000\n").unwrap();

        let config = load_isolated(
            path.to_str().unwrap(),
            &[
                ("DIGITAL_ODYSSEY_PBKDF2_ITERATIONS", "2000"),
                ("DIGITAL_ODYSSEY_DATABASE_PATH", "env.db"),
            ],
        )
        .unwrap();
        assert_eq!(config.credentials.pbkdf2_iterations, 2000);
        assert_eq!(config.database_path, "env.db");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("quiz.toml");
        fs::write(
            &path,
            "database_path = \"other.db\"\npbkdf2_iterations = 5000\n",
        )
        .unwrap();

        let config = load_isolated(path.to_str().unwrap(), &[]).unwrap();
        assert_eq!(config.database_path, "other.db");
        assert_eq!(config.credentials.pbkdf2_iterations, 5000);
        assert_eq!(config.credentials.min_password_length, 8);
    }

    #[test]
    fn test_validation_rejects_weak_iterations() {
        let mut config = AppConfig::default();
        config.credentials.pbkdf2_iterations = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_database_path() {
        let mut config = AppConfig::default();
        config.database_path = "  ".into();
        assert!(config.validate().is_err());
    }
}
