use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::auth::MAX_TOKEN_TTL_HOURS;

/// Application configuration
///
/// Sources, later ones winning: `config/default`, `config/local`, then
/// `APP__`-prefixed environment variables (`APP__AUTH__JWT_SECRET`,
/// `APP__SERVER__PORT`, ...).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file; must already exist
    pub path: PathBuf,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Token signing secret; required, empty means unset
    pub jwt_secret: String,
    pub token_ttl_hours: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("covid19IndiaPortal.db"),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_hours: 24,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[hidden]")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject configurations the server cannot start with
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(DomainError::configuration(
                "auth.jwt_secret must be set (APP__AUTH__JWT_SECRET)",
            ));
        }

        if self.auth.token_ttl_hours == 0 {
            return Err(DomainError::configuration(
                "auth.token_ttl_hours must be greater than zero",
            ));
        }

        if self.auth.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(DomainError::configuration(format!(
                "auth.token_ttl_hours must not exceed {}",
                MAX_TOKEN_TTL_HOURS
            )));
        }

        Ok(())
    }
}
