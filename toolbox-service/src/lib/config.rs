use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_http_port")]
    pub http_port: u16,
}

impl ServerConfig {
    fn default_http_port() -> u16 {
        8000
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: Self::default_http_port(),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "JwtConfig::default_expiration_minutes")]
    pub expiration_minutes: i64,
}

impl JwtConfig {
    /// HS256 wants a key at least as long as its digest.
    pub const MIN_SECRET_BYTES: usize = 32;

    /// One year.
    pub const MAX_EXPIRATION_MINUTES: i64 = 60 * 24 * 365;

    fn default_expiration_minutes() -> i64 {
        30
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.expiration_minutes)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.len() < Self::MIN_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes",
                Self::MIN_SECRET_BYTES
            )));
        }
        if !(1..=Self::MAX_EXPIRATION_MINUTES).contains(&self.expiration_minutes) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be between 1 and {}",
                Self::MAX_EXPIRATION_MINUTES
            )));
        }
        Ok(())
    }
}

// Keeps the secret out of startup logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.jwt.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt(secret: &str, expiration_minutes: i64) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            expiration_minutes,
        }
    }

    #[test]
    fn test_short_secret_rejected() {
        assert!(jwt("too-short", 30).validate().is_err());
    }

    #[test]
    fn test_non_positive_expiration_rejected() {
        assert!(jwt("a-secret-that-is-at-least-32-bytes-long", 0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_oversized_expiration_rejected() {
        let secret = "a-secret-that-is-at-least-32-bytes-long";

        assert!(jwt(secret, JwtConfig::MAX_EXPIRATION_MINUTES).validate().is_ok());
        assert!(jwt(secret, JwtConfig::MAX_EXPIRATION_MINUTES + 1)
            .validate()
            .is_err());
        assert!(jwt(secret, i64::MAX).validate().is_err());
    }

    #[test]
    fn test_valid_jwt_config() {
        let config = jwt("a-secret-that-is-at-least-32-bytes-long", 30);
        assert!(config.validate().is_ok());
        assert_eq!(config.token_ttl(), chrono::Duration::minutes(30));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = jwt("a-secret-that-is-at-least-32-bytes-long", 30);
        assert!(!format!("{:?}", config).contains("a-secret"));
    }
}
