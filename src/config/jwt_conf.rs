use std::env;
use tracing::{debug, error, info};

use crate::config::ConfigError;

/// Lifetime of every issued credential.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// JWT configuration structure
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing and verifying tokens
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    ///
    /// Expected environment variables:
    /// - ACCESS_TOKEN_SECRET: Secret key for signing JWT tokens (required, at least 32 chars)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading JWT configuration from environment variables");

        let jwt_secret = env::var("ACCESS_TOKEN_SECRET")
            .map_err(|_| {
                error!("ACCESS_TOKEN_SECRET environment variable not found");
                ConfigError::EnvVarNotFound("ACCESS_TOKEN_SECRET".to_string())
            })?;
        debug!("JWT secret loaded (length: {} chars)", jwt_secret.len());

        let config = JwtConfig::new(jwt_secret);
        config.validate()?;

        info!("JWT configuration loaded successfully");
        Ok(config)
    }

    pub fn new(jwt_secret: impl Into<String>) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.into(),
            token_ttl_secs: TOKEN_TTL_SECS,
        }
    }

    /// Validate the JWT configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            error!("JWT secret cannot be empty");
            return Err(ConfigError::ValidationError("ACCESS_TOKEN_SECRET cannot be empty".to_string()));
        }

        if self.jwt_secret.len() < 32 {
            error!("JWT secret is too short (minimum 32 characters required)");
            return Err(ConfigError::ValidationError("ACCESS_TOKEN_SECRET must be at least 32 characters long".to_string()));
        }

        if self.token_ttl_secs <= 0 {
            return Err(ConfigError::ValidationError("Token lifetime must be greater than 0".to_string()));
        }

        Ok(())
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        JwtConfig::new("test_secret_key_for_jwt_testing_should_be_long_enough_for_security_purposes")
    }
}
