use std::env;
use tracing::{debug, warn};

use crate::config::ConfigError;

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads `APP_HOST` (default `0.0.0.0`) and `PORT` (default `5000`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| {
            debug!("APP_HOST not set, using default: 0.0.0.0");
            "0.0.0.0".to_string()
        });

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue(format!("Invalid PORT value: {}", raw)))?,
            Err(_) => {
                warn!("PORT not set, using default: 5000");
                5000
            }
        };

        Ok(AppConfig { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}
