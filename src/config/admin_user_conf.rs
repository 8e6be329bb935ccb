use std::env;
use crate::config::ConfigError;

/// Identity of the admin account seeded at startup.
#[derive(Debug, Clone)]
pub struct AdminUserConfig {
    pub email: String,
}

impl AdminUserConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let email = env::var("ADMIN_EMAIL").map_err(|_| ConfigError::EnvVarNotFound("ADMIN_EMAIL".to_string()))?;
        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(ConfigError::ValidationError("ADMIN_EMAIL cannot be empty".to_string()));
        }
        Ok(AdminUserConfig { email })
    }
}
