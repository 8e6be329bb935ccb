use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// MongoDB configuration structure
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// MongoDB connection URI
    pub uri: String,
    /// Database name
    pub database: String,
    /// Username for authentication (optional)
    pub username: Option<String>,
    /// Password for authentication (optional)
    pub password: Option<String>,
    pub users_collection: String,
    pub camps_collection: String,
    pub reviews_collection: String,
    /// Connection pool size
    pub pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl MongoConfig {
    /// Load MongoDB configuration from environment variables
    ///
    /// Expected environment variables:
    /// - MONGO_URI: full connection URI (optional, takes precedence over DB_HOST)
    /// - DB_HOST: Atlas cluster host, used to build a `mongodb+srv` URI when MONGO_URI is unset
    /// - DB_USER / DB_PASS: credentials (optional)
    /// - MONGO_DATABASE: Database name (defaults to mediCampDB)
    /// - MONGO_POOL_SIZE: Connection pool size (defaults to 10)
    /// - MONGO_CONNECTION_TIMEOUT: Connection timeout in seconds (defaults to 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading MongoDB configuration from environment variables");

        let uri = match env::var("MONGO_URI") {
            Ok(uri) => uri,
            Err(_) => {
                let host = env::var("DB_HOST").map_err(|_| {
                    error!("Neither MONGO_URI nor DB_HOST is set");
                    ConfigError::EnvVarNotFound("DB_HOST".to_string())
                })?;
                Self::srv_uri(&host)
            }
        };
        debug!("MongoDB URI: {}", Self::redacted_uri(&uri));

        let database = env::var("MONGO_DATABASE").unwrap_or_else(|_| {
            debug!("MONGO_DATABASE not set, using default: mediCampDB");
            "mediCampDB".to_string()
        });

        let username = env::var("DB_USER").ok();
        if let Some(ref user) = username {
            debug!("MongoDB username: {}", user);
        } else {
            debug!("No MongoDB username specified");
        }

        let password = env::var("DB_PASS").ok();
        if password.is_some() {
            debug!("MongoDB password provided");
        }

        let pool_size = env::var("MONGO_POOL_SIZE")
            .unwrap_or_else(|_| {
                warn!("MONGO_POOL_SIZE not set, using default: 10");
                "10".to_string()
            })
            .parse::<u32>()
            .map_err(|_| {
                error!("Invalid MONGO_POOL_SIZE value");
                ConfigError::InvalidValue("Invalid MONGO_POOL_SIZE value".to_string())
            })?;

        let connection_timeout_secs = env::var("MONGO_CONNECTION_TIMEOUT")
            .unwrap_or_else(|_| {
                warn!("MONGO_CONNECTION_TIMEOUT not set, using default: 5 seconds");
                "5".to_string()
            })
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid MONGO_CONNECTION_TIMEOUT value");
                ConfigError::InvalidValue("Invalid MONGO_CONNECTION_TIMEOUT value".to_string())
            })?;

        let config = MongoConfig {
            uri,
            database,
            username,
            password,
            pool_size,
            connection_timeout_secs,
            ..MongoConfig::default()
        };

        config.validate()?;
        info!("MongoDB configuration loaded successfully");
        Ok(config)
    }

    /// Atlas-style SRV URI; credentials are attached through the driver options instead.
    pub fn srv_uri(host: &str) -> String {
        format!("mongodb+srv://{}/?retryWrites=true&w=majority", host.trim())
    }

    /// `uri` with any `user:password@` part masked, for logging.
    pub fn redacted_uri(uri: &str) -> String {
        let Some((scheme, rest)) = uri.split_once("://") else {
            return uri.to_string();
        };
        let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
        match rest[..authority_end].rfind('@') {
            Some(at) => format!("{}://***@{}", scheme, &rest[at + 1..]),
            None => uri.to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uri.is_empty() {
            error!("MongoDB URI is empty");
            return Err(ConfigError::ValidationError("MongoDB URI cannot be empty".to_string()));
        }

        if self.database.is_empty() {
            error!("MongoDB database is empty");
            return Err(ConfigError::ValidationError("MongoDB database cannot be empty".to_string()));
        }

        if self.pool_size == 0 {
            error!("MongoDB pool size is 0");
            return Err(ConfigError::ValidationError("MongoDB pool size must be greater than 0".to_string()));
        }

        if self.connection_timeout_secs == 0 {
            error!("MongoDB connection timeout is 0");
            return Err(ConfigError::ValidationError("MongoDB connection timeout must be greater than 0".to_string()));
        }

        match (&self.username, &self.password) {
            (Some(user), _) if user.is_empty() => {
                return Err(ConfigError::ValidationError("DB_USER cannot be empty if set".to_string()));
            }
            (Some(_), None) => {
                return Err(ConfigError::ValidationError("DB_PASS must be set when DB_USER is set".to_string()));
            }
            _ => {}
        }
        Ok(())
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "mediCampDB".to_string(),
            username: None,
            password: None,
            users_collection: "users".to_string(),
            camps_collection: "popularCamp".to_string(),
            reviews_collection: "reviews".to_string(),
            pool_size: 10,
            connection_timeout_secs: 5,
        }
    }
}
