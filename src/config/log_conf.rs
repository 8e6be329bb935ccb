use std::env;

/// Where and how verbosely the rolling log files are written.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_dir: String,
    pub file_log_level: String,
    pub error_file_log_level: String,
}

impl LogConfig {
    pub fn from_env() -> Self {
        LogConfig {
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            file_log_level: env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
            error_file_log_level: env::var("ERROR_FILE_LOG_LEVEL").unwrap_or_else(|_| "error".to_string()),
        }
    }
}
