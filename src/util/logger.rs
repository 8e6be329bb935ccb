use std::path::Path;

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LogConfig;

/// Owns the background writer threads of the file layers; keep it alive for
/// the lifetime of the process or buffered lines are lost.
pub struct Logger {
    pub guards: Vec<WorkerGuard>,
}

impl Logger {
    /// Console plus daily-rolling plain/JSON files for all logs and for errors.
    pub fn new(config: &LogConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let log_dir = Path::new(&config.log_dir);
        let error_dir = log_dir.join("error");
        std::fs::create_dir_all(&error_dir)?;

        let console_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,medicamp_backend=debug"));

        let (general, general_guard) = non_blocking(rolling::daily(log_dir, "medicamp-backend.log"));
        let (errors, error_guard) = non_blocking(rolling::daily(&error_dir, "medicamp-backend-error.log"));
        let (general_json, general_json_guard) = non_blocking(rolling::daily(log_dir, "medicamp-backend.json"));
        let (errors_json, errors_json_guard) = non_blocking(rolling::daily(&error_dir, "medicamp-backend-error.json"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_ansi(true)
                    .with_filter(console_filter),
            )
            .with(
                fmt::layer()
                    .with_writer(general)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&config.file_log_level)),
            )
            .with(
                fmt::layer()
                    .with_writer(errors)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&config.error_file_log_level)),
            )
            .with(
                fmt::layer()
                    .json()
                    .with_writer(general_json)
                    .with_target(true)
                    .with_filter(EnvFilter::new(&config.file_log_level)),
            )
            .with(
                fmt::layer()
                    .json()
                    .with_writer(errors_json)
                    .with_target(true)
                    .with_filter(EnvFilter::new(&config.error_file_log_level)),
            )
            .try_init()?;

        Ok(Logger {
            guards: vec![general_guard, error_guard, general_json_guard, errors_json_guard],
        })
    }

    /// Console-only subscriber, used when the log directory is unusable.
    pub fn console_only() {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,medicamp_backend=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_level(true)
            .try_init();
    }
}
