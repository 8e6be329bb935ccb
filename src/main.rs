use dotenv::dotenv;
use medicamp_backend::app::app::App;
use medicamp_backend::config::LogConfig;
use medicamp_backend::util::logger::Logger;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Load .env before the logger so LOG_DIR and RUST_LOG apply.
    let dotenv_result = dotenv();

    let _logger = match Logger::new(&LogConfig::from_env()) {
        Ok(logger) => Some(logger),
        Err(e) => {
            Logger::console_only();
            warn!("File logging disabled: {}", e);
            None
        }
    };

    info!("🚀 Starting MediCamp Backend");
    match dotenv_result {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let app = match App::new().await {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.start().await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
