use axum::{Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use crate::config::{AdminUserConfig, AppConfig, ConfigError, JwtConfig, MongoConfig};
use crate::handler::root_handler;
use crate::middlewares::auth_middleware::AuthState;
use crate::repository::camp_repo::MongoCampRepository;
use crate::repository::mongo_store::MongoStore;
use crate::repository::review_repo::MongoReviewRepository;
use crate::repository::user_repo::UserRepositoryImpl;
use crate::router::camp_router::camp_router;
use crate::router::review_router::review_router;
use crate::router::token_router::token_router;
use crate::router::user_router::user_router;
use crate::service::camp_service::CampServiceImpl;
use crate::service::review_service::ReviewServiceImpl;
use crate::service::user_service::UserServiceImpl;
use crate::util::jwt::JwtTokenUtilsImpl;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Store(#[from] mongodb::error::Error),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the HTTP layer needs; built from Mongo-backed repositories in
/// production and from in-memory ones in tests.
#[derive(Clone)]
pub struct AppServices {
    pub camp_service: Arc<CampServiceImpl>,
    pub user_service: Arc<UserServiceImpl>,
    pub review_service: Arc<ReviewServiceImpl>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

pub fn build_router(services: &AppServices) -> Router {
    let auth_state = Arc::new(AuthState {
        jwt_utils: services.jwt_utils.clone(),
        user_service: services.user_service.clone(),
    });

    Router::new()
        .route("/", get(root_handler))
        .merge(camp_router(services.camp_service.clone(), auth_state.clone()))
        .merge(user_router(services.user_service.clone(), auth_state))
        .merge(review_router(services.review_service.clone()))
        .merge(token_router(services.jwt_utils.clone()))
        .layer(cors_layer())
}

/// The web client is served from another origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub struct App {
    config: AppConfig,
    store: MongoStore,
    router: Router,
}

impl App {
    pub async fn new() -> Result<Self, AppError> {
        let config = AppConfig::from_env()?;
        let jwt_config = JwtConfig::from_env()?;
        let mongo_config = MongoConfig::from_env()?;

        let store = MongoStore::connect(&mongo_config).await?;
        store.ping().await?;

        let services = AppServices {
            camp_service: Arc::new(CampServiceImpl::new(Arc::new(MongoCampRepository::new(&store)))),
            user_service: Arc::new(UserServiceImpl::new(Arc::new(UserRepositoryImpl::new(&store)))),
            review_service: Arc::new(ReviewServiceImpl::new(Arc::new(MongoReviewRepository::new(&store)))),
            jwt_utils: Arc::new(JwtTokenUtilsImpl::new(jwt_config)),
        };

        Self::create_first_admin_user(&services.user_service).await;

        let router = build_router(&services);
        Ok(App { config, store, router })
    }

    pub async fn start(self) -> Result<(), AppError> {
        let addr = self.config.bind_address();
        let listener = TcpListener::bind(&addr).await?;
        info!("MediCamp Care is running on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server stopped");
        self.store.shutdown().await;
        Ok(())
    }

    async fn create_first_admin_user(user_service: &UserServiceImpl) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded: {e}");
                return;
            }
        };
        if let Err(e) = user_service.ensure_admin(&admin_conf.email).await {
            error!("Failed to create admin user: {e}");
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
