use axum::{Router, routing::get};
use crate::handler::review_handler::{create_review_handler, list_reviews_handler};
use std::sync::Arc;
use crate::service::review_service::ReviewServiceImpl;

pub fn review_router(service: Arc<ReviewServiceImpl>) -> Router {
    Router::new()
        .route("/reviews", get(list_reviews_handler).post(create_review_handler))
        .with_state(service)
}
