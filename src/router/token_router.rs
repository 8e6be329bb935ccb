use axum::{Router, routing::post};
use crate::handler::token_handler::issue_token_handler;
use std::sync::Arc;
use crate::util::jwt::JwtTokenUtilsImpl;

pub fn token_router(jwt_utils: Arc<JwtTokenUtilsImpl>) -> Router {
    Router::new()
        .route("/jwt", post(issue_token_handler))
        .with_state(jwt_utils)
}
