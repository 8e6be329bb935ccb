use axum::{Router, routing::{get, delete, patch}, middleware};
use crate::handler::user_handler::{
    list_users_handler,
    admin_status_handler,
    create_user_handler,
    delete_user_handler,
    promote_user_handler,
};
use std::sync::Arc;
use crate::service::user_service::UserServiceImpl;
use crate::middlewares::auth_middleware::{require_admin, require_identity, AuthState};

pub fn user_router(service: Arc<UserServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // `{key}` is the caller's email on GET and a user id on PATCH.
    let identity = Router::new()
        .route("/users/admin/{key}", get(admin_status_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), require_identity));

    let admin = Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/{id}", delete(delete_user_handler))
        .route("/users/admin/{key}", patch(promote_user_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, require_identity));

    identity
        .merge(admin)
        .with_state(service)
}
