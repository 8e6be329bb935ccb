use axum::{Router, routing::{get, delete}, middleware};
use crate::handler::camp_handler::{
    list_camps_handler,
    get_camp_handler,
    create_camp_handler,
    update_camp_handler,
    delete_camp_handler,
};
use std::sync::Arc;
use crate::service::camp_service::CampServiceImpl;
use crate::middlewares::auth_middleware::{require_admin, require_identity, AuthState};

pub fn camp_router(service: Arc<CampServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new()
        .route("/popularcamp", get(list_camps_handler).post(create_camp_handler))
        .route("/popularcamp/{id}", get(get_camp_handler).patch(update_camp_handler));

    // Layers run bottom-up: identity first, then the role lookup.
    let admin = Router::new()
        .route("/popularcamp/{id}", delete(delete_camp_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, require_identity));

    public
        .merge(admin)
        .with_state(service)
}
