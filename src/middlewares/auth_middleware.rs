//! The authorization gate.
//!
//! Two independent checks, each an axum middleware:
//!
//! * [`require_identity`] verifies the bearer token and stores its [`Claims`]
//!   in the request extensions (401 when missing or invalid).
//! * [`require_admin`] reads those claims and looks the `email` up in the user
//!   store on every request, admitting only users whose stored role is admin
//!   (403 otherwise).
//!
//! The role is never taken from the token, so a promotion or demotion applies
//! to the very next request at the cost of one store lookup.

use axum::{body::Body, extract::State, http::{header::AUTHORIZATION, Request}, middleware::Next, response::Response};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::{Claims, JwtTokenUtils, JwtTokenUtilsImpl};

pub struct AuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
    pub user_service: Arc<UserServiceImpl>,
}

pub async fn require_identity(
    State(state): State<Arc<AuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, HandlerError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            debug!(path = %req.uri().path(), "Request without credentials");
            HandlerError::unauthorized()
        })?;

    let token = state
        .jwt_utils
        .extract_token_from_header(auth_header)
        .map_err(|_| HandlerError::unauthorized())?;
    let claims = state.jwt_utils.validate_token(&token).map_err(|e| {
        warn!(path = %req.uri().path(), "Rejected credential: {}", e);
        HandlerError::unauthorized()
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Must be layered inside [`require_identity`].
pub async fn require_admin(
    State(state): State<Arc<AuthState>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, HandlerError> {
    let email = req
        .extensions()
        .get::<Claims>()
        .and_then(|claims| claims.email.clone())
        .ok_or_else(|| HandlerError::forbidden("forbidden access"))?;

    if !state.user_service.is_admin(&email).await? {
        warn!(email = %email, path = %req.uri().path(), "Admin route refused");
        return Err(HandlerError::forbidden("forbidden access"));
    }

    Ok(next.run(req).await)
}
