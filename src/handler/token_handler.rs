use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::error;

use crate::util::error::HandlerError;
use crate::util::jwt::{JwtError, JwtTokenUtils, JwtTokenUtilsImpl};

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Signs whatever object the client posts; expected to carry `email`.
pub async fn issue_token_handler(
    State(jwt_utils): State<Arc<JwtTokenUtilsImpl>>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<TokenResponse>, HandlerError> {
    let token = jwt_utils.issue_token(payload).map_err(|e| match e {
        JwtError::ReservedClaim(_) | JwtError::InvalidClaim(_) => HandlerError::bad_request(e.to_string()),
        other => {
            error!("Token issuing failed: {}", other);
            HandlerError::internal()
        }
    })?;
    Ok(Json(TokenResponse { token }))
}
