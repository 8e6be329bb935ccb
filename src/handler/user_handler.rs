use axum::{extract::{Path, State}, response::{IntoResponse, Response}, Extension, Json};
use bson::Document;
use std::sync::Arc;
use tracing::warn;

use crate::dto::result_dto::{DeleteResponse, InsertOneResponse, UpdateResponse};
use crate::dto::user_dto::{AdminStatusResponse, UserExistsResponse, UserResponse};
use crate::handler::parse_object_id;
use crate::model::user::User;
use crate::service::user_service::{CreateUserOutcome, UserService, UserServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn list_users_handler(
    State(service): State<Arc<UserServiceImpl>>,
) -> Result<Json<Vec<UserResponse>>, HandlerError> {
    let users = service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Callers may only ask about themselves.
pub async fn admin_status_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(email): Path<String>,
) -> Result<Json<AdminStatusResponse>, HandlerError> {
    if claims.email.as_deref() != Some(email.as_str()) {
        warn!(requested = %email, "Admin status requested for another identity");
        return Err(HandlerError::forbidden("unauthorized access"));
    }
    let admin = service.is_admin(&email).await?;
    Ok(Json(AdminStatusResponse { admin }))
}

pub async fn create_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<Document>,
) -> Result<Response, HandlerError> {
    let response = match service.create_user(User::from_fields(payload)).await? {
        CreateUserOutcome::Created(id) => Json(InsertOneResponse::from(id)).into_response(),
        CreateUserOutcome::AlreadyExists => Json(UserExistsResponse::default()).into_response(),
    };
    Ok(response)
}

pub async fn delete_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HandlerError> {
    let id = parse_object_id(&id)?;
    let deleted = service.delete_user(id).await?;
    Ok(Json(deleted.into()))
}

pub async fn promote_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
) -> Result<Json<UpdateResponse>, HandlerError> {
    let id = parse_object_id(&id)?;
    let outcome = service.promote_to_admin(id).await?;
    Ok(Json(outcome.into()))
}
