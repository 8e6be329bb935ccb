use axum::{extract::{Path, State}, Json};
use bson::Document;
use std::sync::Arc;
use tracing::info;

use crate::dto::camp_dto::CampResponse;
use crate::dto::result_dto::{DeleteResponse, InsertOneResponse, UpdateResponse};
use crate::handler::parse_object_id;
use crate::service::camp_service::{CampService, CampServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_camps_handler(
    State(service): State<Arc<CampServiceImpl>>,
) -> Result<Json<Vec<CampResponse>>, HandlerError> {
    let camps = service.list_camps().await?;
    Ok(Json(camps.into_iter().map(CampResponse::from).collect()))
}

/// Unknown ids answer `null`, not 404.
pub async fn get_camp_handler(
    State(service): State<Arc<CampServiceImpl>>,
    Path(id): Path<String>,
) -> Result<Json<Option<CampResponse>>, HandlerError> {
    let id = parse_object_id(&id)?;
    let camp = service.get_camp(id).await?;
    Ok(Json(camp.map(CampResponse::from)))
}

pub async fn create_camp_handler(
    State(service): State<Arc<CampServiceImpl>>,
    Json(payload): Json<Document>,
) -> Result<Json<InsertOneResponse>, HandlerError> {
    let id = service.create_camp(payload).await?;
    info!(camp_id = %id, "Camp created");
    Ok(Json(id.into()))
}

pub async fn update_camp_handler(
    State(service): State<Arc<CampServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<Document>,
) -> Result<Json<UpdateResponse>, HandlerError> {
    let id = parse_object_id(&id)?;
    let outcome = service.update_camp(id, payload).await?;
    Ok(Json(outcome.into()))
}

pub async fn delete_camp_handler(
    State(service): State<Arc<CampServiceImpl>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HandlerError> {
    let id = parse_object_id(&id)?;
    let deleted = service.delete_camp(id).await?;
    Ok(Json(deleted.into()))
}
