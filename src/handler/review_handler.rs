use axum::{extract::State, Json};
use bson::Document;
use std::sync::Arc;

use crate::dto::result_dto::InsertOneResponse;
use crate::dto::review_dto::ReviewResponse;
use crate::service::review_service::{ReviewService, ReviewServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_review_handler(
    State(service): State<Arc<ReviewServiceImpl>>,
    Json(payload): Json<Document>,
) -> Result<Json<InsertOneResponse>, HandlerError> {
    let id = service.create_review(payload).await?;
    Ok(Json(id.into()))
}

pub async fn list_reviews_handler(
    State(service): State<Arc<ReviewServiceImpl>>,
) -> Result<Json<Vec<ReviewResponse>>, HandlerError> {
    let reviews = service.list_reviews().await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}
