use std::sync::Arc;

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use tracing::instrument;

use crate::model::review::Review;
use crate::repository::review_repo::ReviewRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn create_review(&self, fields: Document) -> Result<ObjectId, ServiceError>;
    async fn list_reviews(&self) -> Result<Vec<Review>, ServiceError>;
}

pub struct ReviewServiceImpl {
    pub review_repo: Arc<dyn ReviewRepository>,
}

impl ReviewServiceImpl {
    pub fn new(review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repo }
    }
}

#[async_trait]
impl ReviewService for ReviewServiceImpl {
    #[instrument(skip(self, fields))]
    async fn create_review(&self, mut fields: Document) -> Result<ObjectId, ServiceError> {
        fields.remove("_id");
        Ok(self.review_repo.insert(Review::new(fields)).await?)
    }

    #[instrument(skip(self))]
    async fn list_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        Ok(self.review_repo.list().await?)
    }
}
