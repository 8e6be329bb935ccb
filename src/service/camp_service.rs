use std::sync::Arc;

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use tracing::instrument;

use crate::model::camp::Camp;
use crate::repository::camp_repo::CampRepository;
use crate::repository::UpdateOutcome;
use crate::util::error::ServiceError;

#[async_trait]
pub trait CampService: Send + Sync {
    async fn list_camps(&self) -> Result<Vec<Camp>, ServiceError>;
    async fn get_camp(&self, id: ObjectId) -> Result<Option<Camp>, ServiceError>;
    async fn create_camp(&self, camp_fields: Document) -> Result<ObjectId, ServiceError>;
    /// Sets the named camp fields present in `body`; anything else is ignored.
    async fn update_camp(&self, id: ObjectId, body: Document) -> Result<UpdateOutcome, ServiceError>;
    async fn delete_camp(&self, id: ObjectId) -> Result<u64, ServiceError>;
}

pub struct CampServiceImpl {
    pub camp_repo: Arc<dyn CampRepository>,
}

impl CampServiceImpl {
    pub fn new(camp_repo: Arc<dyn CampRepository>) -> Self {
        Self { camp_repo }
    }
}

#[async_trait]
impl CampService for CampServiceImpl {
    #[instrument(skip(self))]
    async fn list_camps(&self) -> Result<Vec<Camp>, ServiceError> {
        Ok(self.camp_repo.list().await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_camp(&self, id: ObjectId) -> Result<Option<Camp>, ServiceError> {
        Ok(self.camp_repo.find_by_id(id).await?)
    }

    #[instrument(skip(self, camp_fields))]
    async fn create_camp(&self, mut camp_fields: Document) -> Result<ObjectId, ServiceError> {
        // The store assigns identifiers.
        camp_fields.remove("_id");
        Ok(self.camp_repo.insert(Camp::new(camp_fields)).await?)
    }

    #[instrument(skip(self, body), fields(id = %id))]
    async fn update_camp(&self, id: ObjectId, body: Document) -> Result<UpdateOutcome, ServiceError> {
        let set = Camp::set_document(&body);
        if set.is_empty() {
            return Err(ServiceError::InvalidInput("No camp fields to update".to_string()));
        }
        Ok(self.camp_repo.update(id, set).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_camp(&self, id: ObjectId) -> Result<u64, ServiceError> {
        Ok(self.camp_repo.delete(id).await?)
    }
}
