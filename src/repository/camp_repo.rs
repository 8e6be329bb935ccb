use crate::model::camp::Camp;
use crate::repository::mongo_store::MongoStore;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::UpdateOutcome;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::TryStreamExt;
use tracing::{error, info};

#[async_trait]
pub trait CampRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<Camp>>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Camp>>;
    async fn insert(&self, camp: Camp) -> RepositoryResult<ObjectId>;
    /// Applies `set` with `$set`; an empty set is rejected.
    async fn update(&self, id: ObjectId, set: Document) -> RepositoryResult<UpdateOutcome>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<u64>;
}

pub struct MongoCampRepository {
    collection: mongodb::Collection<Camp>,
}

impl MongoCampRepository {
    pub fn new(store: &MongoStore) -> Self {
        let collection = store.collection::<Camp>(&store.config().camps_collection);
        MongoCampRepository { collection }
    }
}

#[async_trait]
impl CampRepository for MongoCampRepository {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Camp>> {
        let cursor = self.collection.find(None, None).await.map_err(|e| {
            error!("Failed to list camps: {}", e);
            RepositoryError::from(e)
        })?;
        let camps: Vec<Camp> = cursor.try_collect().await?;
        info!("Fetched {} camps", camps.len());
        Ok(camps)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Camp>> {
        let camp = self.collection.find_one(doc! { "_id": id }, None).await.map_err(|e| {
            error!("Failed to fetch camp by ID: {}", e);
            RepositoryError::from(e)
        })?;
        if camp.is_none() {
            info!("No camp for ID: {}", id);
        }
        Ok(camp)
    }

    #[tracing::instrument(skip(self, camp))]
    async fn insert(&self, mut camp: Camp) -> RepositoryResult<ObjectId> {
        let id = ObjectId::new();
        camp.id = Some(id);
        self.collection.insert_one(camp, None).await.map_err(|e| {
            error!("Failed to create camp: {}", e);
            RepositoryError::from(e)
        })?;
        info!(camp_id = %id, "Camp created");
        Ok(id)
    }

    #[tracing::instrument(skip(self, set), fields(id = %id))]
    async fn update(&self, id: ObjectId, set: Document) -> RepositoryResult<UpdateOutcome> {
        if set.is_empty() {
            return Err(RepositoryError::validation("No camp fields to update"));
        }
        let update = doc! { "$set": set };
        let result = self.collection.update_one(doc! { "_id": id }, update, None).await.map_err(|e| {
            error!("Failed to update camp: {}", e);
            RepositoryError::from(e)
        })?;
        info!(matched = result.matched_count, modified = result.modified_count, "Camp updated");
        Ok(result.into())
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await.map_err(|e| {
            error!("Failed to delete camp: {}", e);
            RepositoryError::from(e)
        })?;
        info!(deleted = result.deleted_count, "Camp delete finished");
        Ok(result.deleted_count)
    }
}
