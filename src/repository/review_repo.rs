use crate::model::review::Review;
use crate::repository::mongo_store::MongoStore;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::stream::TryStreamExt;
use tracing::{error, info};

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: Review) -> RepositoryResult<ObjectId>;
    async fn list(&self) -> RepositoryResult<Vec<Review>>;
}

pub struct MongoReviewRepository {
    collection: mongodb::Collection<Review>,
}

impl MongoReviewRepository {
    pub fn new(store: &MongoStore) -> Self {
        let collection = store.collection::<Review>(&store.config().reviews_collection);
        MongoReviewRepository { collection }
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    #[tracing::instrument(skip(self, review))]
    async fn insert(&self, mut review: Review) -> RepositoryResult<ObjectId> {
        let id = ObjectId::new();
        review.id = Some(id);
        self.collection.insert_one(review, None).await.map_err(|e| {
            error!("Failed to insert review: {}", e);
            RepositoryError::from(e)
        })?;
        info!(review_id = %id, "Review inserted");
        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Review>> {
        let cursor = self.collection.find(None, None).await.map_err(|e| {
            error!("Failed to list reviews: {}", e);
            RepositoryError::from(e)
        })?;
        let reviews: Vec<Review> = cursor.try_collect().await?;
        info!("Fetched {} reviews", reviews.len());
        Ok(reviews)
    }
}
