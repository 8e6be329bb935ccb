use crate::model::user::{User, ADMIN_ROLE};
use crate::repository::mongo_store::MongoStore;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::UpdateOutcome;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use tracing::{debug, error, info};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<User>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    async fn insert(&self, user: User) -> RepositoryResult<ObjectId>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<u64>;
    async fn set_role(&self, id: ObjectId, role: &str) -> RepositoryResult<UpdateOutcome>;
}

pub struct UserRepositoryImpl {
    collection: mongodb::Collection<User>,
}

impl UserRepositoryImpl {
    pub fn new(store: &MongoStore) -> Self {
        let collection = store.collection::<User>(&store.config().users_collection);
        UserRepositoryImpl { collection }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<User>> {
        let cursor = self.collection.find(None, None).await.map_err(|e| {
            error!("Failed to list users: {}", e);
            RepositoryError::from(e)
        })?;
        let users: Vec<User> = cursor.try_collect().await?;
        info!("Fetched {} users", users.len());
        Ok(users)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "email": email };
        let user = self.collection.find_one(filter, None).await.map_err(|e| {
            error!("Failed to find user by email: {}", e);
            RepositoryError::from(e)
        })?;
        debug!(found = user.is_some(), "User lookup by email");
        Ok(user)
    }

    #[tracing::instrument(skip(self, user), fields(email = ?user.email()))]
    async fn insert(&self, mut user: User) -> RepositoryResult<ObjectId> {
        let id = ObjectId::new();
        user.id = Some(id);
        self.collection.insert_one(user, None).await.map_err(|e| {
            error!("Failed to insert user: {}", e);
            RepositoryError::from(e)
        })?;
        info!(user_id = %id, "User inserted");
        Ok(id)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await.map_err(|e| {
            error!("Failed to delete user: {}", e);
            RepositoryError::from(e)
        })?;
        info!(deleted = result.deleted_count, "User delete finished");
        Ok(result.deleted_count)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn set_role(&self, id: ObjectId, role: &str) -> RepositoryResult<UpdateOutcome> {
        if role != ADMIN_ROLE {
            return Err(RepositoryError::validation(format!("Unknown role: {}", role)));
        }
        let update = doc! { "$set": { "role": role } };
        let result = self.collection.update_one(doc! { "_id": id }, update, None).await.map_err(|e| {
            error!("Failed to update user role: {}", e);
            RepositoryError::from(e)
        })?;
        info!(matched = result.matched_count, modified = result.modified_count, "User role updated");
        Ok(result.into())
    }
}
