use tracing::{info, warn, instrument};
use crate::repository::user_repo::UserRepository;
use crate::repository::UpdateOutcome;
use std::sync::Arc;

use crate::model::user::{User, ADMIN_ROLE};
use crate::util::error::ServiceError;
use async_trait::async_trait;
use bson::oid::ObjectId;

/// Result of a create-if-absent registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateUserOutcome {
    Created(ObjectId),
    AlreadyExists,
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ServiceError>;
    /// Whether the stored user for `email` currently holds the admin role.
    /// Unknown emails are simply not admins.
    async fn is_admin(&self, email: &str) -> Result<bool, ServiceError>;
    /// Inserts `user` unless its email is taken. A missing or non-string
    /// `email` is invalid input.
    async fn create_user(&self, user: User) -> Result<CreateUserOutcome, ServiceError>;
    async fn delete_user(&self, id: ObjectId) -> Result<u64, ServiceError>;
    async fn promote_to_admin(&self, id: ObjectId) -> Result<UpdateOutcome, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Seeds the configured admin account unless a user with that email already exists.
    #[instrument(skip(self))]
    pub async fn ensure_admin(&self, email: &str) -> Result<(), ServiceError> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            info!("Admin user already exists, skipping creation.");
            return Ok(());
        }
        self.user_repo.insert(User::admin(email)).await?;
        info!("First admin user created.");
        Ok(())
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.user_repo.list().await?)
    }

    #[instrument(skip(self))]
    async fn is_admin(&self, email: &str) -> Result<bool, ServiceError> {
        let user = self.user_repo.find_by_email(email).await?;
        Ok(user.map(|u| u.is_admin()).unwrap_or(false))
    }

    #[instrument(skip(self, user), fields(email = ?user.email()))]
    async fn create_user(&self, mut user: User) -> Result<CreateUserOutcome, ServiceError> {
        // The store assigns identifiers.
        user.fields.remove("_id");
        let email = user
            .email()
            .ok_or_else(|| ServiceError::InvalidInput("email must be a string".to_string()))?;
        if self.user_repo.find_by_email(email).await?.is_some() {
            warn!("User already exists");
            return Ok(CreateUserOutcome::AlreadyExists);
        }
        let id = self.user_repo.insert(user).await?;
        Ok(CreateUserOutcome::Created(id))
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_user(&self, id: ObjectId) -> Result<u64, ServiceError> {
        Ok(self.user_repo.delete(id).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn promote_to_admin(&self, id: ObjectId) -> Result<UpdateOutcome, ServiceError> {
        let outcome = self.user_repo.set_role(id, ADMIN_ROLE).await?;
        if outcome.matched_count == 0 {
            warn!("No user to promote");
        }
        Ok(outcome)
    }
}
