#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use bson::{doc, oid::ObjectId, Document};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // for .oneshot()

use medicamp_backend::app::app::{build_router, AppServices};
use medicamp_backend::config::JwtConfig;
use medicamp_backend::model::camp::Camp;
use medicamp_backend::model::review::Review;
use medicamp_backend::model::user::User;
use medicamp_backend::repository::camp_repo::CampRepository;
use medicamp_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use medicamp_backend::repository::review_repo::ReviewRepository;
use medicamp_backend::repository::user_repo::UserRepository;
use medicamp_backend::repository::UpdateOutcome;
use medicamp_backend::service::camp_service::CampServiceImpl;
use medicamp_backend::service::review_service::ReviewServiceImpl;
use medicamp_backend::service::user_service::UserServiceImpl;
use medicamp_backend::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};

#[derive(Default)]
pub struct InMemoryUserRepository {
    pub users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email() == Some(email)).cloned())
    }

    async fn insert(&self, mut user: User) -> RepositoryResult<ObjectId> {
        let id = ObjectId::new();
        user.id = Some(id);
        self.users.lock().unwrap().push(user);
        Ok(id)
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<u64> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != Some(id));
        Ok((before - users.len()) as u64)
    }

    async fn set_role(&self, id: ObjectId, role: &str) -> RepositoryResult<UpdateOutcome> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(user) => {
                let modified = user.role() != Some(role);
                user.fields.insert("role", role);
                Ok(UpdateOutcome { matched_count: 1, modified_count: modified as u64 })
            }
            None => Ok(UpdateOutcome::default()),
        }
    }
}

#[derive(Default)]
pub struct InMemoryCampRepository {
    pub camps: Mutex<Vec<Camp>>,
}

#[async_trait]
impl CampRepository for InMemoryCampRepository {
    async fn list(&self) -> RepositoryResult<Vec<Camp>> {
        Ok(self.camps.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Camp>> {
        Ok(self.camps.lock().unwrap().iter().find(|c| c.id == Some(id)).cloned())
    }

    async fn insert(&self, mut camp: Camp) -> RepositoryResult<ObjectId> {
        let id = ObjectId::new();
        camp.id = Some(id);
        self.camps.lock().unwrap().push(camp);
        Ok(id)
    }

    async fn update(&self, id: ObjectId, set: Document) -> RepositoryResult<UpdateOutcome> {
        if set.is_empty() {
            return Err(RepositoryError::validation("No camp fields to update"));
        }
        let mut camps = self.camps.lock().unwrap();
        let Some(camp) = camps.iter_mut().find(|c| c.id == Some(id)) else {
            return Ok(UpdateOutcome::default());
        };
        let mut modified = false;
        for (key, value) in set {
            if camp.fields.get(&key) != Some(&value) {
                camp.fields.insert(key, value);
                modified = true;
            }
        }
        Ok(UpdateOutcome { matched_count: 1, modified_count: modified as u64 })
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<u64> {
        let mut camps = self.camps.lock().unwrap();
        let before = camps.len();
        camps.retain(|c| c.id != Some(id));
        Ok((before - camps.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryReviewRepository {
    pub reviews: Mutex<Vec<Review>>,
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn insert(&self, mut review: Review) -> RepositoryResult<ObjectId> {
        let id = ObjectId::new();
        review.id = Some(id);
        self.reviews.lock().unwrap().push(review);
        Ok(id)
    }

    async fn list(&self) -> RepositoryResult<Vec<Review>> {
        Ok(self.reviews.lock().unwrap().clone())
    }
}

/// A user store whose every call fails, for the 5xx path.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn list(&self) -> RepositoryResult<Vec<User>> {
        Err(RepositoryError::database("connection reset"))
    }
    async fn find_by_email(&self, _email: &str) -> RepositoryResult<Option<User>> {
        Err(RepositoryError::database("connection reset"))
    }
    async fn insert(&self, _user: User) -> RepositoryResult<ObjectId> {
        Err(RepositoryError::database("connection reset"))
    }
    async fn delete(&self, _id: ObjectId) -> RepositoryResult<u64> {
        Err(RepositoryError::database("connection reset"))
    }
    async fn set_role(&self, _id: ObjectId, _role: &str) -> RepositoryResult<UpdateOutcome> {
        Err(RepositoryError::database("connection reset"))
    }
}

pub const ADMIN_EMAIL: &str = "admin@medicamp.org";
pub const PARTICIPANT_EMAIL: &str = "participant@medicamp.org";

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub camps: Arc<InMemoryCampRepository>,
    pub reviews: Arc<InMemoryReviewRepository>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl TestApp {
    /// Seeds one admin and one ordinary participant.
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        {
            let mut stored = users.users.lock().unwrap();
            let mut admin = User::admin(ADMIN_EMAIL);
            admin.id = Some(ObjectId::new());
            let mut participant = User::new(PARTICIPANT_EMAIL);
            participant.id = Some(ObjectId::new());
            participant.fields.insert("name", "Nadia");
            stored.push(admin);
            stored.push(participant);
        }
        let camps = Arc::new(InMemoryCampRepository::default());
        let reviews = Arc::new(InMemoryReviewRepository::default());
        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(JwtConfig::default()));

        let services = AppServices {
            camp_service: Arc::new(CampServiceImpl::new(camps.clone())),
            user_service: Arc::new(UserServiceImpl::new(users.clone())),
            review_service: Arc::new(ReviewServiceImpl::new(reviews.clone())),
            jwt_utils: jwt_utils.clone(),
        };

        TestApp { router: build_router(&services), users, camps, reviews, jwt_utils }
    }

    pub fn with_user_repo(user_repo: Arc<dyn UserRepository>) -> Router {
        let services = AppServices {
            camp_service: Arc::new(CampServiceImpl::new(Arc::new(InMemoryCampRepository::default()))),
            user_service: Arc::new(UserServiceImpl::new(user_repo)),
            review_service: Arc::new(ReviewServiceImpl::new(Arc::new(InMemoryReviewRepository::default()))),
            jwt_utils: Arc::new(JwtTokenUtilsImpl::new(JwtConfig::default())),
        };
        build_router(&services)
    }

    pub fn token_for(&self, email: &str) -> String {
        token_for(&self.jwt_utils, email)
    }

    pub fn user_id(&self, email: &str) -> ObjectId {
        self.users
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email() == Some(email))
            .and_then(|u| u.id)
            .expect("seeded user")
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        send(&self.router, req).await
    }
}

pub fn token_for(jwt_utils: &JwtTokenUtilsImpl, email: &str) -> String {
    let mut payload = serde_json::Map::new();
    payload.insert("email".to_string(), Value::from(email));
    jwt_utils.issue_token(payload).expect("token")
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp: Response<Body> = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };
    (status, json)
}
