use bson::Document;
use serde::{Deserialize, Serialize};

use crate::model::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Document,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.map(|id| id.to_hex()),
            fields: user.fields,
        }
    }
}

/// Returned instead of an insert result when the email is already registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserExistsResponse {
    pub message: String,
    #[serde(rename = "insertedID")]
    pub inserted_id: Option<String>,
}

impl Default for UserExistsResponse {
    fn default() -> Self {
        UserExistsResponse {
            message: "user already exists".to_string(),
            inserted_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}
