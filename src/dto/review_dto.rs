use bson::Document;
use serde::{Deserialize, Serialize};

use crate::model::review::Review;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Document,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        ReviewResponse {
            id: review.id.map(|id| id.to_hex()),
            fields: review.fields,
        }
    }
}
