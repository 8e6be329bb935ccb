use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Reviews carry whatever fields the client submits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Document,
}

impl Review {
    pub fn new(fields: Document) -> Self {
        Review { id: None, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_stored_review_round_trips() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "rating": 4_i32,
            "comment": "Helpful staff",
            "tags": ["clean", "quick"],
            "author": { "name": "Farhana" },
        };
        let review: Review = bson::from_document(stored.clone()).unwrap();
        assert!(review.id.is_some());
        assert_eq!(review.fields.get_i32("rating").unwrap(), 4);
        assert!(review.fields.get("_id").is_none());
        assert_eq!(bson::to_document(&review).unwrap(), stored);
    }
}
