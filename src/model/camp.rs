use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Keys a camp update may touch. Values are stored exactly as sent.
pub const CAMP_FIELDS: [&str; 10] = [
    "camp_name",
    "photo",
    "camp_fees",
    "scheduled_date",
    "scheduled_time",
    "venue",
    "specialized_service",
    "healthcare_professionals",
    "target_audience",
    "details",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camp {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Document,
}

impl Camp {
    pub fn new(fields: Document) -> Self {
        Camp { id: None, fields }
    }

    /// `$set` payload for an update: the named camp fields present in `body`,
    /// raw values untouched. Anything else in `body` is ignored.
    pub fn set_document(body: &Document) -> Document {
        let mut set = Document::new();
        for key in CAMP_FIELDS {
            if let Some(value) = body.get(key) {
                set.insert(key, value.clone());
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, Bson};

    #[test]
    fn test_stored_shapes_decode_unchanged() {
        let id = ObjectId::new();
        let stored = doc! {
            "_id": id,
            "camp_name": "Dental Camp",
            "camp_fees": 500_i32,
            "healthcare_professionals": ["Dr A", "Dr B"],
            "venue": { "city": "Khulna", "hall": 3_i32 },
            "participant_count": 12_i64,
        };

        let camp: Camp = bson::from_document(stored.clone()).unwrap();
        assert_eq!(camp.id, Some(id));
        assert_eq!(camp.fields.get("camp_fees"), Some(&Bson::Int32(500)));
        assert_eq!(camp.fields.get_array("healthcare_professionals").unwrap().len(), 2);
        assert_eq!(camp.fields.get_document("venue").unwrap().get_i32("hall").unwrap(), 3);
        assert_eq!(camp.fields.get_i64("participant_count").unwrap(), 12);

        assert_eq!(bson::to_document(&camp).unwrap(), stored);
    }

    #[test]
    fn test_string_fees_are_accepted() {
        let camp: Camp = bson::from_document(doc! { "camp_name": "A", "camp_fees": "500" }).unwrap();
        assert!(camp.id.is_none());
        assert_eq!(camp.fields.get_str("camp_fees").unwrap(), "500");
    }

    #[test]
    fn test_set_document_keeps_only_camp_fields() {
        let body = doc! {
            "venue": "Dhaka",
            "camp_fees": "free",
            "healthcare_professionals": ["Dr C"],
            "participant_count": 3_i32,
            "_id": "client-id",
        };
        let set = Camp::set_document(&body);
        assert_eq!(set, doc! { "camp_fees": "free", "venue": "Dhaka", "healthcare_professionals": ["Dr C"] });
        assert!(Camp::set_document(&doc! { "other": 1_i32 }).is_empty());
    }
}
