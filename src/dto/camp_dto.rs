use bson::Document;
use serde::{Deserialize, Serialize};

use crate::model::camp::Camp;

/// A camp as the client sees it: `_id` rendered as a hex string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Document,
}

impl From<Camp> for CampResponse {
    fn from(camp: Camp) -> Self {
        CampResponse {
            id: camp.id.map(|id| id.to_hex()),
            fields: camp.fields,
        }
    }
}
