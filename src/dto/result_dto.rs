//! Write-result bodies, shaped like the driver results the web client reads.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::repository::UpdateOutcome;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<ObjectId> for InsertOneResponse {
    fn from(id: ObjectId) -> Self {
        InsertOneResponse { acknowledged: true, inserted_id: id.to_hex() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

impl From<UpdateOutcome> for UpdateResponse {
    fn from(outcome: UpdateOutcome) -> Self {
        UpdateResponse {
            acknowledged: true,
            matched_count: outcome.matched_count,
            modified_count: outcome.modified_count,
            upserted_count: 0,
            upserted_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<u64> for DeleteResponse {
    fn from(deleted_count: u64) -> Self {
        DeleteResponse { acknowledged: true, deleted_count }
    }
}
