pub mod camp_handler;
pub mod user_handler;
pub mod review_handler;
pub mod token_handler;

use bson::oid::ObjectId;
use crate::util::error::HandlerError;

/// Path ids must be 24-char hex ObjectIds.
pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(raw).map_err(|_| HandlerError::bad_request(format!("Invalid id: {}", raw)))
}

pub async fn root_handler() -> &'static str {
    "Medicamp is running..."
}
