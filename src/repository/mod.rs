pub mod repository_error;
pub mod mongo_store;
pub mod user_repo;
pub mod camp_repo;
pub mod review_repo;

/// Counts reported by a single-document update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<mongodb::results::UpdateResult> for UpdateOutcome {
    fn from(result: mongodb::results::UpdateResult) -> Self {
        UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}
