pub mod camp_router;
pub mod user_router;
pub mod review_router;
pub mod token_router;
