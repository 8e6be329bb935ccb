pub mod user_service;
pub mod camp_service;
pub mod review_service;
