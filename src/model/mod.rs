pub mod user;
pub mod camp;
pub mod review;
