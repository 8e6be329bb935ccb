pub mod jwt;
pub mod logger;
pub mod error;
