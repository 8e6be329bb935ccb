pub mod result_dto;
pub mod camp_dto;
pub mod user_dto;
pub mod review_dto;
