pub mod analytics_dto;
pub mod interview_dto;
pub mod job_dto;
