pub mod analytics_service;
pub mod export_service;
pub mod interview_service;
pub mod job_service;
pub mod report_service;
pub mod seed_service;
