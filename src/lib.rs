pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::services::{interview_service::InterviewService, job_service::JobService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub job_service: JobService,
    pub interview_service: InterviewService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let job_service = JobService::new(pool.clone());
        let interview_service = InterviewService::new(pool.clone());

        Self {
            pool,
            config: Arc::new(config),
            job_service,
            interview_service,
        }
    }
}
