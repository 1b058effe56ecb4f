use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::JobStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(length(min = 1))]
    pub position: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub job_url: Option<String>,
    pub description: Option<String>,
    pub salary: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
    pub applied_date: Option<DateTime<Utc>>,
    pub last_activity: Option<DateTime<Utc>>,
    pub resume_version: Option<String>,
    pub notes: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub follow_up_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub response_received: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub company: Option<String>,
    #[validate(length(min = 1))]
    pub position: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub status: Option<JobStatus>,
    pub applied_date: Option<DateTime<Utc>>,
    pub last_activity: Option<DateTime<Utc>>,
    pub resume_version: Option<String>,
    pub notes: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub response_received: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListQuery {
    pub status: Option<String>,
    pub company: Option<String>,
    pub resume_version: Option<String>,
}
