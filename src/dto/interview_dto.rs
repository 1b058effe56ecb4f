use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::interview::InterviewResult;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInterviewPayload {
    pub job_id: Uuid,
    #[validate(length(min = 1))]
    pub interview_type: String,
    pub scheduled_date: DateTime<Utc>,
    #[validate(range(min = 1, max = 1440))]
    pub duration_minutes: Option<i32>,
    pub interviewer_name: Option<String>,
    pub interviewer_title: Option<String>,
    pub interviewer_email: Option<String>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub questions: Vec<String>,
    pub notes: Option<String>,
    pub feedback: Option<String>,
    #[serde(default)]
    pub result: InterviewResult,
    pub prep_notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateInterviewPayload {
    #[validate(length(min = 1))]
    pub interview_type: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    #[validate(range(min = 1, max = 1440))]
    pub duration_minutes: Option<i32>,
    pub interviewer_name: Option<String>,
    pub interviewer_title: Option<String>,
    pub interviewer_email: Option<String>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub questions: Option<Vec<String>>,
    pub notes: Option<String>,
    pub feedback: Option<String>,
    pub result: Option<InterviewResult>,
    pub prep_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InterviewListQuery {
    pub job_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub interview_type: Option<String>,
    pub result: Option<String>,
}
