use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const DEFAULT_DURATION_MINUTES: i32 = 60;
pub const DEFAULT_LOCATION: &str = "Remote";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InterviewResult {
    #[default]
    Pending,
    Passed,
    Failed,
}

impl InterviewResult {
    pub const ALL: [InterviewResult; 3] = [
        InterviewResult::Pending,
        InterviewResult::Passed,
        InterviewResult::Failed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InterviewResult::Pending => "Pending",
            InterviewResult::Passed => "Passed",
            InterviewResult::Failed => "Failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|result| result.as_str() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub id: Uuid,
    pub job_id: Uuid,
    pub interview_type: String,
    pub scheduled_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub interviewer_name: String,
    pub interviewer_title: String,
    pub interviewer_email: String,
    pub location: String,
    pub meeting_link: String,
    pub questions: Vec<String>,
    pub notes: String,
    pub feedback: String,
    pub result: String,
    pub prep_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Interview {
    pub fn result_kind(&self) -> Option<InterviewResult> {
        InterviewResult::parse(&self.result)
    }
}

/// Interview joined with the application it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UpcomingInterview {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub interview: Interview,
    pub company: String,
    pub position: String,
}
