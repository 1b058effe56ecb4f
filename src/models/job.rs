use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

pub const DEFAULT_RESUME_VERSION: &str = "default";

/// Pipeline stage of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Applied,
    #[serde(rename = "Phone Screen")]
    PhoneScreen,
    Technical,
    Onsite,
    Offer,
    Rejected,
}

impl JobStatus {
    /// Canonical funnel order.
    pub const ALL: [JobStatus; 6] = [
        JobStatus::Applied,
        JobStatus::PhoneScreen,
        JobStatus::Technical,
        JobStatus::Onsite,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::PhoneScreen => "Phone Screen",
            JobStatus::Technical => "Technical",
            JobStatus::Onsite => "Onsite",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }

    /// Exact, case-sensitive match against the stored label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn rgb(self) -> u32 {
        match self {
            JobStatus::Applied => 0x3498DB,
            JobStatus::PhoneScreen => 0x9B59B6,
            JobStatus::Technical => 0xE67E22,
            JobStatus::Onsite => 0xF39C12,
            JobStatus::Offer => 0x27AE60,
            JobStatus::Rejected => 0xE74C3C,
        }
    }

    pub fn color(self) -> String {
        format!("#{:06x}", self.rgb())
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: String,
    pub job_url: String,
    pub description: String,
    pub salary: String,
    pub status: String,
    pub applied_date: DateTime<Utc>,
    pub last_activity: Option<DateTime<Utc>>,
    pub resume_version: String,
    pub notes: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub response_received: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// `None` when the stored label is not one of the known stages.
    pub fn status_kind(&self) -> Option<JobStatus> {
        JobStatus::parse(&self.status)
    }

    /// Most recent activity, falling back to the application date.
    pub fn last_touched(&self) -> DateTime<Utc> {
        self.last_activity.unwrap_or(self.applied_date)
    }
}

/// Blank resume tags collapse to [`DEFAULT_RESUME_VERSION`].
pub fn normalize_resume_version(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => DEFAULT_RESUME_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in JobStatus::ALL {
            assert_eq!(JobStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(JobStatus::parse("phone screen"), None);
        assert_eq!(JobStatus::parse("Ghosted"), None);
    }

    #[test]
    fn status_serializes_with_display_label() {
        let json = serde_json::to_string(&JobStatus::PhoneScreen).unwrap();
        assert_eq!(json, "\"Phone Screen\"");
        let parsed: JobStatus = serde_json::from_str("\"Offer\"").unwrap();
        assert_eq!(parsed, JobStatus::Offer);
    }

    #[test]
    fn colors_are_hex_strings() {
        assert_eq!(JobStatus::Applied.color(), "#3498db");
        assert_eq!(JobStatus::Offer.color(), "#27ae60");
    }

    #[test]
    fn blank_resume_version_becomes_default() {
        assert_eq!(normalize_resume_version(None), "default");
        assert_eq!(normalize_resume_version(Some("   ")), "default");
        assert_eq!(normalize_resume_version(Some(" backend ")), "backend");
    }
}
