use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::models::job::{Job, JobStatus};

/// Count per known status, always carrying all six stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusDistribution {
    counts: [u64; 6],
}

impl StatusDistribution {
    /// Unknown statuses (`None`) are dropped.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Option<JobStatus>>,
    {
        let mut distribution = Self::default();
        for status in statuses.into_iter().flatten() {
            distribution.counts[status.index()] += 1;
        }
        distribution
    }

    pub fn get(&self, status: JobStatus) -> u64 {
        self.counts[status.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobStatus, u64)> + '_ {
        JobStatus::ALL
            .into_iter()
            .map(move |status| (status, self.counts[status.index()]))
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl Serialize for StatusDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (status, count) in self.iter() {
            map.serialize_entry(status.as_str(), &count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumePerformance {
    pub version: String,
    pub total: u64,
    pub response_rate: u32,
    pub offer_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCount {
    pub company: String,
    pub count: u64,
}

/// Derived metrics over a job collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobAnalytics {
    pub total_jobs: u64,
    pub response_rate: u32,
    pub success_rate: u32,
    pub rejection_rate: u32,
    pub avg_time_to_response: i64,
    pub resume_performance: Vec<ResumePerformance>,
    pub monthly_applications: Vec<MonthlyCount>,
    pub top_companies: Vec<CompanyCount>,
    pub status_distribution: StatusDistribution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    ExcellentResponseRate,
    LowResponseRate,
    SlowResponses,
    CompareResumes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightLevel {
    Positive,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub level: InsightLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headlines {
    pub response_rate: String,
    pub time_to_response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStage {
    pub status: JobStatus,
    pub count: u64,
    pub percentage: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBar {
    pub month: String,
    pub label: String,
    pub count: u64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeBar {
    pub version: String,
    pub total: u64,
    pub response_rate: u32,
    pub offer_rate: u32,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCompany {
    pub rank: usize,
    pub company: String,
    pub count: u64,
}

/// Display-ready view of [`JobAnalytics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub headlines: Headlines,
    pub funnel: Vec<FunnelStage>,
    pub monthly_bars: Vec<MonthlyBar>,
    pub resume_bars: Vec<ResumeBar>,
    pub top_companies: Vec<RankedCompany>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsResponse {
    pub metrics: JobAnalytics,
    pub report: AnalyticsReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total: u64,
    pub status_counts: StatusDistribution,
    pub recent_activity: Vec<Job>,
    pub needs_follow_up: Vec<Job>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewBucket {
    pub interview_type: String,
    pub result: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewTypeCount {
    pub interview_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InterviewResultCounts {
    pub pending: u64,
    pub passed: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewStats {
    pub total: u64,
    pub breakdown: Vec<InterviewBucket>,
    pub by_type: Vec<InterviewTypeCount>,
    pub by_result: InterviewResultCounts,
}
