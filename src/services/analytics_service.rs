//! Aggregate metrics over job and interview collections.
//!
//! Everything here is a pure function of its input slice: no I/O, no shared
//! state, and no failure mode. An empty collection yields zeroed metrics.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, Utc};

use crate::dto::analytics_dto::{
    CompanyCount, DashboardSummary, InterviewBucket, InterviewResultCounts, InterviewStats,
    InterviewTypeCount, JobAnalytics, MonthlyCount, ResumePerformance, StatusDistribution,
};
use crate::models::interview::{Interview, InterviewResult};
use crate::models::job::{Job, JobStatus, DEFAULT_RESUME_VERSION};
use crate::utils::time::{days_before, elapsed_days_ceil, month_key};

pub const MONTH_WINDOW: usize = 6;
pub const TOP_COMPANY_LIMIT: usize = 5;
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// The fields the aggregator reads, normalized once per job.
struct JobFacts<'a> {
    company: &'a str,
    status: Option<JobStatus>,
    resume_version: &'a str,
    responded: bool,
    applied: DateTime<Utc>,
    last_activity: Option<DateTime<Utc>>,
}

impl<'a> From<&'a Job> for JobFacts<'a> {
    fn from(job: &'a Job) -> Self {
        let resume_version = if job.resume_version.is_empty() {
            DEFAULT_RESUME_VERSION
        } else {
            job.resume_version.as_str()
        };
        Self {
            company: &job.company,
            status: job.status_kind(),
            resume_version,
            responded: job.response_received,
            applied: job.applied_date,
            last_activity: job.last_activity,
        }
    }
}

/// Groups keyed values while remembering first-insertion order.
struct OrderedBuckets<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K: Hash + Eq + Clone, V: Default> OrderedBuckets<K, V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn entry(&mut self, key: K) -> &mut V {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, V::default()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

#[derive(Default)]
struct ResumeTally {
    total: u64,
    responses: u64,
    offers: u64,
}

/// Rounds half-way cases toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `round(count / total * 100)`, 0 for an empty denominator.
pub fn percentage(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    round_half_up(count as f64 / total as f64 * 100.0) as u32
}

pub struct AnalyticsService;

impl AnalyticsService {
    pub fn compute(jobs: &[Job]) -> JobAnalytics {
        let facts: Vec<JobFacts<'_>> = jobs.iter().map(JobFacts::from).collect();
        let total = facts.len() as u64;

        let responded = facts.iter().filter(|f| f.responded).count() as u64;
        let offers = count_status(&facts, JobStatus::Offer);
        let rejections = count_status(&facts, JobStatus::Rejected);

        JobAnalytics {
            total_jobs: total,
            response_rate: percentage(responded, total),
            success_rate: percentage(offers, total),
            rejection_rate: percentage(rejections, total),
            avg_time_to_response: average_response_days(&facts),
            resume_performance: resume_performance(&facts),
            monthly_applications: monthly_applications(&facts),
            top_companies: top_companies(&facts),
            status_distribution: StatusDistribution::from_statuses(facts.iter().map(|f| f.status)),
        }
    }

    pub fn dashboard(jobs: &[Job], now: DateTime<Utc>, follow_up_after_days: i64) -> DashboardSummary {
        let mut recent: Vec<&Job> = jobs.iter().collect();
        recent.sort_by(|a, b| b.last_touched().cmp(&a.last_touched()));
        recent.truncate(RECENT_ACTIVITY_LIMIT);

        DashboardSummary {
            total: jobs.len() as u64,
            status_counts: StatusDistribution::from_statuses(jobs.iter().map(Job::status_kind)),
            recent_activity: recent.into_iter().cloned().collect(),
            needs_follow_up: Self::needing_follow_up(jobs, now, follow_up_after_days),
        }
    }

    /// Applications still at `Applied`, unanswered, and at least `after_days` old.
    pub fn needing_follow_up(jobs: &[Job], now: DateTime<Utc>, after_days: i64) -> Vec<Job> {
        let cutoff = days_before(now, after_days);
        jobs.iter()
            .filter(|job| {
                job.status_kind() == Some(JobStatus::Applied)
                    && !job.response_received
                    && job.applied_date <= cutoff
            })
            .cloned()
            .collect()
    }

    pub fn interview_stats(interviews: &[Interview]) -> InterviewStats {
        let mut breakdown: OrderedBuckets<(&str, &str), u64> = OrderedBuckets::new();
        let mut by_type: OrderedBuckets<&str, u64> = OrderedBuckets::new();
        let mut by_result = InterviewResultCounts::default();

        for interview in interviews {
            *breakdown.entry((interview.interview_type.as_str(), interview.result.as_str())) += 1;
            *by_type.entry(interview.interview_type.as_str()) += 1;
            match interview.result_kind() {
                Some(InterviewResult::Pending) => by_result.pending += 1,
                Some(InterviewResult::Passed) => by_result.passed += 1,
                Some(InterviewResult::Failed) => by_result.failed += 1,
                None => {}
            }
        }

        InterviewStats {
            total: interviews.len() as u64,
            breakdown: breakdown
                .into_entries()
                .into_iter()
                .map(|((interview_type, result), count)| InterviewBucket {
                    interview_type: interview_type.to_string(),
                    result: result.to_string(),
                    count,
                })
                .collect(),
            by_type: by_type
                .into_entries()
                .into_iter()
                .map(|(interview_type, count)| InterviewTypeCount {
                    interview_type: interview_type.to_string(),
                    count,
                })
                .collect(),
            by_result,
        }
    }
}

fn count_status(facts: &[JobFacts<'_>], status: JobStatus) -> u64 {
    facts.iter().filter(|f| f.status == Some(status)).count() as u64
}

fn average_response_days(facts: &[JobFacts<'_>]) -> i64 {
    let days: Vec<i64> = facts
        .iter()
        .filter(|f| f.responded)
        .filter_map(|f| f.last_activity.map(|last| elapsed_days_ceil(f.applied, last)))
        .collect();

    if days.is_empty() {
        return 0;
    }
    round_half_up(days.iter().sum::<i64>() as f64 / days.len() as f64)
}

fn resume_performance(facts: &[JobFacts<'_>]) -> Vec<ResumePerformance> {
    let mut groups: OrderedBuckets<&str, ResumeTally> = OrderedBuckets::new();
    for fact in facts {
        let tally = groups.entry(fact.resume_version);
        tally.total += 1;
        if fact.responded {
            tally.responses += 1;
        }
        if fact.status == Some(JobStatus::Offer) {
            tally.offers += 1;
        }
    }

    groups
        .into_entries()
        .into_iter()
        .map(|(version, tally)| ResumePerformance {
            version: version.to_string(),
            total: tally.total,
            response_rate: percentage(tally.responses, tally.total),
            offer_rate: percentage(tally.offers, tally.total),
        })
        .collect()
}

fn monthly_applications(facts: &[JobFacts<'_>]) -> Vec<MonthlyCount> {
    let mut months: OrderedBuckets<String, u64> = OrderedBuckets::new();
    for fact in facts {
        *months.entry(month_key(fact.applied)) += 1;
    }

    let mut entries = months.into_entries();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    let skip = entries.len().saturating_sub(MONTH_WINDOW);

    entries
        .into_iter()
        .skip(skip)
        .map(|(month, count)| MonthlyCount { month, count })
        .collect()
}

fn top_companies(facts: &[JobFacts<'_>]) -> Vec<CompanyCount> {
    let mut companies: OrderedBuckets<&str, u64> = OrderedBuckets::new();
    for fact in facts {
        *companies.entry(fact.company) += 1;
    }

    // stable: equal counts keep encounter order
    let mut entries = companies.into_entries();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(TOP_COMPANY_LIMIT);

    entries
        .into_iter()
        .map(|(company, count)| CompanyCount {
            company: company.to_string(),
            count,
        })
        .collect()
}
