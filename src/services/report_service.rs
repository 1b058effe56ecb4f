use chrono::NaiveDate;

use crate::dto::analytics_dto::{
    AnalyticsReport, FunnelStage, Headlines, Insight, InsightKind, InsightLevel, JobAnalytics,
    MonthlyBar, RankedCompany, ResumeBar,
};
use crate::services::analytics_service::percentage;

pub const EXCELLENT_RESPONSE_RATE: u32 = 40;
pub const LOW_RESPONSE_RATE: u32 = 20;
pub const SLOW_RESPONSE_DAYS: i64 = 14;
pub const ABOVE_AVERAGE_RESPONSE_RATE: u32 = 30;
pub const QUICK_RESPONSE_DAYS: i64 = 7;

pub struct ReportService;

impl ReportService {
    pub fn build(metrics: &JobAnalytics) -> AnalyticsReport {
        AnalyticsReport {
            headlines: Self::headlines(metrics),
            funnel: Self::funnel(metrics),
            monthly_bars: Self::monthly_bars(metrics),
            resume_bars: Self::resume_bars(metrics),
            top_companies: metrics
                .top_companies
                .iter()
                .enumerate()
                .map(|(idx, entry)| RankedCompany {
                    rank: idx + 1,
                    company: entry.company.clone(),
                    count: entry.count,
                })
                .collect(),
            insights: Self::insights(metrics),
        }
    }

    /// Threshold flags; every comparison is strict.
    pub fn insights(metrics: &JobAnalytics) -> Vec<Insight> {
        let mut insights = Vec::new();

        if metrics.response_rate > EXCELLENT_RESPONSE_RATE {
            insights.push(Insight {
                kind: InsightKind::ExcellentResponseRate,
                level: InsightLevel::Positive,
                message: "Your response rate is excellent! Your resume is catching attention."
                    .to_string(),
            });
        }
        if metrics.response_rate < LOW_RESPONSE_RATE {
            insights.push(Insight {
                kind: InsightKind::LowResponseRate,
                level: InsightLevel::Warning,
                message: "Low response rate. Consider tailoring your resume for each application."
                    .to_string(),
            });
        }
        if metrics.avg_time_to_response > SLOW_RESPONSE_DAYS {
            insights.push(Insight {
                kind: InsightKind::SlowResponses,
                level: InsightLevel::Info,
                message: "Companies are taking time to respond. Follow up after 7-10 days."
                    .to_string(),
            });
        }
        if metrics.resume_performance.len() > 1 {
            insights.push(Insight {
                kind: InsightKind::CompareResumes,
                level: InsightLevel::Info,
                message:
                    "Try analyzing which resume version performs best for different roles."
                        .to_string(),
            });
        }

        insights
    }

    fn headlines(metrics: &JobAnalytics) -> Headlines {
        let response_rate = if metrics.response_rate > ABOVE_AVERAGE_RESPONSE_RATE {
            "Above average!"
        } else {
            "Keep applying!"
        };
        let time_to_response = if metrics.avg_time_to_response < QUICK_RESPONSE_DAYS {
            "Quick responses!"
        } else {
            "Patience is key"
        };
        Headlines {
            response_rate: response_rate.to_string(),
            time_to_response: time_to_response.to_string(),
        }
    }

    fn funnel(metrics: &JobAnalytics) -> Vec<FunnelStage> {
        let total = metrics.total_jobs.max(1);
        metrics
            .status_distribution
            .iter()
            .map(|(status, count)| FunnelStage {
                status,
                count,
                percentage: percentage(count, total),
                color: status.color(),
            })
            .collect()
    }

    fn monthly_bars(metrics: &JobAnalytics) -> Vec<MonthlyBar> {
        let counts: Vec<u64> = metrics.monthly_applications.iter().map(|m| m.count).collect();
        metrics
            .monthly_applications
            .iter()
            .zip(normalize_heights(&counts))
            .map(|(entry, height)| MonthlyBar {
                month: entry.month.clone(),
                label: month_label(&entry.month),
                count: entry.count,
                height,
            })
            .collect()
    }

    fn resume_bars(metrics: &JobAnalytics) -> Vec<ResumeBar> {
        metrics
            .resume_performance
            .iter()
            .map(|resume| ResumeBar {
                version: resume.version.clone(),
                total: resume.total,
                response_rate: resume.response_rate,
                offer_rate: resume.offer_rate,
                width: resume.response_rate,
            })
            .collect()
    }
}

/// `value / max * 100` per entry; all zeros when the maximum is 0.
pub fn normalize_heights(values: &[u64]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);
    values
        .iter()
        .map(|&value| {
            if max == 0 {
                0.0
            } else {
                value as f64 / max as f64 * 100.0
            }
        })
        .collect()
}

/// "2025-01" -> "Jan 25". Keys that do not parse are returned as-is.
pub fn month_label(key: &str) -> String {
    let parsed = key.split_once('-').and_then(|(year, month)| {
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)
    });

    match parsed {
        Some(date) => date.format("%b %y").to_string(),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_scale_to_the_largest_value() {
        assert_eq!(normalize_heights(&[3, 6, 0]), vec![50.0, 100.0, 0.0]);
    }

    #[test]
    fn heights_are_zero_when_max_is_zero() {
        assert_eq!(normalize_heights(&[0, 0]), vec![0.0, 0.0]);
        assert!(normalize_heights(&[]).is_empty());
    }

    #[test]
    fn month_labels_use_short_names() {
        assert_eq!(month_label("2025-01"), "Jan 25");
        assert_eq!(month_label("2024-12"), "Dec 24");
        assert_eq!(month_label("2009-07"), "Jul 09");
    }

    #[test]
    fn malformed_month_keys_pass_through() {
        assert_eq!(month_label("unknown"), "unknown");
        assert_eq!(month_label("2025-13"), "2025-13");
    }
}
