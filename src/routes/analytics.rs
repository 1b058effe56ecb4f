use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::{analytics_dto::AnalyticsResponse, job_dto::JobListQuery},
    error::Result,
    services::{analytics_service::AnalyticsService, report_service::ReportService},
    utils::time::now,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/analytics",
    params(
        ("status" = Option<String>, Query, description = "Restrict to one status"),
        ("company" = Option<String>, Query, description = "Case-insensitive company substring"),
        ("resume_version" = Option<String>, Query, description = "Restrict to one resume version")
    ),
    responses(
        (status = 200, description = "Metrics and the presentation report", body = AnalyticsResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list(query).await?;
    let metrics = AnalyticsService::compute(&jobs);
    let report = ReportService::build(&metrics);
    tracing::debug!(
        total_jobs = metrics.total_jobs,
        insights = report.insights.len(),
        "Analytics computed"
    );
    Ok(Json(AnalyticsResponse { metrics, report }))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Totals, recent activity and follow-up candidates", body = DashboardSummary)
    )
)]
#[axum::debug_handler]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list(JobListQuery::default()).await?;
    let summary =
        AnalyticsService::dashboard(&jobs, now(), state.config.follow_up_after_days);
    Ok(Json(summary))
}
