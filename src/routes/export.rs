use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{
    dto::job_dto::JobListQuery,
    error::Result,
    services::{
        analytics_service::AnalyticsService,
        export_service::{ExportService, XLSX_CONTENT_TYPE},
    },
    AppState,
};

/// Export the (optionally filtered) job list as XLSX
#[utoipa::path(
    get,
    path = "/api/jobs/export",
    params(
        ("status" = Option<String>, Query, description = "Restrict to one status"),
        ("company" = Option<String>, Query, description = "Case-insensitive company substring"),
        ("resume_version" = Option<String>, Query, description = "Restrict to one resume version")
    ),
    responses(
        (status = 200, description = "XLSX workbook")
    )
)]
pub async fn export_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list(query).await?;
    let metrics = AnalyticsService::compute(&jobs);
    let buffer = ExportService::generate_jobs_xlsx(&jobs, &metrics)?;

    let filename = format!("job_applications_{}.xlsx", chrono::Utc::now().format("%Y%m%d"));
    let disposition = format!("attachment; filename=\"{}\"", filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    ))
}
