use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{CreateJobPayload, JobListQuery, UpdateJobPayload},
    error::Result,
    services::analytics_service::AnalyticsService,
    utils::time::now,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("status" = Option<String>, Query, description = "Exact status label"),
        ("company" = Option<String>, Query, description = "Case-insensitive company substring"),
        ("resume_version" = Option<String>, Query, description = "Exact resume version tag")
    ),
    responses(
        (status = 200, description = "Job applications, newest first", body = [Job])
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list(query).await?;
    Ok(Json(jobs))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job application created", body = Job),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job application found", body = Job),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id).await?;
    Ok(Json(job))
}

#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job application updated", body = Job),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.update(id, payload).await?;
    Ok(Json(job))
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 204, description = "Job application and its interviews deleted"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/jobs/stats/overview",
    responses(
        (status = 200, description = "Derived metrics over every job", body = JobAnalytics)
    )
)]
#[axum::debug_handler]
pub async fn job_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list(JobListQuery::default()).await?;
    Ok(Json(AnalyticsService::compute(&jobs)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/followup/needed",
    responses(
        (status = 200, description = "Unanswered applications due for a follow-up", body = [Job])
    )
)]
#[axum::debug_handler]
pub async fn follow_up_needed(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state
        .job_service
        .needing_follow_up(now(), state.config.follow_up_after_days)
        .await?;
    Ok(Json(jobs))
}
