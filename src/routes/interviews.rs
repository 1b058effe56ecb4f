use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::interview_dto::{CreateInterviewPayload, InterviewListQuery, UpdateInterviewPayload},
    error::Result,
    services::analytics_service::AnalyticsService,
    utils::time::now,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/interviews",
    params(
        ("job_id" = Option<Uuid>, Query, description = "Owning job"),
        ("type" = Option<String>, Query, description = "Interview type"),
        ("result" = Option<String>, Query, description = "Pending, Passed or Failed")
    ),
    responses(
        (status = 200, description = "Interviews, earliest first", body = [Interview])
    )
)]
#[axum::debug_handler]
pub async fn list_interviews(
    State(state): State<AppState>,
    Query(query): Query<InterviewListQuery>,
) -> Result<impl IntoResponse> {
    let interviews = state.interview_service.list(query).await?;
    Ok(Json(interviews))
}

#[utoipa::path(
    post,
    path = "/api/interviews",
    request_body = CreateInterviewPayload,
    responses(
        (status = 201, description = "Interview scheduled", body = Interview),
        (status = 400, description = "Invalid payload or unknown job")
    )
)]
#[axum::debug_handler]
pub async fn create_interview(
    State(state): State<AppState>,
    Json(payload): Json<CreateInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interview_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(interview)))
}

#[utoipa::path(
    get,
    path = "/api/interviews/{id}",
    params(
        ("id" = Uuid, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "Interview found", body = Interview),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.get_by_id(id).await?;
    Ok(Json(interview))
}

#[utoipa::path(
    put,
    path = "/api/interviews/{id}",
    params(
        ("id" = Uuid, Path, description = "Interview ID")
    ),
    request_body = UpdateInterviewPayload,
    responses(
        (status = 200, description = "Interview updated", body = Interview),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn update_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interview_service.update(id, payload).await?;
    Ok(Json(interview))
}

#[utoipa::path(
    delete,
    path = "/api/interviews/{id}",
    params(
        ("id" = Uuid, Path, description = "Interview ID")
    ),
    responses(
        (status = 204, description = "Interview deleted"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.interview_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/interviews/job/{job_id}",
    params(
        ("job_id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Interviews of one job", body = [Interview])
    )
)]
#[axum::debug_handler]
pub async fn interviews_for_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let interviews = state.interview_service.list_for_job(job_id).await?;
    Ok(Json(interviews))
}

#[utoipa::path(
    get,
    path = "/api/interviews/calendar/upcoming",
    responses(
        (status = 200, description = "Pending interviews inside the upcoming window", body = [UpcomingInterview])
    )
)]
#[axum::debug_handler]
pub async fn upcoming_interviews(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let interviews = state
        .interview_service
        .upcoming(now(), state.config.upcoming_interview_days)
        .await?;
    Ok(Json(interviews))
}

#[utoipa::path(
    get,
    path = "/api/interviews/stats/overview",
    responses(
        (status = 200, description = "Interview counts by type and result", body = InterviewStats)
    )
)]
#[axum::debug_handler]
pub async fn interview_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let interviews = state.interview_service.list_all().await?;
    Ok(Json(AnalyticsService::interview_stats(&interviews)))
}
