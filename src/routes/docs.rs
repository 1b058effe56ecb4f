use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use super::{analytics, export, health, interviews, jobs};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        jobs::list_jobs,
        jobs::create_job,
        jobs::get_job,
        jobs::update_job,
        jobs::delete_job,
        jobs::job_stats,
        jobs::follow_up_needed,
        export::export_jobs,
        interviews::list_interviews,
        interviews::create_interview,
        interviews::get_interview,
        interviews::update_interview,
        interviews::delete_interview,
        interviews::interviews_for_job,
        interviews::upcoming_interviews,
        interviews::interview_stats,
        analytics::get_analytics,
        analytics::get_dashboard,
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
