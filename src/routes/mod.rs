pub mod analytics;
pub mod docs;
pub mod export;
pub mod health;
pub mod interviews;
pub mod jobs;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{cors::cors_layer, rate_limit},
    AppState,
};

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application router with CORS, tracing and the `/api` rate limit applied.
pub fn build_router(state: AppState) -> Router {
    let base_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json));

    let api = Router::new()
        .route("/api/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/api/jobs/stats/overview", get(jobs::job_stats))
        .route("/api/jobs/followup/needed", get(jobs::follow_up_needed))
        .route("/api/jobs/export", get(export::export_jobs))
        .route(
            "/api/jobs/:id",
            get(jobs::get_job)
                .put(jobs::update_job)
                .delete(jobs::delete_job),
        )
        .route(
            "/api/interviews",
            get(interviews::list_interviews).post(interviews::create_interview),
        )
        .route(
            "/api/interviews/job/:job_id",
            get(interviews::interviews_for_job),
        )
        .route(
            "/api/interviews/calendar/upcoming",
            get(interviews::upcoming_interviews),
        )
        .route(
            "/api/interviews/stats/overview",
            get(interviews::interview_stats),
        )
        .route(
            "/api/interviews/:id",
            get(interviews::get_interview)
                .put(interviews::update_interview)
                .delete(interviews::delete_interview),
        )
        .route("/api/analytics", get(analytics::get_analytics))
        .route("/api/dashboard", get(analytics::get_dashboard))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(state.config.api_rps),
            rate_limit::rps_middleware,
        ));

    let cors = cors_layer(state.config.client_url.as_deref());

    base_routes
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}
