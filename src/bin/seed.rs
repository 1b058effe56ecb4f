use jobtracker_backend::{
    config::Config,
    database::pool::{create_pool, run_migrations},
    dto::job_dto::JobListQuery,
    services::{
        analytics_service::AnalyticsService,
        interview_service::InterviewService,
        job_service::JobService,
        seed_service::{SeedService, DEFAULT_SEED_COUNT},
    },
    utils::time::now,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env()?;

    let count = match std::env::args().nth(1) {
        Some(raw) => raw.parse::<usize>()?,
        None => DEFAULT_SEED_COUNT,
    };

    let pool = create_pool(&config).await?;
    run_migrations(&pool).await?;

    sqlx::query("DELETE FROM interviews").execute(&pool).await?;
    sqlx::query("DELETE FROM jobs").execute(&pool).await?;
    info!("Cleared existing data");

    let data = SeedService::generate(&mut rand::thread_rng(), now(), count);
    let jobs = JobService::new(pool.clone());
    let interviews = InterviewService::new(pool);

    let mut job_ids = Vec::with_capacity(data.jobs.len());
    for payload in data.jobs {
        job_ids.push(jobs.create(payload).await?.id);
    }
    info!("Inserted {} jobs", job_ids.len());

    let mut inserted = 0usize;
    for interview in data.interviews {
        let job_id = job_ids[interview.job_index];
        interviews.create(interview.for_job(job_id)).await?;
        inserted += 1;
    }
    info!("Inserted {} interviews", inserted);

    let metrics = AnalyticsService::compute(&jobs.list(JobListQuery::default()).await?);
    for (status, count) in metrics.status_distribution.iter() {
        info!("  {}: {}", status, count);
    }
    info!(
        response_rate = metrics.response_rate,
        success_rate = metrics.success_rate,
        "Database seeding completed"
    );

    Ok(())
}
