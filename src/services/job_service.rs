use crate::dto::job_dto::{CreateJobPayload, JobListQuery, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::{normalize_resume_version, Job, JobStatus};
use crate::utils::time::{days_before, now};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const JOB_COLUMNS: &str = "id, company, position, location, job_url, description, salary, status, applied_date, last_activity, resume_version, notes, contact_name, contact_email, contact_phone, follow_up_date, response_received, created_at, updated_at";

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        let applied_date = payload.applied_date.unwrap_or_else(now);
        let last_activity = payload.last_activity.unwrap_or(applied_date);
        let resume_version = normalize_resume_version(payload.resume_version.as_deref());

        let query = format!(
            r#"
            INSERT INTO jobs (
                id, company, position, location, job_url, description, salary,
                status, applied_date, last_activity, resume_version, notes,
                contact_name, contact_email, contact_phone, follow_up_date, response_received
            ) VALUES (
                $1,$2,$3,$4,$5,$6,$7,
                $8,$9,$10,$11,$12,
                $13,$14,$15,$16,$17
            )
            RETURNING {}
            "#,
            JOB_COLUMNS
        );

        let job = sqlx::query_as::<_, Job>(&query)
            .bind(Uuid::new_v4())
            .bind(payload.company.trim())
            .bind(payload.position.trim())
            .bind(payload.location.trim())
            .bind(payload.job_url.unwrap_or_default())
            .bind(payload.description.unwrap_or_default())
            .bind(payload.salary.unwrap_or_default())
            .bind(payload.status.as_str())
            .bind(applied_date)
            .bind(last_activity)
            .bind(resume_version)
            .bind(payload.notes.unwrap_or_default())
            .bind(payload.contact_name.unwrap_or_default())
            .bind(payload.contact_email.unwrap_or_default())
            .bind(payload.contact_phone.unwrap_or_default())
            .bind(payload.follow_up_date)
            .bind(payload.response_received)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(job_id = %job.id, company = %job.company, "Job application created");
        Ok(job)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateJobPayload) -> Result<Job> {
        let resume_version = payload
            .resume_version
            .as_deref()
            .map(|v| normalize_resume_version(Some(v)));

        let query = format!(
            r#"
            UPDATE jobs
            SET
                company = COALESCE($2, company),
                position = COALESCE($3, position),
                location = COALESCE($4, location),
                job_url = COALESCE($5, job_url),
                description = COALESCE($6, description),
                salary = COALESCE($7, salary),
                status = COALESCE($8, status),
                applied_date = COALESCE($9, applied_date),
                last_activity = COALESCE($10, last_activity),
                resume_version = COALESCE($11, resume_version),
                notes = COALESCE($12, notes),
                contact_name = COALESCE($13, contact_name),
                contact_email = COALESCE($14, contact_email),
                contact_phone = COALESCE($15, contact_phone),
                follow_up_date = COALESCE($16, follow_up_date),
                response_received = COALESCE($17, response_received),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            JOB_COLUMNS
        );

        let job = sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(payload.company)
            .bind(payload.position)
            .bind(payload.location)
            .bind(payload.job_url)
            .bind(payload.description)
            .bind(payload.salary)
            .bind(payload.status.map(JobStatus::as_str))
            .bind(payload.applied_date)
            .bind(payload.last_activity)
            .bind(resume_version)
            .bind(payload.notes)
            .bind(payload.contact_name)
            .bind(payload.contact_email)
            .bind(payload.contact_phone)
            .bind(payload.follow_up_date)
            .bind(payload.response_received)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;

        Ok(job)
    }

    /// Newest applications first.
    pub async fn list(&self, query: JobListQuery) -> Result<Vec<Job>> {
        let mut filters = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if let Some(status) = query.status.filter(|s| !s.is_empty()) {
            filters.push(format!("status = ${}", args.len() + 1));
            args.push(status);
        }
        if let Some(company) = query.company.filter(|s| !s.is_empty()) {
            filters.push(format!("company ILIKE ${}", args.len() + 1));
            args.push(format!("%{}%", escape_like(&company)));
        }
        if let Some(resume_version) = query.resume_version.filter(|s| !s.is_empty()) {
            filters.push(format!("resume_version = ${}", args.len() + 1));
            args.push(resume_version);
        }

        let where_clause = if filters.is_empty() {
            "".to_string()
        } else {
            format!("WHERE {}", filters.join(" AND "))
        };

        let items_query = format!(
            "SELECT {} FROM jobs {} ORDER BY applied_date DESC, created_at DESC",
            JOB_COLUMNS, where_clause
        );

        let mut statement = sqlx::query_as::<_, Job>(&items_query);
        for value in &args {
            statement = statement.bind(value);
        }
        let items = statement.fetch_all(&self.pool).await?;

        Ok(items)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Job> {
        let query = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS);
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found".to_string()));
        }
        tracing::info!(job_id = %id, "Job application deleted");
        Ok(())
    }

    pub async fn needing_follow_up(&self, now: DateTime<Utc>, after_days: i64) -> Result<Vec<Job>> {
        let query = format!(
            r#"
            SELECT {}
            FROM jobs
            WHERE status = $1
              AND response_received = FALSE
              AND applied_date <= $2
            ORDER BY applied_date ASC
            "#,
            JOB_COLUMNS
        );

        let items = sqlx::query_as::<_, Job>(&query)
            .bind(JobStatus::Applied.as_str())
            .bind(days_before(now, after_days))
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }
}

/// Escapes LIKE wildcards so the company filter is a plain substring match.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::database::pool::{create_pool, run_migrations};
    use chrono::Duration;
    use dotenvy::dotenv;
    use std::env;

    async fn setup_test_db() -> PgPool {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = create_pool(&Config::for_database(database_url))
            .await
            .expect("Failed to create test pool");
        run_migrations(&pool).await.expect("Failed to run migrations");
        pool
    }

    fn payload(company: &str) -> CreateJobPayload {
        CreateJobPayload {
            company: company.to_string(),
            position: "Backend Engineer".to_string(),
            location: "Remote".to_string(),
            job_url: None,
            description: None,
            salary: None,
            status: JobStatus::Applied,
            applied_date: None,
            last_activity: None,
            resume_version: Some("  ".to_string()),
            notes: None,
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            follow_up_date: None,
            response_received: false,
        }
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%_co\\"), "100\\%\\_co\\\\");
        assert_eq!(escape_like("Acme"), "Acme");
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_job_crud_and_filters() {
        let pool = setup_test_db().await;
        let service = JobService::new(pool);
        let marker = Uuid::new_v4().simple().to_string();
        let company = format!("Initech-{}", marker);

        let created = service.create(payload(&company)).await.unwrap();
        assert_eq!(created.status, "Applied");
        assert_eq!(created.resume_version, "default");
        assert_eq!(created.last_activity, Some(created.applied_date));

        let listed = service
            .list(JobListQuery {
                company: Some(marker.to_uppercase()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        let updated = service
            .update(
                created.id,
                UpdateJobPayload {
                    status: Some(JobStatus::PhoneScreen),
                    response_received: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, "Phone Screen");
        assert!(updated.response_received);
        assert_eq!(updated.company, company);

        service.delete(created.id).await.unwrap();
        assert!(matches!(
            service.get_by_id(created.id).await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            service.delete(created.id).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_needing_follow_up() {
        let pool = setup_test_db().await;
        let service = JobService::new(pool);
        let marker = Uuid::new_v4().simple().to_string();

        let mut stale = payload(&format!("Stale-{}", marker));
        stale.applied_date = Some(now() - Duration::days(10));
        let stale = service.create(stale).await.unwrap();

        let fresh = service
            .create(payload(&format!("Fresh-{}", marker)))
            .await
            .unwrap();

        let due = service.needing_follow_up(now(), 7).await.unwrap();
        assert!(due.iter().any(|j| j.id == stale.id));
        assert!(!due.iter().any(|j| j.id == fresh.id));

        service.delete(stale.id).await.unwrap();
        service.delete(fresh.id).await.unwrap();
    }
}
