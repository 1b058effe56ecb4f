use crate::dto::interview_dto::{CreateInterviewPayload, InterviewListQuery, UpdateInterviewPayload};
use crate::error::{Error, Result};
use crate::models::interview::{
    Interview, InterviewResult, UpcomingInterview, DEFAULT_DURATION_MINUTES, DEFAULT_LOCATION,
};
use crate::utils::time::days_after;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const INTERVIEW_COLUMNS: &str = "id, job_id, interview_type, scheduled_date, duration_minutes, interviewer_name, interviewer_title, interviewer_email, location, meeting_link, questions, notes, feedback, result, prep_notes, created_at, updated_at";

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateInterviewPayload) -> Result<Interview> {
        let job_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1)")
                .bind(payload.job_id)
                .fetch_one(&self.pool)
                .await?;
        if !job_exists {
            return Err(Error::BadRequest(format!(
                "Job {} does not exist",
                payload.job_id
            )));
        }

        let location = payload
            .location
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        let query = format!(
            r#"
            INSERT INTO interviews (
                id, job_id, interview_type, scheduled_date, duration_minutes,
                interviewer_name, interviewer_title, interviewer_email, location,
                meeting_link, questions, notes, feedback, result, prep_notes
            ) VALUES (
                $1,$2,$3,$4,$5,
                $6,$7,$8,$9,
                $10,$11,$12,$13,$14,$15
            )
            RETURNING {}
            "#,
            INTERVIEW_COLUMNS
        );

        let interview = sqlx::query_as::<_, Interview>(&query)
            .bind(Uuid::new_v4())
            .bind(payload.job_id)
            .bind(payload.interview_type.trim())
            .bind(payload.scheduled_date)
            .bind(payload.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES))
            .bind(payload.interviewer_name.unwrap_or_default())
            .bind(payload.interviewer_title.unwrap_or_default())
            .bind(payload.interviewer_email.unwrap_or_default())
            .bind(location)
            .bind(payload.meeting_link.unwrap_or_default())
            .bind(payload.questions)
            .bind(payload.notes.unwrap_or_default())
            .bind(payload.feedback.unwrap_or_default())
            .bind(payload.result.as_str())
            .bind(payload.prep_notes.unwrap_or_default())
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(interview_id = %interview.id, job_id = %interview.job_id, "Interview scheduled");
        Ok(interview)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateInterviewPayload) -> Result<Interview> {
        let query = format!(
            r#"
            UPDATE interviews
            SET
                interview_type = COALESCE($2, interview_type),
                scheduled_date = COALESCE($3, scheduled_date),
                duration_minutes = COALESCE($4, duration_minutes),
                interviewer_name = COALESCE($5, interviewer_name),
                interviewer_title = COALESCE($6, interviewer_title),
                interviewer_email = COALESCE($7, interviewer_email),
                location = COALESCE($8, location),
                meeting_link = COALESCE($9, meeting_link),
                questions = COALESCE($10, questions),
                notes = COALESCE($11, notes),
                feedback = COALESCE($12, feedback),
                result = COALESCE($13, result),
                prep_notes = COALESCE($14, prep_notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            INTERVIEW_COLUMNS
        );

        sqlx::query_as::<_, Interview>(&query)
            .bind(id)
            .bind(payload.interview_type)
            .bind(payload.scheduled_date)
            .bind(payload.duration_minutes)
            .bind(payload.interviewer_name)
            .bind(payload.interviewer_title)
            .bind(payload.interviewer_email)
            .bind(payload.location)
            .bind(payload.meeting_link)
            .bind(payload.questions)
            .bind(payload.notes)
            .bind(payload.feedback)
            .bind(payload.result.map(InterviewResult::as_str))
            .bind(payload.prep_notes)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))
    }

    /// Earliest first.
    pub async fn list(&self, query: InterviewListQuery) -> Result<Vec<Interview>> {
        let mut filters = Vec::new();
        let mut next_arg = 1;

        if query.job_id.is_some() {
            filters.push(format!("job_id = ${}", next_arg));
            next_arg += 1;
        }
        if query.interview_type.is_some() {
            filters.push(format!("interview_type = ${}", next_arg));
            next_arg += 1;
        }
        if query.result.is_some() {
            filters.push(format!("result = ${}", next_arg));
        }

        let where_clause = if filters.is_empty() {
            "".to_string()
        } else {
            format!("WHERE {}", filters.join(" AND "))
        };

        let items_query = format!(
            "SELECT {} FROM interviews {} ORDER BY scheduled_date ASC",
            INTERVIEW_COLUMNS, where_clause
        );

        let mut statement = sqlx::query_as::<_, Interview>(&items_query);
        if let Some(job_id) = query.job_id {
            statement = statement.bind(job_id);
        }
        if let Some(interview_type) = query.interview_type {
            statement = statement.bind(interview_type);
        }
        if let Some(result) = query.result {
            statement = statement.bind(result);
        }

        Ok(statement.fetch_all(&self.pool).await?)
    }

    pub async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<Interview>> {
        self.list(InterviewListQuery {
            job_id: Some(job_id),
            ..Default::default()
        })
        .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Interview> {
        let query = format!("SELECT {} FROM interviews WHERE id = $1", INTERVIEW_COLUMNS);
        sqlx::query_as::<_, Interview>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Interview not found".to_string()));
        }
        Ok(())
    }

    /// Pending interviews between `now` and `now + horizon_days`, with their job.
    pub async fn upcoming(&self, now: DateTime<Utc>, horizon_days: i64) -> Result<Vec<UpcomingInterview>> {
        let columns = INTERVIEW_COLUMNS
            .split(", ")
            .map(|c| format!("i.{}", c))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            r#"
            SELECT {}, j.company, j.position
            FROM interviews i
            JOIN jobs j ON j.id = i.job_id
            WHERE i.scheduled_date >= $1
              AND i.scheduled_date <= $2
              AND i.result = $3
            ORDER BY i.scheduled_date ASC
            "#,
            columns
        );

        let items = sqlx::query_as::<_, UpcomingInterview>(&query)
            .bind(now)
            .bind(days_after(now, horizon_days))
            .bind(InterviewResult::Pending.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    pub async fn list_all(&self) -> Result<Vec<Interview>> {
        self.list(InterviewListQuery::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::database::pool::{create_pool, run_migrations};
    use crate::dto::job_dto::CreateJobPayload;
    use crate::models::job::JobStatus;
    use crate::services::job_service::JobService;
    use crate::utils::time::now;
    use chrono::Duration;
    use std::env;

    async fn setup_test_db() -> PgPool {
        dotenvy::dotenv().ok();
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = create_pool(&Config::for_database(database_url))
            .await
            .expect("Failed to create test pool");
        run_migrations(&pool).await.expect("Failed to run migrations");
        pool
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_interview_lifecycle_and_upcoming() {
        let pool = setup_test_db().await;
        let jobs = JobService::new(pool.clone());
        let service = InterviewService::new(pool);

        let job = jobs
            .create(CreateJobPayload {
                company: format!("Globex-{}", Uuid::new_v4()),
                position: "SRE".into(),
                location: "Berlin".into(),
                job_url: None,
                description: None,
                salary: None,
                status: JobStatus::Technical,
                applied_date: None,
                last_activity: None,
                resume_version: None,
                notes: None,
                contact_name: None,
                contact_email: None,
                contact_phone: None,
                follow_up_date: None,
                response_received: true,
            })
            .await
            .unwrap();

        let interview = service
            .create(CreateInterviewPayload {
                job_id: job.id,
                interview_type: "Technical".into(),
                scheduled_date: now() + Duration::days(2),
                duration_minutes: None,
                interviewer_name: None,
                interviewer_title: None,
                interviewer_email: None,
                location: None,
                meeting_link: None,
                questions: vec!["Design a URL shortener".into()],
                notes: None,
                feedback: None,
                result: InterviewResult::Pending,
                prep_notes: None,
            })
            .await
            .unwrap();
        assert_eq!(interview.duration_minutes, 60);
        assert_eq!(interview.location, "Remote");
        assert_eq!(interview.questions, vec!["Design a URL shortener".to_string()]);

        let upcoming = service.upcoming(now(), 7).await.unwrap();
        let found = upcoming
            .iter()
            .find(|u| u.interview.id == interview.id)
            .expect("interview should be upcoming");
        assert_eq!(found.company, job.company);

        let updated = service
            .update(
                interview.id,
                UpdateInterviewPayload {
                    result: Some(InterviewResult::Passed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.result, "Passed");
        assert_eq!(service.list_for_job(job.id).await.unwrap().len(), 1);

        jobs.delete(job.id).await.unwrap();
        assert!(matches!(
            service.get_by_id(interview.id).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_create_for_missing_job_is_rejected() {
        let service = InterviewService::new(setup_test_db().await);
        let err = service
            .create(CreateInterviewPayload {
                job_id: Uuid::new_v4(),
                interview_type: "Phone".into(),
                scheduled_date: now(),
                duration_minutes: Some(30),
                interviewer_name: None,
                interviewer_title: None,
                interviewer_email: None,
                location: None,
                meeting_link: None,
                questions: vec![],
                notes: None,
                feedback: None,
                result: InterviewResult::Pending,
                prep_notes: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }
}
