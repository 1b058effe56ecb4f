use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::dto::interview_dto::CreateInterviewPayload;
use crate::dto::job_dto::CreateJobPayload;
use crate::models::interview::InterviewResult;
use crate::models::job::JobStatus;

pub const DEFAULT_SEED_COUNT: usize = 1000;

const APPLIED_WINDOW_DAYS: i64 = 90;
const FOLLOW_UP_WINDOW_DAYS: i64 = 30;
const INTERVIEW_PAST_DAYS: i64 = 60;
const INTERVIEW_FUTURE_DAYS: i64 = 14;
const INTERVIEWED_SHARE: f64 = 0.3;
const MAX_INTERVIEWS_PER_JOB: usize = 4;

const COMPANIES: &[&str] = &[
    "Google", "Microsoft", "Amazon", "Apple", "Meta", "Netflix", "Tesla", "Uber", "Airbnb",
    "Spotify", "Salesforce", "Adobe", "Oracle", "IBM", "Intel", "Nvidia", "PayPal", "Square",
    "Stripe", "Twilio", "Slack", "Zoom", "Dropbox", "Twitter", "LinkedIn", "Pinterest",
    "Snapchat", "Reddit", "GitHub", "GitLab",
];

const POSITIONS: &[&str] = &[
    "Software Engineer",
    "Senior Software Engineer",
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "DevOps Engineer",
    "Data Scientist",
    "Machine Learning Engineer",
    "Product Manager",
    "Technical Program Manager",
    "QA Engineer",
    "Mobile Developer",
    "Cloud Architect",
    "Security Engineer",
    "Site Reliability Engineer",
];

const LOCATIONS: &[&str] = &[
    "San Francisco, CA", "New York, NY", "Seattle, WA", "Austin, TX", "Boston, MA",
    "Los Angeles, CA", "Chicago, IL", "Denver, CO", "Portland, OR", "Remote", "San Jose, CA",
    "Washington, DC", "Atlanta, GA", "Miami, FL", "Dallas, TX",
];

const RESUME_VERSIONS: &[&str] = &[
    "default",
    "frontend-focused",
    "backend-focused",
    "fullstack",
    "python-heavy",
    "java-heavy",
];

const INTERVIEW_TYPES: &[&str] = &["Phone", "Technical", "Onsite", "Final"];
const INTERVIEW_DURATIONS: &[i32] = &[30, 45, 60, 90, 120];
const INTERVIEWER_TITLES: &[&str] = &[
    "Engineering Manager",
    "Senior Engineer",
    "Tech Lead",
    "Director",
    "VP Engineering",
];

const QUESTIONS: &[&str] = &[
    "Tell me about yourself",
    "Why do you want to work here?",
    "Describe a challenging project",
    "How do you handle conflicts?",
    "Where do you see yourself in 5 years?",
    "Reverse a linked list",
    "Implement a binary search",
    "Design a URL shortener",
    "Explain REST vs GraphQL",
    "What is your biggest weakness?",
    "Describe your experience with cloud technologies",
    "How would you optimize a slow database query?",
    "Explain the difference between SQL and NoSQL",
    "Design a parking lot system",
    "Implement a LRU cache",
];

/// An interview waiting for the id of the job it belongs to.
#[derive(Debug, Clone)]
pub struct SeedInterview {
    pub job_index: usize,
    pub payload: CreateInterviewPayload,
}

impl SeedInterview {
    pub fn for_job(self, job_id: Uuid) -> CreateInterviewPayload {
        CreateInterviewPayload {
            job_id,
            ..self.payload
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub jobs: Vec<CreateJobPayload>,
    pub interviews: Vec<SeedInterview>,
}

pub struct SeedService;

impl SeedService {
    /// Generates `count` applications and interviews for the first ~30 % of them.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, count: usize) -> SeedData {
        let jobs: Vec<CreateJobPayload> = (0..count).map(|i| random_job(rng, now, i)).collect();

        let interviewed = (count as f64 * INTERVIEWED_SHARE).floor() as usize;
        let mut interviews = Vec::new();
        for job_index in 0..interviewed {
            let rounds = rng.gen_range(1..=MAX_INTERVIEWS_PER_JOB);
            for round in 0..rounds {
                interviews.push(SeedInterview {
                    job_index,
                    payload: random_interview(rng, now, round),
                });
            }
        }

        SeedData { jobs, interviews }
    }
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn days_ago<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, window: i64) -> DateTime<Utc> {
    now - Duration::days(rng.gen_range(0..window))
}

fn random_job<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, index: usize) -> CreateJobPayload {
    let applied_date = days_ago(rng, now, APPLIED_WINDOW_DAYS);
    let status = *pick(rng, &JobStatus::ALL);
    let response_received = status != JobStatus::Applied || rng.gen_bool(0.3);

    let last_activity = if response_received {
        let since_applied = (now - applied_date).num_days();
        applied_date + Duration::days(rng.gen_range(0..=since_applied))
    } else {
        applied_date
    };

    let low = 80 + rng.gen_range(0..120);
    let high = 150 + rng.gen_range(0..150);

    CreateJobPayload {
        company: pick(rng, COMPANIES).to_string(),
        position: pick(rng, POSITIONS).to_string(),
        location: pick(rng, LOCATIONS).to_string(),
        job_url: Some(format!("https://example.com/jobs/{}", index)),
        description: Some(format!(
            "Exciting opportunity for a {} to join our team and work on cutting-edge projects.",
            pick(rng, POSITIONS)
        )),
        salary: Some(format!("${}k - ${}k", low, high)),
        status,
        applied_date: Some(applied_date),
        last_activity: Some(last_activity),
        resume_version: Some(pick(rng, RESUME_VERSIONS).to_string()),
        notes: rng
            .gen_bool(0.5)
            .then(|| "Great company culture, interesting tech stack".to_string()),
        contact_name: rng.gen_bool(0.7).then(|| format!("Recruiter {}", index)),
        contact_email: rng
            .gen_bool(0.7)
            .then(|| format!("recruiter{}@example.com", index)),
        contact_phone: rng
            .gen_bool(0.5)
            .then(|| format!("555-{:04}", rng.gen_range(0..10_000))),
        follow_up_date: rng
            .gen_bool(0.4)
            .then(|| days_ago(rng, now, FOLLOW_UP_WINDOW_DAYS)),
        response_received,
    }
}

fn random_interview<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    round: usize,
) -> CreateInterviewPayload {
    let offset_days = rng.gen_range(-INTERVIEW_PAST_DAYS..=INTERVIEW_FUTURE_DAYS);
    let scheduled_date = now + Duration::days(offset_days) + Duration::hours(rng.gen_range(0..8));

    let result = if scheduled_date > now {
        InterviewResult::Pending
    } else {
        *pick(rng, &InterviewResult::ALL)
    };

    let question_count = rng.gen_range(1..=5);
    let questions = (0..question_count)
        .map(|_| pick(rng, QUESTIONS).to_string())
        .collect();

    CreateInterviewPayload {
        job_id: Uuid::nil(),
        interview_type: INTERVIEW_TYPES[round.min(INTERVIEW_TYPES.len() - 1)].to_string(),
        scheduled_date,
        duration_minutes: Some(*pick(rng, INTERVIEW_DURATIONS)),
        interviewer_name: Some(format!("Interviewer {}", rng.gen_range(0..1000))),
        interviewer_title: Some(pick(rng, INTERVIEWER_TITLES).to_string()),
        interviewer_email: Some(format!("interviewer{}@example.com", rng.gen_range(0..1000))),
        location: Some(if rng.gen_bool(0.5) {
            "Remote".to_string()
        } else {
            pick(rng, LOCATIONS).to_string()
        }),
        meeting_link: rng
            .gen_bool(0.7)
            .then(|| format!("https://zoom.us/j/{}", rng.gen_range(0..1_000_000_000u64))),
        questions,
        notes: rng
            .gen_bool(0.5)
            .then(|| "Interview went well, good rapport with interviewer".to_string()),
        feedback: rng
            .gen_bool(0.3)
            .then(|| "Strong candidate, recommend moving forward".to_string()),
        result,
        prep_notes: rng
            .gen_bool(0.6)
            .then(|| "Review STAR stories, practice system design".to_string()),
    }
}
