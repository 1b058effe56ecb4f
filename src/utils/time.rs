use chrono::{DateTime, Duration, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Whole days from `from` to `to`, rounded up. Negative when `to` precedes `from`.
pub fn elapsed_days_ceil(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let millis = (to - from).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// "YYYY-MM" bucket key.
pub fn month_key(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m").to_string()
}

pub fn days_before(dt: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    dt - Duration::days(days)
}

pub fn days_after(dt: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    dt + Duration::days(days)
}
