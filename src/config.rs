use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub client_url: Option<String>,
    pub api_rps: u32,
    pub follow_up_after_days: i64,
    pub upcoming_interview_days: i64,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:5000"),
            database_url: get_env("DATABASE_URL")?,
            db_max_connections: get_env_parse_or("DB_MAX_CONNECTIONS", 10)?,
            client_url: env::var("CLIENT_URL").ok().filter(|v| !v.trim().is_empty()),
            api_rps: get_env_parse_or("API_RPS", 100)?,
            follow_up_after_days: get_env_parse_or("FOLLOW_UP_AFTER_DAYS", 7)?,
            upcoming_interview_days: get_env_parse_or("UPCOMING_INTERVIEW_DAYS", 7)?,
            log_format: get_env_parse_or("LOG_FORMAT", LogFormat::Text)?,
        })
    }

    /// Settings for in-process tests and tools that never open a socket.
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            server_address: "127.0.0.1:0".to_string(),
            database_url: database_url.into(),
            db_max_connections: 5,
            client_url: None,
            api_rps: 100,
            follow_up_after_days: 7,
            upcoming_interview_days: 7,
            log_format: LogFormat::Text,
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
