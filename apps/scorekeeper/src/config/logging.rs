use std::env::{self, VarError};
use std::str::FromStr;

use crate::error::AppError;

pub const LOG_FORMAT_VAR: &str = "SCOREKEEPER_LOG_FORMAT";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(AppError::config(format!(
                "{LOG_FORMAT_VAR} must be 'json' or 'pretty', got '{other}'"
            ))),
        }
    }
}

impl LogFormat {
    pub fn from_env() -> Result<Self, AppError> {
        match env::var(LOG_FORMAT_VAR) {
            Ok(value) => value.parse(),
            Err(VarError::NotPresent) => Ok(LogFormat::default()),
            Err(e) => Err(e.into()),
        }
    }
}
