use thiserror::Error;

use crate::errors::domain::DomainError;

/// Error surfaced by the command line binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(DomainError),
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn not_found(detail: String) -> Self {
        Self::NotFound { detail }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Domain(DomainError::Validation(..)) => 2,
            AppError::Domain(DomainError::NotFound(..)) | AppError::NotFound { .. } => 3,
            AppError::Config { .. } => 78,
            AppError::Internal { .. } => 1,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_, detail) => AppError::NotFound { detail },
            other => AppError::Domain(other),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("environment variable is unreadable: {e}"))
    }
}
