use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

pub const CREATE_FAILED: &str =
    "Function CreateEmployee encountered a problem in saving new Employee record";
pub const UPDATE_FAILED: &str =
    "Function UpdateEmployee encountered a problem in updating Employee record";

/// Outcome of a rejected request, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Missing field or malformed email.
    Validation(String),
    /// Unknown or blank id on update.
    NotFound,
    /// The store or the event topic failed. Carries the client-facing message only.
    Infrastructure(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::NotFound => write!(f, "Not Found"),
            AppError::Infrastructure(msg) => write!(f, "Infrastructure Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Infrastructure(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) | AppError::Infrastructure(msg) => HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(msg.clone()),
            AppError::NotFound => HttpResponse::NotFound().finish(),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    Database(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

#[derive(Debug)]
pub enum PublishError {
    Transport(String),
    Rejected { status: u16, body: String },
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishError::Transport(msg) => write!(f, "Event Grid Error: {}", msg),
            PublishError::Rejected { status, body } => {
                write!(f, "Event Grid rejected event ({}): {}", status, body)
            }
        }
    }
}

impl std::error::Error for PublishError {}

impl From<reqwest::Error> for PublishError {
    fn from(err: reqwest::Error) -> Self {
        PublishError::Transport(err.to_string())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, reason } => write!(f, "{} is invalid: {}", key, reason),
        }
    }
}

impl std::error::Error for ConfigError {}
