use crate::models::ErrorResponse;
use actix_web::{HttpResponse, ResponseError};
use ipstrat_agents::{ProviderFailure, ValidationError, QUOTA_MESSAGE};
use thiserror::Error;

/// Longest provider error text echoed back from `/analyze`
pub const MAX_ERROR_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No provider client was configured at startup
    #[error("{0}")]
    Unavailable(&'static str),

    #[error("No message provided")]
    MissingMessage,

    #[error("{0}")]
    MissingFields(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{}", QUOTA_MESSAGE)]
    QuotaExceeded,

    #[error("{0}")]
    Provider(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),
}

impl ApiError {
    /// Quota failures keep their own status; the rest become a chat error
    pub fn from_chat_failure(failure: ProviderFailure) -> Self {
        if failure.is_quota() {
            ApiError::QuotaExceeded
        } else {
            ApiError::Provider(failure.to_string())
        }
    }

    pub fn from_analysis_failure(failure: ProviderFailure) -> Self {
        if failure.is_quota() {
            ApiError::QuotaExceeded
        } else {
            let detail: String = failure.to_string().chars().take(MAX_ERROR_CHARS).collect();
            ApiError::Analysis(detail)
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let mut body = ErrorResponse::new(self.to_string());

        match self {
            ApiError::MissingFields(validation) => {
                body.missing_fields = validation.missing.iter().map(|f| f.to_string()).collect();
                HttpResponse::BadRequest().json(body)
            }
            ApiError::MissingMessage | ApiError::InvalidBody(_) => {
                HttpResponse::BadRequest().json(body)
            }
            ApiError::QuotaExceeded => HttpResponse::TooManyRequests().json(body),
            ApiError::Unavailable(_) | ApiError::Provider(_) | ApiError::Analysis(_) => {
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
