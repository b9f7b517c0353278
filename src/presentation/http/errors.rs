//! HTTP error handling and response conversion.
//!
//! Domain failures are mapped to stable machine-readable codes and HTTP
//! status codes here; handlers never build error responses by hand.
//! Infrastructure failures surface as an opaque 500 without internals.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::domain::errors::{DomainError, ValidationCode};

#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Malformed request outside the domain validators (400).
    BadRequest(String),

    /// Missing/invalid identity or ownership mismatch (403).
    Forbidden(String),

    /// Domain validation failure with its machine-readable code (400).
    Validation {
        code: ValidationCode,
        message: String,
    },

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::Validation { code, message } => {
                write!(f, "Validation error ({}): {}", code, message)
            }
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code carried in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation { code, .. } => code.as_str(),
            Self::Internal(_) => "UNEXPECTED",
        }
    }

    /// User-safe message, without implementation details.
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(resource) => format!("{} tidak ditemukan", resource),
            Self::BadRequest(msg) => msg.clone(),
            Self::Forbidden(msg) => msg.clone(),
            Self::Validation { message, .. } => message.clone(),
            Self::Internal(_) => "terjadi kegagalan pada server kami".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        let body = json!({
            "status": "fail",
            "message": self.user_message(),
            "code": self.code(),
        });
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { code, field } => AppError::Validation {
                code,
                message: format!("properti `{}` tidak valid", field),
            },
            DomainError::NotFound(resource) => AppError::NotFound(resource),
            DomainError::Forbidden(msg) => AppError::Forbidden(msg),
            DomainError::Infrastructure(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Internal(msg)
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("record".into()),
            sqlx::Error::PoolTimedOut => {
                tracing::warn!("database connection pool exhausted");
                AppError::Internal("connection pool exhausted".into())
            }
            _ => {
                tracing::error!(database_error = %err);
                AppError::Internal("database error".into())
            }
        }
    }
}
