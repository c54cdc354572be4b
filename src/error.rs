//! Request-level error taxonomy
//!
//! Every failure a handler or the lifecycle service can produce maps to
//! one variant here; all of them are terminal for the request — nothing
//! is retried or queued. Store failures are logged and surfaced as a
//! generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;

use crate::entities::connection_requests::ConnectionStatus;

#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed required field
    Validation(String),
    /// Operation forbidden by business rule (e.g. self-connection)
    InvalidOperation(String),
    /// Acting user could not be resolved
    Unauthorized,
    /// Ownership or role violation
    Forbidden(String),
    /// Referenced id absent
    NotFound(&'static str),
    /// Duplicate record or already-resolved request; for duplicate
    /// connection requests the existing request's status is echoed back
    Conflict {
        message: String,
        existing_status: Option<ConnectionStatus>,
    },
    /// Operation disallowed by the current entity status
    InvalidState(String),
    /// Unexpected store failure
    Internal(DbErr),
}

impl ApiError {
    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict {
            message: message.into(),
            existing_status: None,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } | ApiError::InvalidState(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::InvalidOperation(_) => "invalid_operation",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict { .. } => "conflict",
            ApiError::InvalidState(_) => "invalid_state",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::InvalidOperation(msg) => write!(f, "{}", msg),
            ApiError::Unauthorized => write!(f, "Authentication required"),
            ApiError::Forbidden(msg) => write!(f, "{}", msg),
            ApiError::NotFound(what) => write!(f, "{} not found", what),
            ApiError::Conflict { message, .. } => write!(f, "{}", message),
            ApiError::InvalidState(msg) => write!(f, "{}", msg),
            ApiError::Internal(_) => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref err) = self {
            tracing::error!(error = %err, "database operation failed");
        }

        let mut body = json!({
            "error": self.to_string(),
            "code": self.code(),
        });
        if let ApiError::Conflict {
            existing_status: Some(status),
            ..
        } = &self
        {
            body["status"] = json!(status);
        }

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Idea").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("dup").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::InvalidState("funded".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Forbidden("no".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ApiError::NotFound("Business idea").to_string(),
            "Business idea not found"
        );
    }
}
