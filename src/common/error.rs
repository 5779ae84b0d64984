use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    // Body or path the extractors refused, with the status they chose
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    // Constraint violations that no route interprets end up here too
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("internal server error: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// The 404 raised when a lookup by primary key finds nothing.
    pub fn record_not_found(key: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("Can't find record with primary key {key}"))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } => *status,
            AppError::Store(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Rejected { message: msg, .. } => msg.clone(),

            // The detail goes to the log, never to the client.
            e => {
                tracing::error!("Internal server error: {}", e);
                "Internal Server Error".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16(),
            }
        }));
        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_is_404_and_names_the_key() {
        let err = AppError::record_not_found("INVALID_CODE");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Can't find record with primary key INVALID_CODE");
    }

    #[test]
    fn bad_request_is_400() {
        let err = AppError::BadRequest("duplicate".into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn uninterpreted_constraint_violation_is_500() {
        let err: AppError = StoreError::UniqueViolation {
            constraint: "companies_pkey".into(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn rejections_keep_their_status() {
        let err = AppError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".into(),
        };
        assert_eq!(err.into_response().status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn anyhow_errors_are_500() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
