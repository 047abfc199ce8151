//! Error types for the lending admin server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::{models::report::ReportKind, repository::StoreError};

/// Numeric error codes returned in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    NotAuthorized = 1,
    StoreFailure = 2,
    NotFound = 3,
    ReportFailure = 4,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    /// A report could not be computed because a collection read failed
    #[error("Failed to generate {report}: {source}")]
    ReportGeneration {
        report: ReportKind,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn report(report: ReportKind) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::ReportGeneration { report, source }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorCode::NotAuthorized, msg.clone())
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg.clone())
            }
            AppError::Store(e) => {
                tracing::error!("Record store error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StoreFailure,
                    "Record store error".to_string(),
                )
            }
            AppError::ReportGeneration { report, source } => {
                tracing::error!(report = %report, "Failed to generate {}: {:?}", report, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::ReportFailure,
                    format!("Failed to generate {}", report),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
