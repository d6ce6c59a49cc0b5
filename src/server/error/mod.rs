//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by services and controllers. It
//! implements `IntoResponse` so handlers can use `?` and still produce the
//! `{"error": message}` body every endpoint documents.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error. The driver message is logged and returned
    /// to the caller as-is; this service only talks to trusted callers.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Request body could not be read as the expected JSON shape.
    ///
    /// Results in 400 Bad Request carrying the rejection text.
    #[error(transparent)]
    JsonErr(#[from] JsonRejection),

    /// Socket error while binding or serving.
    ///
    /// Only produced during startup and shutdown, never by a request handler.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `JsonErr`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For `DbErr` and `IoErr`, logged at error level
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) | Self::JsonErr(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DbErr(_) | Self::IoErr(_) => {
                tracing::error!("{}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let error = match self {
            Self::JsonErr(rejection) => rejection.body_text(),
            err => err.to_string(),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
