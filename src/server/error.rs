use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::db::{StoreError, StoreResult};

/// Errors a handler can answer with. Every one of them is rendered as
/// `{"success": false, "error": <code>, "message": <text>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request error")]
    BadRequest,
    #[error("Resource not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Unprocessable entity")]
    Unprocessable,
    #[error("An error has occured, please try again")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Collapses a store failure into the fixed status a route answers with.
pub trait OrApiError<T> {
    fn or_api(self, error: ApiError) -> Result<T, ApiError>;
}

impl<T> OrApiError<T> for StoreResult<T> {
    fn or_api(self, error: ApiError) -> Result<T, ApiError> {
        self.map_err(|e| {
            match &e {
                StoreError::NotFound => tracing::info!(status = %error.status(), "row not found"),
                _ => tracing::error!(error = %e, status = %error.status(), "store operation failed"),
            }
            error
        })
    }
}
