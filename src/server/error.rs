//! Handler error type and its `{"error": ...}` rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{
    IntoResponse,
    Response,
};
use serde::Serialize;
use thiserror::Error;

use crate::service::ServiceError;

/// Error returned by request handlers. Always rendered as `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or out-of-range request data
    #[error("{0}")]
    Validation(String),

    /// Unknown id or code
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Anything else. The message is logged, never sent.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Service(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to send to clients.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::NotFound(message) => message.clone(),
            Self::Service(ServiceError::Configuration(_)) => {
                "Translation service is not configured".to_string()
            }
            Self::Service(ServiceError::External(_)) => "Translation failed".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Human-readable message
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {self}");
        }

        (status, Json(ErrorBody { error: self.public_message() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::provider::ProviderError;

    #[rstest]
    #[case::validation(ApiError::validation("bad"), StatusCode::BAD_REQUEST, "bad")]
    #[case::not_found(ApiError::not_found("Translation not found"), StatusCode::NOT_FOUND, "Translation not found")]
    #[case::internal(ApiError::Internal("lock poisoned".to_string()), StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")]
    fn status_and_message(#[case] error: ApiError, #[case] status: StatusCode, #[case] message: &str) {
        assert_that!(error.status(), eq(status));
        assert_that!(error.public_message(), eq(message));
    }

    #[rstest]
    fn configuration_error_hides_details() {
        let error = ApiError::from(ServiceError::Configuration(ProviderError::MissingCredential {
            variable: "GOOGLE_TRANSLATE_API_KEY".to_string(),
        }));

        assert_that!(error.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
        assert_that!(error.public_message(), not(contains_substring("GOOGLE_TRANSLATE_API_KEY")));
    }
}
