//! Mapping of domain failures to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use todo_core::{ErrorKind, TodoError};

/// Message returned for every failure the client cannot act on.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

/// A [`TodoError`] on its way out of the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(pub TodoError);

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(TodoError::invalid_input("body").with_reason(rejection.body_text()))
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self.0.kind() {
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, self.0.to_string()),
            ErrorKind::Domain => (StatusCode::BAD_REQUEST, self.0.to_string()),
            ErrorKind::Unexpected => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UNEXPECTED_MESSAGE.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        match self.0.kind() {
            ErrorKind::NotFound | ErrorKind::Domain => warn!("{status}: {}", self.0),
            ErrorKind::Unexpected => error!("Unhandled error: {:?}", self.0),
        }
        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError(TodoError::not_found("abc"));
        assert_eq!(
            not_found.status_and_message(),
            (
                StatusCode::NOT_FOUND,
                "TodoItem with ID abc was not found.".to_string()
            )
        );

        let invalid = ApiError(TodoError::invalid_input("title").with_reason("must not be empty"));
        assert_eq!(invalid.status_and_message().0, StatusCode::BAD_REQUEST);

        let operation = ApiError(TodoError::operation("Failed to update todo item with ID x"));
        assert_eq!(
            operation.status_and_message(),
            (
                StatusCode::BAD_REQUEST,
                "Failed to update todo item with ID x".to_string()
            )
        );
    }

    #[test]
    fn test_unexpected_hides_detail() {
        let err = ApiError(TodoError::Configuration {
            message: "secret detail".to_string(),
        });
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, UNEXPECTED_MESSAGE);
    }
}
