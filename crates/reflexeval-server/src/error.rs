//! HTTP mapping of domain errors.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reflexeval_core::{ErrorKind, ReflexError};
use serde_json::{Value, json};

/// A [`ReflexError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub ReflexError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        status_for(self.0.kind())
    }
}

impl From<ReflexError> for ApiError {
    fn from(err: ReflexError) -> Self {
        Self(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(ReflexError::invalid_input(rejection.body_text()))
    }
}

/// Status code returned for each error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::IndexOutOfRange | ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::UnknownPlan => StatusCode::NOT_FOUND,
        ErrorKind::Config | ErrorKind::Io | ErrorKind::Serialization | ErrorKind::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `{ "error": { "kind": ..., "message": ... } }`
pub fn error_body(kind: &str, message: &str) -> Value {
    json!({
        "error": {
            "kind": kind,
            "message": message,
        }
    })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();
        if self.0.is_client_error() {
            tracing::warn!(kind = %self.0.kind(), "{}", message);
        } else {
            tracing::error!(kind = %self.0.kind(), "{}", message);
        }
        (status, Json(error_body(self.0.kind().as_str(), &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::IndexOutOfRange), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::InvalidInput), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::UnknownPlan), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorKind::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = error_body("UnknownPlan", "Unknown plan: 'x'");
        assert_eq!(body["error"]["kind"], "UnknownPlan");
        assert_eq!(body["error"]["message"], "Unknown plan: 'x'");
    }
}
