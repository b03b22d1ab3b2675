//! `AppError` and the JSON error body

use std::collections::HashMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::category::ErrorCategory;
use super::codes::ErrorCode;

/// Request-level error: a code, a message for people, optional details
///
/// Handlers return `AppResult<T>`; the error becomes an [`ErrorBody`] with
/// the status from [`ErrorCode::http_status`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// e.g. `{"id": "s1"}` or `{"fields": ["name", "email"]}`
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a missing-fields error with a static message
    ///
    /// `fields` is the list of required fields, e.g. `["name", "email"]`.
    pub fn required(fields: &[&str]) -> Self {
        let message = match fields {
            [only] => format!("{only} is required"),
            [init @ .., last] => format!("{} and {last} are required", init.join(", ")),
            [] => ErrorCode::RequiredField.message().to_string(),
        };
        Self::with_message(ErrorCode::RequiredField, message).with_detail(
            "fields",
            fields.iter().map(|f| Value::from(*f)).collect::<Vec<_>>(),
        )
    }

    /// "`what` not found" with the generic 404 code
    pub fn not_found(what: impl Into<String>) -> Self {
        let what = what.into();
        Self::with_message(ErrorCode::NotFound, format!("{what} not found")).with_detail("resource", what)
    }

    /// Data file failure; the message is shown to clients as is
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }

    /// Duplicate caller-supplied id (409)
    pub fn already_exists(what: impl Into<String>) -> Self {
        let what = what.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{what} already exists"))
            .with_detail("resource", what)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Body of every error response: `{code, message, details?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "System error");
        }
        (self.http_status(), Json(ErrorBody::from(&self))).into_response()
    }
}

/// Malformed or non-JSON request bodies
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, rejection.body_text())
    }
}
