//! The uniform `{ success, message }` result returned by every action
//! (form submission, admin team edits).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::inquiry::FieldErrors;

pub const MSG_INVALID_DATA: &str = "Invalid data provided.";
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    /// Field-level validation messages, present only on validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
    #[serde(skip)]
    status: StatusCode,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
            status: StatusCode::OK,
        }
    }

    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: MSG_INVALID_DATA.to_string(),
            errors: Some(errors.into_map()),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
            status: StatusCode::NOT_FOUND,
        }
    }

    /// A failure whose cause stays in the server log.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
