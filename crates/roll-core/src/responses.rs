//! Request and response bodies exchanged with the attendance API.

use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Generic `{message}` body returned by several endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body shape: `{detail}`. Only string details are surfaced.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.detail.as_str().filter(|s| !s.trim().is_empty())
    }
}

/// Bearer token returned by `/token` and `/api/impersonate/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// JSON body for enroll and unenroll.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrollmentRequest {
    pub user_id: i64,
    pub lesson_id: i64,
}

/// Body for lesson create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonInput {
    pub title: String,
    pub description: Option<String>,
}

/// Body for user creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Success body of the attendance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceMark {
    pub similarity: f64,
    #[serde(default)]
    pub lesson_id: Option<i64>,
    #[serde(default)]
    pub id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_exposes_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"bad input"}"#).expect("parse");
        assert_eq!(body.message(), Some("bad input"));
    }

    #[test]
    fn error_body_ignores_structured_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#)
                .expect("parse");
        assert_eq!(body.message(), None);
    }

    #[test]
    fn enrollment_request_serializes_both_ids() {
        let json = serde_json::to_value(EnrollmentRequest {
            user_id: 4,
            lesson_id: 9,
        })
        .expect("serialize");
        assert_eq!(json, serde_json::json!({"user_id": 4, "lesson_id": 9}));
    }
}
