//! Face registration and attendance endpoints.
//!
//! Matching happens server-side; the client uploads an image and reports the
//! similarity score it gets back.

use reqwest::Method;
use serde_json::Value;

use roll_auth::Session;
use roll_core::entities::Attendance;

use crate::action::{ActionRequest, FileUpload, Payload, message_field};
use crate::error::ActionError;
use crate::scope::ViewScope;
use crate::ApiClient;

impl ApiClient {
    /// `GET /api/attendance`, optionally narrowed to one lesson client-side.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_json`].
    pub async fn list_attendance(
        &self,
        session: &Session,
        lesson_id: Option<i64>,
        scope: &ViewScope,
    ) -> Result<Vec<Attendance>, ActionError> {
        let mut records: Vec<Attendance> =
            self.fetch_json(session, "/api/attendance", scope).await?;
        if let Some(lesson_id) = lesson_id {
            records.retain(|r| r.lesson_id == lesson_id);
        }
        Ok(records)
    }
}

impl ActionRequest {
    /// `POST /api/users/me/register-face` with the reference image.
    #[must_use]
    pub fn register_face(image: FileUpload) -> Self {
        Self::new(
            Method::POST,
            "/api/users/me/register-face",
            "Face registered",
        )
        .with_payload(Payload::File(image))
    }

    /// `POST /api/attendance/{lesson_id}` with the captured image.
    #[must_use]
    pub fn mark_attendance(lesson_id: i64, image: FileUpload) -> Self {
        Self::new(
            Method::POST,
            format!("/api/attendance/{lesson_id}"),
            "Attendance marked",
        )
        .with_payload(Payload::File(image))
        .with_summary(similarity_message)
    }
}

fn similarity_message(body: &Value) -> Option<String> {
    body.get("similarity")
        .and_then(Value::as_f64)
        .map(|score| format!("Attendance marked (similarity {score:.2})"))
        .or_else(|| message_field(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn similarity_is_reported() {
        assert_eq!(
            similarity_message(&json!({"id": 1, "similarity": 0.8734})).as_deref(),
            Some("Attendance marked (similarity 0.87)")
        );
    }

    #[test]
    fn falls_back_to_message_field() {
        assert_eq!(
            similarity_message(&json!({"message": "recorded"})).as_deref(),
            Some("recorded")
        );
        assert_eq!(similarity_message(&json!({})), None);
    }
}
