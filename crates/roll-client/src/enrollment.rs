//! Enrollment endpoints. Both take `{user_id, lesson_id}` as a JSON body.

use reqwest::Method;

use roll_core::responses::EnrollmentRequest;

use crate::action::{ActionRequest, Payload};
use crate::error::ActionError;

impl ActionRequest {
    /// `POST /api/lessons/{lesson_id}/enroll`.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidInput` if the body cannot be encoded.
    pub fn enroll(body: EnrollmentRequest) -> Result<Self, ActionError> {
        Ok(Self::new(
            Method::POST,
            format!("/api/lessons/{}/enroll", body.lesson_id),
            "Student enrolled",
        )
        .with_payload(Payload::json(&body)?))
    }

    /// `DELETE /api/lessons/{lesson_id}/unenroll`.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidInput` if the body cannot be encoded.
    pub fn unenroll(body: EnrollmentRequest) -> Result<Self, ActionError> {
        Ok(Self::new(
            Method::DELETE,
            format!("/api/lessons/{}/unenroll", body.lesson_id),
            "Student unenrolled",
        )
        .with_payload(Payload::json(&body)?))
    }
}
