//! Lesson endpoints.

use reqwest::Method;

use roll_auth::Session;
use roll_core::entities::Lesson;
use roll_core::responses::LessonInput;
use roll_core::validate::required;

use crate::action::{ActionRequest, Payload};
use crate::error::ActionError;
use crate::scope::ViewScope;
use crate::ApiClient;

impl ApiClient {
    /// `GET /api/lessons`: lessons taught by the caller.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_json`].
    pub async fn list_lessons(
        &self,
        session: &Session,
        scope: &ViewScope,
    ) -> Result<Vec<Lesson>, ActionError> {
        self.fetch_json(session, "/api/lessons", scope).await
    }

    /// `GET /api/lessons/{id}`: lesson with files and enrollments.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_json`].
    pub async fn get_lesson(
        &self,
        session: &Session,
        lesson_id: i64,
        scope: &ViewScope,
    ) -> Result<Lesson, ActionError> {
        self.fetch_json(session, &format!("/api/lessons/{lesson_id}"), scope)
            .await
    }

    /// `GET /api/student/lessons`: lessons the calling student is enrolled in.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_json`].
    pub async fn list_student_lessons(
        &self,
        session: &Session,
        scope: &ViewScope,
    ) -> Result<Vec<Lesson>, ActionError> {
        self.fetch_json(session, "/api/student/lessons", scope).await
    }
}

impl ActionRequest {
    /// `POST /api/lessons`.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::MissingInput` when the title is blank.
    pub fn create_lesson(input: &LessonInput) -> Result<Self, ActionError> {
        validate_lesson(input)?;
        Ok(Self::new(Method::POST, "/api/lessons", "Lesson created")
            .with_payload(Payload::json(input)?))
    }

    /// `PUT /api/lessons/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::MissingInput` when the title is blank.
    pub fn update_lesson(lesson_id: i64, input: &LessonInput) -> Result<Self, ActionError> {
        validate_lesson(input)?;
        Ok(
            Self::new(Method::PUT, format!("/api/lessons/{lesson_id}"), "Lesson updated")
                .with_payload(Payload::json(input)?),
        )
    }

    /// `DELETE /api/lessons/{id}`.
    #[must_use]
    pub fn delete_lesson(lesson_id: i64) -> Self {
        Self::new(
            Method::DELETE,
            format!("/api/lessons/{lesson_id}"),
            "Lesson deleted",
        )
    }
}

fn validate_lesson(input: &LessonInput) -> Result<(), ActionError> {
    required("title", input.title.as_str())
        .map_err(|e| ActionError::MissingInput(e.to_string()))
}
