//! User administration endpoints.

use reqwest::Method;

use roll_auth::Session;
use roll_core::entities::User;
use roll_core::responses::NewUser;
use roll_core::validate::required;

use crate::action::{ActionRequest, Payload};
use crate::error::ActionError;
use crate::scope::ViewScope;
use crate::ApiClient;

impl ApiClient {
    /// `GET /api/users`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_json`].
    pub async fn list_users(
        &self,
        session: &Session,
        scope: &ViewScope,
    ) -> Result<Vec<User>, ActionError> {
        self.fetch_json(session, "/api/users", scope).await
    }
}

impl ActionRequest {
    /// `POST /api/users`.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::MissingInput` for a blank username or password.
    pub fn create_user(user: &NewUser) -> Result<Self, ActionError> {
        required("username", user.username.as_str())
            .and_then(|()| required("password", user.password.as_str()))
            .map_err(|e| ActionError::MissingInput(e.to_string()))?;
        Ok(Self::new(Method::POST, "/api/users", "User created")
            .with_payload(Payload::json(user)?))
    }

    /// `POST /api/impersonate/{user_id}`; the body carries a new access token.
    #[must_use]
    pub fn impersonate(user_id: i64) -> Self {
        Self::new(
            Method::POST,
            format!("/api/impersonate/{user_id}"),
            "Impersonation token issued",
        )
    }
}
