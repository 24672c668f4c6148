//! Password login against `/token` (form-encoded, unauthenticated).

use roll_core::responses::TokenResponse;
use roll_core::validate::required;

use crate::error::ActionError;
use crate::http::check_response;
use crate::scope::ViewScope;
use crate::ApiClient;

impl ApiClient {
    /// Exchange credentials for a bearer token. The caller persists it.
    ///
    /// # Errors
    ///
    /// `MissingInput` for blank credentials, `Api` when the server rejects
    /// them, `Transport`/`Cancelled` as for any action.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        scope: &ViewScope,
    ) -> Result<TokenResponse, ActionError> {
        required("username", username)
            .and_then(|()| required("password", password))
            .map_err(|e| ActionError::MissingInput(e.to_string()))?;

        let body = format!(
            "username={}&password={}",
            urlencoding::encode(username),
            urlencoding::encode(password)
        );
        let resp = scope
            .run(
                self.http
                    .post(self.url("/token"))
                    .header(
                        reqwest::header::CONTENT_TYPE,
                        "application/x-www-form-urlencoded",
                    )
                    .body(body)
                    .send(),
            )
            .await??;
        let resp = scope.run(check_response(resp)).await??;
        let bytes = scope.run(resp.bytes()).await??;
        let token: TokenResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ActionError::Decode(format!("/token: {e}")))?;
        tracing::info!(username, "logged in");
        Ok(token)
    }
}
