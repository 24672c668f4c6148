//! The one authenticated action shape.
//!
//! Every user-initiated mutation (upload, delete, enroll, unenroll, register
//! face, mark attendance, lesson and user edits) is an [`ActionRequest`] run
//! through [`ApiClient::perform_action`]: one request, no retry, the response
//! mapped to a message.

use std::path::Path;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use roll_auth::Session;

use crate::ApiClient;
use crate::error::ActionError;
use crate::http::{check_response, json_body};
use crate::scope::ViewScope;

/// A file picked for upload. Sent as multipart form data under `file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Wrap in-memory bytes; the MIME type is guessed from `file_name`.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    /// Read a file from disk.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidInput` if the file cannot be read or is empty.
    pub async fn from_path(path: &Path) -> Result<Self, ActionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ActionError::InvalidInput(format!("cannot read {}: {e}", path.display())))?;
        if bytes.is_empty() {
            return Err(ActionError::InvalidInput(format!(
                "{} is empty",
                path.display()
            )));
        }
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self::new(file_name, bytes))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn into_form(self) -> Result<reqwest::multipart::Form, ActionError> {
        let part = reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .map_err(|e| ActionError::InvalidInput(format!("invalid content type: {e}")))?;
        Ok(reqwest::multipart::Form::new().part("file", part))
    }
}

/// Request body variants.
#[derive(Debug, Clone)]
pub enum Payload {
    Empty,
    Json(Value),
    File(FileUpload),
}

impl Payload {
    /// Serialize `body` as a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidInput` if `body` cannot be serialized.
    pub fn json<T: Serialize>(body: &T) -> Result<Self, ActionError> {
        serde_json::to_value(body)
            .map(Self::Json)
            .map_err(|e| ActionError::InvalidInput(format!("cannot encode request: {e}")))
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Json(_) => "json",
            Self::File(_) => "multipart",
        }
    }
}

/// Turns a success body into a user-facing message.
pub type Summarize = fn(&Value) -> Option<String>;

/// Reads a string `message` field.
#[must_use]
pub fn message_field(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

/// One authenticated action.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    pub method: Method,
    /// Path below the API base, starting with `/`.
    pub path: String,
    pub payload: Payload,
    /// Message used when the server does not supply one.
    pub default_message: &'static str,
    pub summarize: Summarize,
}

impl ActionRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, default_message: &'static str) -> Self {
        Self {
            method,
            path: path.into(),
            payload: Payload::Empty,
            default_message,
            summarize: message_field,
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summarize: Summarize) -> Self {
        self.summarize = summarize;
        self
    }
}

/// Result of a successful action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSuccess {
    pub status: u16,
    pub message: String,
    /// Parsed JSON body, when the response had one.
    pub body: Option<Value>,
}

impl ActionSuccess {
    /// Decode the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::Decode` if the body is missing or has another shape.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, ActionError> {
        let body = self
            .body
            .clone()
            .ok_or_else(|| ActionError::Decode("empty body".into()))?;
        serde_json::from_value(body).map_err(|e| ActionError::Decode(e.to_string()))
    }
}

impl ApiClient {
    /// Perform one authenticated action.
    ///
    /// Refuses to send anything without a credential. Sends exactly one
    /// request otherwise; there is no retry and no client-side timeout.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a credential, `Transport` on network
    /// failure, `Api` on a non-2xx status, `Cancelled` if `scope` is torn down.
    pub async fn perform_action(
        &self,
        session: &Session,
        request: ActionRequest,
        scope: &ViewScope,
    ) -> Result<ActionSuccess, ActionError> {
        let ActionRequest {
            method,
            path,
            payload,
            default_message,
            summarize,
        } = request;

        let resp = self.send(session, method, &path, payload, scope).await?;
        let status = resp.status().as_u16();
        let body = scope.run(json_body(resp)).await??;
        let message = body
            .as_ref()
            .and_then(summarize)
            .unwrap_or_else(|| default_message.to_string());

        tracing::info!(%path, status, %message, "action succeeded");
        Ok(ActionSuccess {
            status,
            message,
            body,
        })
    }

    /// Authenticated GET decoded as `T`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::perform_action`], plus `Decode` for an unexpected body.
    pub async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        scope: &ViewScope,
    ) -> Result<T, ActionError> {
        let resp = self
            .send(session, Method::GET, path, Payload::Empty, scope)
            .await?;
        let bytes = scope.run(resp.bytes()).await??;
        serde_json::from_slice(&bytes).map_err(|e| ActionError::Decode(format!("{path}: {e}")))
    }

    /// Attach the bearer credential, send once, and check the status.
    pub(crate) async fn send(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        payload: Payload,
        scope: &ViewScope,
    ) -> Result<reqwest::Response, ActionError> {
        let Some(token) = session.bearer() else {
            tracing::warn!(%path, "no credential; request not sent");
            return Err(ActionError::NotAuthenticated);
        };

        let route = path.split_once('?').map_or(path, |(route, _)| route);
        tracing::debug!(%method, %route, payload = payload.kind(), "sending request");

        let builder = self.http.request(method, self.url(path)).bearer_auth(token);
        let builder = match payload {
            Payload::Empty => builder,
            Payload::Json(value) => builder.json(&value),
            Payload::File(file) => builder.multipart(file.into_form()?),
        };

        let resp = scope.run(builder.send()).await?.map_err(|error| {
            let error = ActionError::from(error);
            tracing::warn!(%route, %error, "request failed");
            error
        })?;
        scope.run(check_response(resp)).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_upload_guesses_mime() {
        let upload = FileUpload::new("face.jpg", vec![1, 2, 3]);
        assert_eq!(upload.mime, "image/jpeg");
        assert_eq!(upload.len(), 3);

        let unknown = FileUpload::new("blob", vec![1]);
        assert_eq!(unknown.mime, "application/octet-stream");
    }

    #[tokio::test]
    async fn from_path_rejects_empty_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("empty.png");
        std::fs::write(&path, b"").expect("write");
        let err = FileUpload::from_path(&path).await.expect_err("should fail");
        assert!(matches!(err, ActionError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn from_path_reads_name_and_bytes() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("notes.pdf");
        std::fs::write(&path, b"%PDF-1.4").expect("write");
        let upload = FileUpload::from_path(&path).await.expect("read");
        assert_eq!(upload.file_name, "notes.pdf");
        assert_eq!(upload.mime, "application/pdf");
        assert_eq!(upload.bytes, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn from_path_reports_missing_file() {
        let err = FileUpload::from_path(Path::new("/definitely/not/here.jpg"))
            .await
            .expect_err("should fail");
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn message_field_reads_non_empty_message() {
        assert_eq!(message_field(&json!({"message": "ok"})).as_deref(), Some("ok"));
        assert_eq!(message_field(&json!({"message": " "})), None);
        assert_eq!(message_field(&json!({"similarity": 0.9})), None);
    }

    #[test]
    fn decode_requires_body() {
        let success = ActionSuccess {
            status: 204,
            message: "done".into(),
            body: None,
        };
        assert!(matches!(
            success.decode::<serde_json::Value>(),
            Err(ActionError::Decode(_))
        ));
    }
}
