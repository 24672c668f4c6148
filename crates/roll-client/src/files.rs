//! Lesson file endpoints: upload, list, delete, download.

use reqwest::Method;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use roll_auth::Session;
use roll_core::entities::LessonFile;

use crate::action::{ActionRequest, FileUpload, Payload};
use crate::error::ActionError;
use crate::http::disposition_filename;
use crate::scope::ViewScope;
use crate::ApiClient;

impl ApiClient {
    /// `GET /api/lessons/{id}/files`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_json`].
    pub async fn list_files(
        &self,
        session: &Session,
        lesson_id: i64,
        scope: &ViewScope,
    ) -> Result<Vec<LessonFile>, ActionError> {
        self.fetch_json(session, &format!("/api/lessons/{lesson_id}/files"), scope)
            .await
    }

    /// Shareable download link with the credential in the query string.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NotAuthenticated` without a credential.
    pub fn download_url(&self, session: &Session, file_id: i64) -> Result<String, ActionError> {
        let token = session
            .require()
            .map_err(|_| ActionError::NotAuthenticated)?;
        Ok(self.url(&format!(
            "/api/files/{file_id}/download?token={}",
            urlencoding::encode(token)
        )))
    }

    /// Start downloading a file. The body is streamed by [`Download::write_to`].
    ///
    /// Authenticates with the bearer header only; the query-string token is
    /// reserved for links handed to a browser.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::perform_action`].
    pub async fn start_download(
        &self,
        session: &Session,
        file_id: i64,
        scope: &ViewScope,
    ) -> Result<Download, ActionError> {
        let path = format!("/api/files/{file_id}/download");
        let response = self
            .send(session, Method::GET, &path, Payload::Empty, scope)
            .await?;
        Ok(Download {
            filename: disposition_filename(&response),
            total: response.content_length(),
            response,
        })
    }
}

/// An in-progress download.
#[derive(Debug)]
pub struct Download {
    /// Server-suggested file name from `Content-Disposition`.
    pub filename: Option<String>,
    /// Expected size, when the server sent `Content-Length`.
    pub total: Option<u64>,
    response: reqwest::Response,
}

impl Download {
    /// Stream the body into `writer`, reporting bytes written so far.
    ///
    /// # Errors
    ///
    /// `Transport` if the stream breaks, `Io` if writing fails, `Cancelled`
    /// if `scope` is torn down.
    pub async fn write_to<W, P>(
        mut self,
        writer: &mut W,
        scope: &ViewScope,
        mut progress: P,
    ) -> Result<u64, ActionError>
    where
        W: AsyncWrite + Unpin,
        P: FnMut(u64),
    {
        let mut written = 0_u64;
        while let Some(chunk) = scope.run(self.response.chunk()).await?? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
            progress(written);
        }
        writer.flush().await?;
        Ok(written)
    }
}

impl ActionRequest {
    /// `POST /api/lessons/{id}/files` with the file under `file`.
    #[must_use]
    pub fn upload_lesson_file(lesson_id: i64, file: FileUpload) -> Self {
        Self::new(
            Method::POST,
            format!("/api/lessons/{lesson_id}/files"),
            "File uploaded",
        )
        .with_payload(Payload::File(file))
    }

    /// `DELETE /api/files/{id}`.
    #[must_use]
    pub fn delete_file(file_id: i64) -> Self {
        Self::new(Method::DELETE, format!("/api/files/{file_id}"), "File deleted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_url_carries_encoded_token() {
        let client = ApiClient::new("http://api.test").expect("client");
        let url = client
            .download_url(&Session::from_token("a b+c"), 12)
            .expect("url");
        assert_eq!(url, "http://api.test/api/files/12/download?token=a%20b%2Bc");
    }

    #[test]
    fn download_url_requires_credential() {
        let client = ApiClient::new("http://api.test").expect("client");
        assert!(matches!(
            client.download_url(&Session::anonymous(), 12),
            Err(ActionError::NotAuthenticated)
        ));
    }

    #[test]
    fn upload_request_is_multipart_post() {
        let request =
            ActionRequest::upload_lesson_file(5, FileUpload::new("slides.pdf", vec![1, 2]));
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/api/lessons/5/files");
        assert!(matches!(request.payload, Payload::File(_)));
    }
}
