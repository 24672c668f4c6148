//! Shared response helpers.
//!
//! Centralizes the error-body contract (`{"detail": "..."}` with a fixed
//! fallback) so endpoint modules only build requests and map bodies.

use roll_core::responses::ErrorBody;

use crate::error::{ActionError, GENERIC_FAILURE};

/// Pass a 2xx response through; turn anything else into [`ActionError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ActionError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.bytes().await.unwrap_or_default();
    let message = error_message(&body);
    tracing::debug!(status = status.as_u16(), %message, "request rejected");
    Err(ActionError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Best-effort `detail` extraction; never fails.
#[must_use]
pub fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message().map(str::to_string))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// Parse a success body as JSON when there is one. Empty bodies (204) and
/// non-JSON bodies yield `None`.
pub async fn json_body(resp: reqwest::Response) -> Result<Option<serde_json::Value>, ActionError> {
    let bytes = resp.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice(&bytes).ok())
}

/// Pull `filename="..."` out of a `Content-Disposition` header.
#[must_use]
pub fn disposition_filename(resp: &reqwest::Response) -> Option<String> {
    let value = resp
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)?
        .to_str()
        .ok()?;
    parse_disposition_filename(value)
}

fn parse_disposition_filename(value: &str) -> Option<String> {
    for part in value.split(';').map(str::trim) {
        if let Some(encoded) = part.strip_prefix("filename*=") {
            // RFC 5987: charset''percent-encoded
            let raw = encoded.rsplit("''").next().unwrap_or(encoded);
            if let Ok(decoded) = urlencoding::decode(raw.trim_matches('"')) {
                return Some(decoded.into_owned()).filter(|s| !s.is_empty());
            }
        }
    }
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|s| !s.is_empty())
}
