use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Claims decoded from the bearer token WITHOUT signature verification.
///
/// Only used for status display and expiry warnings; the backend remains the
/// authority on whether a token is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// `sub` claim: the backend username.
    pub subject: Option<String>,
    /// `exp` claim.
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenClaims {
    /// Decode the payload segment of a JWT.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MalformedToken` if the token is not three
    /// dot-separated segments or the payload is not base64url JSON.
    pub fn decode(jwt: &str) -> Result<Self, AuthError> {
        let parts: Vec<&str> = jwt.split('.').collect();
        if parts.len() != 3 {
            return Err(AuthError::MalformedToken("invalid JWT format".into()));
        }
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1].trim_end_matches('='))
            .map_err(|e| AuthError::MalformedToken(format!("base64 decode failed: {e}")))?;
        let value: serde_json::Value = serde_json::from_slice(&payload)
            .map_err(|e| AuthError::MalformedToken(format!("JSON parse failed: {e}")))?;

        let subject = value["sub"].as_str().map(str::to_string);
        let expires_at = value["exp"]
            .as_i64()
            .and_then(|exp| DateTime::from_timestamp(exp, 0));

        Ok(Self {
            subject,
            expires_at,
        })
    }

    /// True if the token has an `exp` claim at or before `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_jwt(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = engine.encode(payload);
        let signature = engine.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decodes_subject_and_expiry() {
        let exp = Utc::now().timestamp() + 3600;
        let claims = TokenClaims::decode(&make_jwt(&format!(r#"{{"sub":"ana","exp":{exp}}}"#)))
            .expect("decode");
        assert_eq!(claims.subject.as_deref(), Some("ana"));
        assert_eq!(claims.expires_at.map(|t| t.timestamp()), Some(exp));
        assert!(!claims.is_expired());
    }

    #[test]
    fn past_expiry_is_expired() {
        let exp = Utc::now().timestamp() - 10;
        let claims =
            TokenClaims::decode(&make_jwt(&format!(r#"{{"sub":"ana","exp":{exp}}}"#))).expect("decode");
        assert!(claims.is_expired());
    }

    #[test]
    fn missing_exp_never_expires() {
        let claims = TokenClaims::decode(&make_jwt(r#"{"sub":"ana"}"#)).expect("decode");
        assert!(claims.expires_at.is_none());
        assert!(!claims.is_expired());
    }

    #[test]
    fn rejects_non_jwt() {
        let err = TokenClaims::decode("opaque-token").expect_err("should fail");
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn rejects_bad_base64() {
        let err = TokenClaims::decode("header.!!!invalid!!!.signature").expect_err("should fail");
        assert!(err.to_string().contains("base64 decode failed"));
    }
}
