//! Cross-cutting error types for rollcall.
//!
//! Transport and API errors live in `roll-client`; credential errors in
//! `roll-auth`; the CLI wraps all of them in `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any rollcall crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A form field failed validation before anything was sent.
    #[error("Validation error: {field} {reason}")]
    Validation { field: String, reason: String },

    /// A role string outside the known set.
    #[error("unknown role '{0}' (expected teacher or student)")]
    UnknownRole(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = CoreError::Validation {
            field: "lesson_id".into(),
            reason: "is required".into(),
        };
        assert_eq!(err.to_string(), "Validation error: lesson_id is required");
        assert_eq!(
            CoreError::UnknownRole("admin".into()).to_string(),
            "unknown role 'admin' (expected teacher or student)"
        );
    }
}
