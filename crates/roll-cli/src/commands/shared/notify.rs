//! Turning action outcomes into CLI output.
//!
//! Success prints an [`ActionReport`] to stdout. Warnings and errors become a
//! [`NotificationError`] that `main` prints to stderr before exiting non-zero.

use std::fmt;
use std::future::Future;

use roll_client::{ActionError, ActionOutcome, Level, Notification};
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::output::output;

/// A warning or error notification surfaced as the command's failure.
#[derive(Debug)]
pub struct NotificationError(pub Notification);

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.message)
    }
}

impl std::error::Error for NotificationError {}

impl From<ActionError> for NotificationError {
    fn from(error: ActionError) -> Self {
        Self(error.notification())
    }
}

/// Wrap a client error so `main` reports it at its notification level.
pub fn surfaced(error: ActionError) -> anyhow::Error {
    NotificationError::from(error).into()
}

#[derive(Debug, Serialize)]
pub struct ActionReport {
    pub status: Level,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// The dependent view, re-fetched after the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshed: Option<Value>,
}

/// Print a successful outcome, or fail with its notification.
pub fn report(
    outcome: ActionOutcome,
    refreshed: Option<Value>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !outcome.is_success() {
        return Err(NotificationError(outcome.notification).into());
    }
    let report = ActionReport {
        status: outcome.notification.level,
        message: outcome.notification.message,
        result: outcome.body,
        refreshed,
    };
    if flags.quiet {
        return Ok(());
    }
    output(&report, flags.format)
}

/// Re-fetch the dependent view when the outcome asks for it. A failed
/// refresh is logged; the action itself already succeeded.
pub async fn refreshed<T, F>(outcome: &ActionOutcome, fetch: F) -> Option<Value>
where
    T: Serialize,
    F: Future<Output = Result<T, ActionError>>,
{
    if !outcome.refresh {
        return None;
    }
    match fetch.await {
        Ok(view) => serde_json::to_value(view).ok(),
        Err(error) => {
            tracing::warn!(%error, "refresh after action failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roll_client::ActionSuccess;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: true,
            verbose: false,
            api_url: None,
        }
    }

    #[test]
    fn failed_outcome_becomes_notification_error() {
        let outcome = ActionOutcome::from_error(&ActionError::Api {
            status: 400,
            message: "bad input".into(),
        });
        let err = report(outcome, None, &flags()).expect_err("should fail");
        let note = err
            .downcast_ref::<NotificationError>()
            .expect("notification error");
        assert_eq!(note.0.level, Level::Error);
        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn precondition_is_a_warning() {
        let err = surfaced(ActionError::MissingInput("No file selected".into()));
        let note = err
            .downcast_ref::<NotificationError>()
            .expect("notification error");
        assert_eq!(note.0.level, Level::Warning);
    }

    #[tokio::test]
    async fn refresh_runs_only_after_success() {
        let ok = ActionOutcome::from_success(ActionSuccess {
            status: 200,
            message: "ok".into(),
            body: None,
        });
        let view = refreshed(&ok, async { Ok::<_, ActionError>(vec![1, 2]) }).await;
        assert_eq!(view, Some(serde_json::json!([1, 2])));

        let failed = ActionOutcome::from_error(&ActionError::Cancelled);
        let view = refreshed(&failed, async { Ok::<_, ActionError>(vec![1]) }).await;
        assert_eq!(view, None);
    }
}
