//! Action error taxonomy.
//!
//! Precondition failures never reach the network and surface as warnings;
//! everything else surfaces as an error notification. Nothing here is retried.

use thiserror::Error;

use crate::notify::{Level, Notification};

/// Fallback message when a failed response carries no readable `detail`.
pub const GENERIC_FAILURE: &str = "Request failed";

#[derive(Debug, Error)]
pub enum ActionError {
    /// No file or identifier was selected.
    #[error("{0}")]
    MissingInput(String),

    /// No stored credential; the request was not sent.
    #[error("authentication required: log in before performing this action")]
    NotAuthenticated,

    /// The selected input cannot be sent (unreadable or empty file, bad MIME).
    #[error("{0}")]
    InvalidInput(String),

    /// Transport failure (connection refused, reset, TLS). Built through
    /// `From`, which drops the request URL so query credentials never print.
    #[error("Network error: {0}")]
    Transport(reqwest::Error),

    /// Non-2xx response. `message` is the server `detail` or [`GENERIC_FAILURE`].
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 2xx response whose body does not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Local write failure while saving a download.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The owning view scope was torn down while the request was in flight.
    #[error("request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for ActionError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.without_url())
    }
}

impl ActionError {
    /// Notification level this error surfaces at.
    #[must_use]
    pub const fn level(&self) -> Level {
        match self {
            Self::MissingInput(_) | Self::NotAuthenticated | Self::InvalidInput(_) => {
                Level::Warning
            }
            Self::Transport(_)
            | Self::Api { .. }
            | Self::Decode(_)
            | Self::Io(_)
            | Self::Cancelled => Level::Error,
        }
    }

    /// True when the request was never sent.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self.level(), Level::Warning)
    }

    /// HTTP status for API errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn notification(&self) -> Notification {
        Notification::new(self.level(), self.to_string())
    }
}
