//! # roll-client
//!
//! HTTP client for the rollcall attendance API.
//!
//! All mutations go through one parametrized helper,
//! [`ApiClient::perform_action`]; reads go through [`ApiClient::fetch_json`].
//! Both attach the session's bearer credential and refuse to send without it.
//! [`ActionForm`] adds the "something must be selected" precondition and the
//! clear-on-success behaviour, and [`ViewScope`] binds requests to the view
//! that issued them so they can be cancelled.
//!
//! Endpoint modules:
//! - `lessons`: lesson CRUD and the student lesson list
//! - `files`: upload, list, delete, download
//! - `enrollment`: enroll / unenroll
//! - `attendance`: face registration, attendance marking and listing
//! - `users`: user listing, creation, impersonation
//! - `login`: password login

pub mod action;
pub mod attendance;
pub mod enrollment;
pub mod error;
pub mod files;
pub mod form;
pub mod lessons;
pub mod login;
pub mod notify;
pub mod permissions;
pub mod scope;
pub mod users;

mod http;

pub use action::{ActionRequest, ActionSuccess, FileUpload, Payload};
pub use error::{ActionError, GENERIC_FAILURE};
pub use form::{ActionForm, ActionOutcome};
pub use notify::{Level, Notification};
pub use permissions::{PermissionsProvider, ProbePermissions, RoleState, StaticPermissions};
pub use scope::ViewScope;

use roll_config::{ApiConfig, ConfigError};

/// Client bound to one API base URL.
///
/// No request timeout is set; a request ends when the server answers or its
/// view scope is cancelled.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a malformed base URL or if the
    /// HTTP client cannot be constructed.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ConfigError> {
        let base_url = config.normalized_base_url()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "api".into(),
                reason: format!("cannot build HTTP client: {e}"),
            })?;
        Ok(Self { http, base_url })
    }

    /// Client with default settings for `base_url`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_config`].
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::from_config(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
