//! Role resolution.
//!
//! ```text
//! Unresolved → Resolved(Some(role))
//!            → Resolved(None)        (no credential, rejected, or failed)
//! ```
//!
//! Resolution happens once per process; there is no way back to
//! `Unresolved`.

use reqwest::Method;

use roll_auth::Session;
use roll_core::enums::Role;

use crate::action::Payload;
use crate::error::ActionError;
use crate::scope::ViewScope;
use crate::ApiClient;

/// The authorization collaborator consulted at startup.
#[allow(async_fn_in_trait)]
pub trait PermissionsProvider {
    /// `Ok(None)` means "authenticated but no recognised role" or "not logged in".
    async fn resolve_role(&self, session: &Session) -> Result<Option<Role>, ActionError>;
}

/// Role pinned by configuration.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermissions(pub Option<Role>);

impl PermissionsProvider for StaticPermissions {
    async fn resolve_role(&self, session: &Session) -> Result<Option<Role>, ActionError> {
        if !session.is_authenticated() {
            return Ok(None);
        }
        Ok(self.0)
    }
}

/// Infer the role from which role-gated collection the caller may read:
/// `/api/users` is teacher-only, `/api/student/lessons` student-only.
#[derive(Debug)]
pub struct ProbePermissions<'a> {
    client: &'a ApiClient,
    scope: &'a ViewScope,
}

impl<'a> ProbePermissions<'a> {
    #[must_use]
    pub const fn new(client: &'a ApiClient, scope: &'a ViewScope) -> Self {
        Self { client, scope }
    }

    /// `Ok(true)` on 2xx, `Ok(false)` on 401/403, error otherwise.
    async fn can_read(&self, session: &Session, path: &str) -> Result<bool, ActionError> {
        match self
            .client
            .send(session, Method::GET, path, Payload::Empty, self.scope)
            .await
        {
            Ok(_) => Ok(true),
            Err(ActionError::Api {
                status: 401 | 403, ..
            }) => Ok(false),
            Err(error) => Err(error),
        }
    }
}

impl PermissionsProvider for ProbePermissions<'_> {
    async fn resolve_role(&self, session: &Session) -> Result<Option<Role>, ActionError> {
        if !session.is_authenticated() {
            return Ok(None);
        }
        if self.can_read(session, "/api/users").await? {
            return Ok(Some(Role::Teacher));
        }
        if self.can_read(session, "/api/student/lessons").await? {
            return Ok(Some(Role::Student));
        }
        Ok(None)
    }
}

/// Once-per-session role state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleState {
    #[default]
    Unresolved,
    Resolved(Option<Role>),
}

impl RoleState {
    /// Resolve through `provider` if still unresolved; a resolved state is
    /// returned unchanged. Provider errors resolve to `Resolved(None)`.
    pub async fn resolve<P: PermissionsProvider>(self, provider: &P, session: &Session) -> Self {
        if let Self::Resolved(_) = self {
            return self;
        }
        match provider.resolve_role(session).await {
            Ok(role) => {
                tracing::debug!(role = ?role, "role resolved");
                Self::Resolved(role)
            }
            Err(error) => {
                tracing::warn!(%error, "role resolution failed; using fallback routes");
                Self::Resolved(None)
            }
        }
    }

    #[must_use]
    pub const fn role(self) -> Option<Role> {
        match self {
            Self::Resolved(role) => role,
            Self::Unresolved => None,
        }
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl PermissionsProvider for Failing {
        async fn resolve_role(&self, _session: &Session) -> Result<Option<Role>, ActionError> {
            Err(ActionError::Api {
                status: 500,
                message: "boom".into(),
            })
        }
    }

    #[tokio::test]
    async fn static_provider_resolves_pinned_role() {
        let state = RoleState::Unresolved
            .resolve(&StaticPermissions(Some(Role::Teacher)), &Session::from_token("t"))
            .await;
        assert_eq!(state, RoleState::Resolved(Some(Role::Teacher)));
        assert_eq!(state.role(), Some(Role::Teacher));
    }

    #[tokio::test]
    async fn anonymous_session_resolves_to_none() {
        let state = RoleState::Unresolved
            .resolve(&StaticPermissions(Some(Role::Teacher)), &Session::anonymous())
            .await;
        assert_eq!(state, RoleState::Resolved(None));
    }

    #[tokio::test]
    async fn failure_resolves_to_none() {
        let state = RoleState::Unresolved
            .resolve(&Failing, &Session::from_token("t"))
            .await;
        assert_eq!(state, RoleState::Resolved(None));
        assert!(state.is_resolved());
    }

    #[tokio::test]
    async fn resolved_state_is_terminal() {
        let state = RoleState::Resolved(Some(Role::Student))
            .resolve(&StaticPermissions(Some(Role::Teacher)), &Session::from_token("t"))
            .await;
        assert_eq!(state, RoleState::Resolved(Some(Role::Student)));
    }
}
