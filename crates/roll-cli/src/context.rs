use anyhow::Context;
use roll_auth::Session;
use roll_client::{ApiClient, ProbePermissions, RoleState, StaticPermissions, ViewScope};
use roll_config::RollConfig;

use crate::router::RouteSet;

/// Everything a command handler needs: config, the API client, the explicit
/// credential and the root view scope.
pub struct AppContext {
    pub config: RollConfig,
    pub client: ApiClient,
    pub session: Session,
    scope: ViewScope,
}

impl AppContext {
    pub fn init(config: RollConfig) -> anyhow::Result<Self> {
        let client =
            ApiClient::from_config(&config.api).context("failed to build the API client")?;
        let session = Session::load();
        tracing::debug!(
            base_url = client.base_url(),
            authenticated = session.is_authenticated(),
            "application context ready"
        );
        Ok(Self {
            config,
            client,
            session,
            scope: ViewScope::new(),
        })
    }

    /// Scope for one view; cancelled with the root scope.
    #[must_use]
    pub fn view(&self) -> ViewScope {
        self.scope.child()
    }

    /// Cancel everything in flight (Ctrl-C).
    pub fn spawn_interrupt_handler(&self) {
        let canceller = self.scope.canceller();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupted; cancelling in-flight requests");
                canceller.cancel();
            }
        });
    }

    /// Resolve the caller's role once: the configured pin wins, otherwise
    /// the server is probed.
    pub async fn resolve_role(&self) -> RoleState {
        let scope = self.view();
        match self.config.auth.pinned_role() {
            Some(role) => {
                RoleState::Unresolved
                    .resolve(&StaticPermissions(Some(role)), &self.session)
                    .await
            }
            None => {
                RoleState::Unresolved
                    .resolve(&ProbePermissions::new(&self.client, &scope), &self.session)
                    .await
            }
        }
    }

    pub async fn route_set(&self) -> RouteSet {
        RouteSet::for_role(self.resolve_role().await.role())
    }
}
