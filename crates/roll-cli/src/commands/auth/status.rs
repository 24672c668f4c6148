use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::router::RouteSet;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    token_source: Option<&'static str>,
    subject: Option<String>,
    expires_at: Option<String>,
    expired: Option<bool>,
    role: Option<String>,
    routes: Vec<&'static str>,
    api: String,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let claims = ctx.session.claims();
    let role = ctx.resolve_role().await.role();
    let routes = RouteSet::for_role(role);

    output(
        &AuthStatusResponse {
            authenticated: ctx.session.is_authenticated(),
            token_source: ctx.session.source().map(|source| source.as_str()),
            subject: claims.as_ref().and_then(|c| c.subject.clone()),
            expires_at: claims
                .as_ref()
                .and_then(|c| c.expires_at)
                .map(|at| at.to_rfc3339()),
            expired: claims.as_ref().map(roll_auth::TokenClaims::is_expired),
            role: role.map(|r| r.to_string()),
            routes: routes.mounted().iter().map(|r| r.path()).collect(),
            api: ctx.client.base_url().to_string(),
        },
        flags.format,
    )
}
