use dialoguer::Password;
use roll_auth::TokenClaims;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::notify::surfaced;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    username: String,
    subject: Option<String>,
    expires_at: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None if ui::prefs().interactive => Password::new().with_prompt("Password").interact()?,
        None => anyhow::bail!("auth login: --password is required in non-interactive sessions"),
    };

    let scope = ctx.view();
    let token = ctx
        .client
        .login(&args.username, &password, &scope)
        .await
        .map_err(surfaced)?;
    roll_auth::store_token(&token.access_token)?;

    let claims = TokenClaims::decode(&token.access_token).ok();
    output(
        &AuthLoginResponse {
            authenticated: true,
            username: args.username.clone(),
            subject: claims.as_ref().and_then(|c| c.subject.clone()),
            expires_at: claims
                .and_then(|c| c.expires_at)
                .map(|at| at.to_rfc3339()),
        },
        flags.format,
    )
}
