use roll_client::{ActionOutcome, ActionRequest, Notification};
use roll_core::responses::{NewUser, TokenResponse};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::cli::subcommands::user::UserCreateArgs;
use crate::commands::shared::action::perform;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::notify::{refreshed, report, surfaced};
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::List => list(ctx, flags).await,
        UserCommands::Create(args) => create(args, ctx, flags).await,
        UserCommands::Impersonate { id } => impersonate(*id, ctx, flags).await,
    }
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scope = ctx.view();
    let mut users = ctx
        .client
        .list_users(&ctx.session, &scope)
        .await
        .map_err(surfaced)?;
    apply_limit(&mut users, flags.limit, ctx.config.general.default_limit);
    output(&users, flags.format)
}

async fn create(
    args: &UserCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = NewUser {
        username: args.username.clone(),
        password: args.password.clone(),
        role: args.role,
    };
    let outcome = perform(ActionRequest::create_user(&user), ctx).await;
    let scope = ctx.view();
    let view = refreshed(&outcome, ctx.client.list_users(&ctx.session, &scope)).await;
    report(outcome, view, flags)
}

/// Swap the stored credential for one issued on behalf of `user_id`.
async fn impersonate(user_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scope = ctx.view();
    let success = ctx
        .client
        .perform_action(&ctx.session, ActionRequest::impersonate(user_id), &scope)
        .await
        .map_err(surfaced)?;
    let token: TokenResponse = success.decode().map_err(surfaced)?;
    roll_auth::store_token(&token.access_token)?;
    tracing::info!(user_id, "impersonation token stored");

    let outcome = ActionOutcome {
        notification: Notification::success(format!(
            "Now acting as user {user_id}; run `roll auth logout` to end the session"
        )),
        refresh: false,
        body: None,
    };
    report(outcome, None, flags)
}
