use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::commands::shared::notify::NotificationError;
use crate::context::AppContext;
use crate::output::output;
use crate::router::{self, Admission};

#[derive(Serialize)]
struct LoginNotice {
    authenticated: bool,
    message: &'static str,
}

/// Route a parsed command through the role router, then to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Commands::Auth { action } = &command {
        return commands::auth::handle(action, ctx, flags).await;
    }

    let routes = ctx.route_set().await;
    let route = router::route_for(&command);
    match routes.admit(route) {
        Admission::Allowed => {}
        Admission::LoginRequired => {
            tracing::debug!(route = route.path(), "no role resolved; showing login notice");
            return output(
                &LoginNotice {
                    authenticated: ctx.session.is_authenticated(),
                    message: "Log in to continue: run `roll auth login --username <name>`",
                },
                flags.format,
            );
        }
        Admission::Refused { route, routes } => {
            return Err(NotificationError(roll_client::Notification::warning(format!(
                "`{}` is not available to the {} role",
                route.path(),
                routes.label()
            )))
            .into());
        }
    }

    match command {
        Commands::Lesson { action } => commands::lesson::handle(&action, ctx, flags).await,
        Commands::File { action } => commands::file::handle(&action, ctx, flags).await,
        Commands::Enrollment { action } => commands::enrollment::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Attendance { action } => commands::attendance::handle(&action, ctx, flags).await,
        Commands::Student { action } => commands::student::handle(&action, ctx, flags).await,
        Commands::Auth { .. } => unreachable!("auth is handled before routing"),
    }
}
