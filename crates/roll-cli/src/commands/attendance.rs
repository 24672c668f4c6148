use crate::cli::GlobalFlags;
use crate::cli::subcommands::AttendanceCommands;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::notify::surfaced;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &AttendanceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AttendanceCommands::List { lesson } => {
            let scope = ctx.view();
            let mut records = ctx
                .client
                .list_attendance(&ctx.session, *lesson, &scope)
                .await
                .map_err(surfaced)?;
            // Newest first.
            records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            apply_limit(&mut records, flags.limit, ctx.config.general.default_limit);
            output(&records, flags.format)
        }
    }
}
