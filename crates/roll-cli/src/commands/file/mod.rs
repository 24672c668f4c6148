mod delete;
mod link;
mod upload;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FileCommands;
use crate::commands::shared::download;
use crate::commands::shared::notify::surfaced;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &FileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FileCommands::List { lesson_id } => list(*lesson_id, ctx, flags).await,
        FileCommands::Upload(args) => upload::handle(args, ctx, flags).await,
        FileCommands::Delete(args) => delete::handle(args, ctx, flags).await,
        FileCommands::Download(args) => {
            download::run(args.file_id, args.output.as_deref(), ctx, flags).await
        }
        FileCommands::Link(args) => link::handle(args, ctx, flags),
    }
}

async fn list(lesson_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scope = ctx.view();
    let files = ctx
        .client
        .list_files(&ctx.session, lesson_id, &scope)
        .await
        .map_err(surfaced)?;
    output(&files, flags.format)
}
