use roll_client::ActionRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::file::FileUploadArgs;
use crate::commands::shared::input::file_form;
use crate::commands::shared::notify::{refreshed, report, surfaced};
use crate::context::AppContext;

pub async fn handle(
    args: &FileUploadArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut form = file_form(args.path.as_deref(), "No file selected")
        .await
        .map_err(surfaced)?;
    let lesson_id = args.lesson_id;

    let scope = ctx.view();
    let outcome = form
        .submit(&ctx.client, &ctx.session, &scope, |file| {
            Ok(ActionRequest::upload_lesson_file(lesson_id, file.clone()))
        })
        .await;

    let view = refreshed(
        &outcome,
        ctx.client.list_files(&ctx.session, lesson_id, &scope),
    )
    .await;
    report(outcome, view, flags)
}
