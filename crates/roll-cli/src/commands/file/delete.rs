use roll_client::{ActionForm, ActionRequest};
use roll_core::validate::required;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::file::FileDeleteArgs;
use crate::commands::shared::notify::{refreshed, report};
use crate::context::AppContext;
use crate::ui;

pub async fn handle(
    args: &FileDeleteArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut form = ActionForm::new("No file selected")
        .with_selection(args.file_id.filter(|id| required("file", id).is_ok()));

    if let Some(file_id) = form.selected()
        && !ui::confirm(&format!("Delete file {file_id}?"), args.yes)?
    {
        eprintln!("Aborted.");
        return Ok(());
    }

    let scope = ctx.view();
    let outcome = form
        .submit(&ctx.client, &ctx.session, &scope, |file_id| {
            Ok(ActionRequest::delete_file(*file_id))
        })
        .await;

    let view = match args.lesson {
        Some(lesson_id) => {
            refreshed(
                &outcome,
                ctx.client.list_files(&ctx.session, lesson_id, &scope),
            )
            .await
        }
        None => None,
    };
    report(outcome, view, flags)
}
