//! The two student routes: `/` (enrolled lessons, face registration) and
//! `/lessons/:id` (detail, downloads, check-in).

use std::path::Path;

use roll_client::ActionRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::cli::subcommands::student::StudentAttendArgs;
use crate::commands::shared::download;
use crate::commands::shared::input::file_form;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::notify::{refreshed, report, surfaced};
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::Lessons => lessons(ctx, flags).await,
        StudentCommands::RegisterFace { image } => {
            register_face(image.as_deref(), ctx, flags).await
        }
        StudentCommands::Lesson { id } => lesson(*id, ctx, flags).await,
        StudentCommands::Attend(args) => attend(args, ctx, flags).await,
        StudentCommands::Download { file_id, output } => {
            download::run(*file_id, output.as_deref(), ctx, flags).await
        }
    }
}

async fn lessons(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scope = ctx.view();
    let mut lessons = ctx
        .client
        .list_student_lessons(&ctx.session, &scope)
        .await
        .map_err(surfaced)?;
    apply_limit(&mut lessons, flags.limit, ctx.config.general.default_limit);
    let rows: Vec<_> = lessons.iter().map(roll_core::entities::Lesson::summary).collect();
    output(&rows, flags.format)
}

async fn register_face(
    image: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut form = file_form(image, "No image selected")
        .await
        .map_err(surfaced)?;
    let scope = ctx.view();
    let outcome = form
        .submit(&ctx.client, &ctx.session, &scope, |image| {
            Ok(ActionRequest::register_face(image.clone()))
        })
        .await;
    report(outcome, None, flags)
}

/// The server only returns lessons the caller is enrolled in.
async fn lesson(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scope = ctx.view();
    let lesson = ctx
        .client
        .get_lesson(&ctx.session, id, &scope)
        .await
        .map_err(surfaced)?;
    output(&lesson, flags.format)
}

async fn attend(
    args: &StudentAttendArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut form = file_form(args.image.as_deref(), "No image selected")
        .await
        .map_err(surfaced)?;
    let lesson_id = args.lesson_id;

    let scope = ctx.view();
    let outcome = form
        .submit(&ctx.client, &ctx.session, &scope, |image| {
            Ok(ActionRequest::mark_attendance(lesson_id, image.clone()))
        })
        .await;

    let view = refreshed(
        &outcome,
        ctx.client.get_lesson(&ctx.session, lesson_id, &scope),
    )
    .await;
    report(outcome, view, flags)
}
