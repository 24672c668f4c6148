use roll_client::{ActionError, ActionRequest};
use roll_core::entities::{Lesson, LessonSummary};
use roll_core::responses::LessonInput;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LessonCommands;
use crate::cli::subcommands::lesson::{LessonCreateArgs, LessonUpdateArgs};
use crate::commands::shared::action::perform;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::notify::{refreshed, report, surfaced};
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

pub async fn handle(
    action: &LessonCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LessonCommands::List => list(ctx, flags).await,
        LessonCommands::Show { id } => show(*id, ctx, flags).await,
        LessonCommands::Create(args) => create(args, ctx, flags).await,
        LessonCommands::Update(args) => update(args, ctx, flags).await,
        LessonCommands::Delete { id, yes } => delete(*id, *yes, ctx, flags).await,
    }
}

async fn summaries(
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> Result<Vec<LessonSummary>, ActionError> {
    let scope = ctx.view();
    let lessons = ctx.client.list_lessons(&ctx.session, &scope).await?;
    let mut rows: Vec<LessonSummary> = lessons.iter().map(Lesson::summary).collect();
    apply_limit(&mut rows, flags.limit, ctx.config.general.default_limit);
    Ok(rows)
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = summaries(ctx, flags).await.map_err(surfaced)?;
    output(&rows, flags.format)
}

async fn show(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scope = ctx.view();
    let lesson = ctx
        .client
        .get_lesson(&ctx.session, id, &scope)
        .await
        .map_err(surfaced)?;
    output(&lesson, flags.format)
}

async fn create(
    args: &LessonCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = LessonInput {
        title: args.title.clone(),
        description: args.description.clone(),
    };
    let outcome = perform(ActionRequest::create_lesson(&input), ctx).await;
    let view = refreshed(&outcome, summaries(ctx, flags)).await;
    report(outcome, view, flags)
}

async fn update(
    args: &LessonUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = LessonInput {
        title: args.title.clone(),
        description: args.description.clone(),
    };
    let outcome = perform(ActionRequest::update_lesson(args.id, &input), ctx).await;
    let scope = ctx.view();
    let view = refreshed(
        &outcome,
        ctx.client.get_lesson(&ctx.session, args.id, &scope),
    )
    .await;
    report(outcome, view, flags)
}

async fn delete(id: i64, yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ui::confirm(&format!("Delete lesson {id} and its files?"), yes)? {
        eprintln!("Aborted.");
        return Ok(());
    }
    let outcome = perform(Ok(ActionRequest::delete_lesson(id)), ctx).await;
    let view = refreshed(&outcome, summaries(ctx, flags)).await;
    report(outcome, view, flags)
}
