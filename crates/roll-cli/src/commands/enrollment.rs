use roll_client::{ActionError, ActionForm, ActionRequest};
use roll_core::responses::EnrollmentRequest;
use roll_core::validate::required;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EnrollmentCommands;
use crate::cli::subcommands::enrollment::EnrollmentArgs;
use crate::commands::shared::notify::{refreshed, report};
use crate::context::AppContext;
use crate::ui;

pub async fn handle(
    action: &EnrollmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EnrollmentCommands::Add(args) => run(args, ActionRequest::enroll, ctx, flags).await,
        EnrollmentCommands::Remove(args) => {
            if let Some(user_id) = args.user
                && !ui::confirm(
                    &format!("Remove user {user_id} from lesson {}?", args.lesson_id),
                    args.yes,
                )?
            {
                eprintln!("Aborted.");
                return Ok(());
            }
            run(args, ActionRequest::unenroll, ctx, flags).await
        }
    }
}

async fn run(
    args: &EnrollmentArgs,
    build: fn(EnrollmentRequest) -> Result<ActionRequest, ActionError>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let lesson_id = args.lesson_id;
    let mut form = ActionForm::new("No student selected").with_selection(args.user);

    let scope = ctx.view();
    let outcome = form
        .submit(&ctx.client, &ctx.session, &scope, |user_id| {
            required("user_id", user_id).map_err(|e| ActionError::MissingInput(e.to_string()))?;
            build(EnrollmentRequest {
                user_id: *user_id,
                lesson_id,
            })
        })
        .await;

    // The lesson detail carries the enrollment list.
    let view = refreshed(
        &outcome,
        ctx.client.get_lesson(&ctx.session, lesson_id, &scope),
    )
    .await;
    report(outcome, view, flags)
}
