use roll_client::{ActionError, ActionOutcome, ActionRequest};

use crate::context::AppContext;

/// Run a request whose inputs came straight from CLI arguments, so there is
/// no selection to check or clear.
pub async fn perform(
    request: Result<ActionRequest, ActionError>,
    ctx: &AppContext,
) -> ActionOutcome {
    let scope = ctx.view();
    let result = match request {
        Ok(request) => ctx.client.perform_action(&ctx.session, request, &scope).await,
        Err(error) => Err(error),
    };
    match result {
        Ok(success) => ActionOutcome::from_success(success),
        Err(error) => ActionOutcome::from_error(&error),
    }
}
