//! Action forms: the transient input a view holds between selection and
//! submission.
//!
//! A form refuses to submit without a selection, clears the selection after a
//! success (the "reset the file picker" step), and keeps it after a failure so
//! the user can retry by hand.

use serde_json::Value;

use roll_auth::Session;

use crate::ApiClient;
use crate::action::{ActionRequest, ActionSuccess};
use crate::error::ActionError;
use crate::notify::Notification;
use crate::scope::ViewScope;

/// What the view should do after a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub notification: Notification,
    /// Re-fetch the dependent list view.
    pub refresh: bool,
    /// Success body, when the server returned one.
    pub body: Option<Value>,
}

impl ActionOutcome {
    #[must_use]
    pub fn from_success(success: ActionSuccess) -> Self {
        Self {
            notification: Notification::success(success.message),
            refresh: true,
            body: success.body,
        }
    }

    #[must_use]
    pub fn from_error(error: &ActionError) -> Self {
        Self {
            notification: error.notification(),
            refresh: false,
            body: None,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.notification.is_success()
    }
}

#[derive(Debug, Clone)]
pub struct ActionForm<I> {
    selected: Option<I>,
    missing_input: &'static str,
}

impl<I> ActionForm<I> {
    /// `missing_input` is the warning shown when submitting with nothing selected.
    #[must_use]
    pub const fn new(missing_input: &'static str) -> Self {
        Self {
            selected: None,
            missing_input,
        }
    }

    pub fn select(&mut self, input: I) {
        self.selected = Some(input);
    }

    /// Replace the selection, possibly with nothing.
    #[must_use]
    pub fn with_selection(mut self, input: Option<I>) -> Self {
        self.selected = input;
        self
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&I> {
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Submit the selection as one action.
    ///
    /// `build` turns the selection into a request; it is only called when
    /// something is selected. No request is sent when the selection or the
    /// credential is missing.
    pub async fn submit<F>(
        &mut self,
        client: &ApiClient,
        session: &Session,
        scope: &ViewScope,
        build: F,
    ) -> ActionOutcome
    where
        F: FnOnce(&I) -> Result<ActionRequest, ActionError>,
    {
        let Some(input) = self.selected.as_ref() else {
            tracing::warn!(reason = self.missing_input, "nothing selected; action not sent");
            return ActionOutcome::from_error(&ActionError::MissingInput(
                self.missing_input.to_string(),
            ));
        };

        let result = match build(input) {
            Ok(request) => client.perform_action(session, request, scope).await,
            Err(error) => Err(error),
        };
        self.settle(result)
    }

    fn settle(&mut self, result: Result<ActionSuccess, ActionError>) -> ActionOutcome {
        match result {
            Ok(success) => {
                self.clear();
                ActionOutcome::from_success(success)
            }
            Err(error) => ActionOutcome::from_error(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Level;

    #[test]
    fn settle_success_clears_selection() {
        let mut form = ActionForm::new("No file selected").with_selection(Some(3_i64));
        let outcome = form.settle(Ok(ActionSuccess {
            status: 200,
            message: "ok".into(),
            body: None,
        }));
        assert!(outcome.is_success());
        assert!(outcome.refresh);
        assert!(form.selected().is_none());
    }

    #[test]
    fn settle_failure_keeps_selection() {
        let mut form = ActionForm::new("No file selected").with_selection(Some(3_i64));
        let outcome = form.settle(Err(ActionError::Api {
            status: 400,
            message: "bad input".into(),
        }));
        assert_eq!(outcome.notification.level, Level::Error);
        assert_eq!(outcome.notification.message, "bad input");
        assert!(!outcome.refresh);
        assert_eq!(form.selected(), Some(&3));
    }
}
