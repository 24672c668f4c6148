//! View scopes: bind in-flight requests to the lifetime of the view that
//! issued them.
//!
//! Dropping or cancelling a scope aborts every request awaited through it
//! (and through its children) with [`ActionError::Cancelled`].

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::ActionError;

#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A nested scope, cancelled together with `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Handle that can cancel this scope from elsewhere (e.g. a Ctrl-C task).
    #[must_use]
    pub fn canceller(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Await `fut` unless the scope is cancelled first.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::Cancelled` if the scope is or becomes cancelled.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, ActionError> {
        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(ActionError::Cancelled),
            out = fut => Ok(out),
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn completes_when_not_cancelled() {
        let scope = ViewScope::new();
        let out = scope.run(async { 7 }).await.expect("should complete");
        assert_eq!(out, 7);
    }

    #[tokio::test]
    async fn cancelled_scope_short_circuits() {
        let scope = ViewScope::new();
        scope.cancel();
        let result = scope.run(tokio::time::sleep(Duration::from_secs(30))).await;
        assert!(matches!(result, Err(ActionError::Cancelled)));
    }

    #[tokio::test]
    async fn parent_cancel_reaches_child() {
        let parent = ViewScope::new();
        let child = parent.child();
        let canceller = parent.canceller();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });
        let result = child.run(tokio::time::sleep(Duration::from_secs(30))).await;
        assert!(matches!(result, Err(ActionError::Cancelled)));
    }

    #[test]
    fn dropping_scope_cancels_handles() {
        let scope = ViewScope::new();
        let handle = scope.canceller();
        drop(scope);
        assert!(handle.is_cancelled());
    }

    #[test]
    fn dropping_child_leaves_parent_alive() {
        let parent = ViewScope::new();
        drop(parent.child());
        assert!(!parent.is_cancelled());
    }
}
