use tokio::sync::watch;

use super::AuthStatus;
use crate::route::Route;

/// Outcome of gating a protected mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The auth stream has not reported yet; render nothing.
    Pending,
    /// Signed in; render the protected children.
    Allow,
    /// Signed out; navigate to the login entry point.
    Redirect(Route),
}

/// Gates admin routes on the auth stream. `Unknown` holds the view blank
/// instead of redirecting, so a signed-in admin refreshing the page is
/// never bounced to login while the session restores.
pub struct SessionGuard {
    status: watch::Receiver<AuthStatus>,
}

impl SessionGuard {
    pub fn new(status: watch::Receiver<AuthStatus>) -> Self {
        Self { status }
    }

    /// Decision from the auth state as of right now.
    pub fn check(&self) -> GuardDecision {
        Self::decide(&self.status.borrow())
    }

    /// Waits out the initial `Unknown` window, then decides. Re-emission of
    /// the same signed-in identity keeps resolving to `Allow`; it never
    /// becomes a redirect.
    pub async fn resolve(&mut self) -> GuardDecision {
        match self
            .status
            .wait_for(|status| !matches!(status, AuthStatus::Unknown))
            .await
        {
            Ok(status) => Self::decide(&status),
            // The auth service is gone; fail closed.
            Err(_) => GuardDecision::Redirect(Route::AdminLogin),
        }
    }

    fn decide(status: &AuthStatus) -> GuardDecision {
        match status {
            AuthStatus::Unknown => GuardDecision::Pending,
            AuthStatus::SignedIn(_) => GuardDecision::Allow,
            AuthStatus::SignedOut => GuardDecision::Redirect(Route::AdminLogin),
        }
    }
}
