pub mod guard;
pub mod provider;

pub use guard::{GuardDecision, SessionGuard};
pub use provider::{Identity, IdentityProvider};

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::Result;

/// Authentication state as seen by every subscriber. `Unknown` is the
/// window between startup and the provider's first report; it is distinct
/// from `SignedOut` so protected views can hold rather than redirect.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Unknown,
    SignedIn(Identity),
    SignedOut,
}

impl AuthStatus {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthStatus::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Tracks the signed-in state over the external identity provider and
/// broadcasts every transition on a watch channel. There is one admin
/// tier: any signed-in identity gets the full admin surface.
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
    status: watch::Sender<AuthStatus>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (status, _) = watch::channel(AuthStatus::Unknown);
        Self { provider, status }
    }

    /// Publishes the first definite auth state: the restored session if the
    /// provider persisted one, `SignedOut` otherwise. A provider failure
    /// here degrades to `SignedOut` rather than blocking the app.
    pub async fn restore(&self) -> AuthStatus {
        let status = match self.provider.current_identity().await {
            Ok(Some(identity)) => {
                tracing::debug!(email = %identity.email, "restored session");
                AuthStatus::SignedIn(identity)
            }
            Ok(None) => AuthStatus::SignedOut,
            Err(error) => {
                tracing::warn!(%error, "session restore failed, treating as signed out");
                AuthStatus::SignedOut
            }
        };
        self.status.send_replace(status.clone());
        status
    }

    /// Credential exchange. On success the shared state flips to
    /// `SignedIn`; on failure it is left untouched so the login form can
    /// show the error inline without bouncing other subscribers.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        match self.provider.sign_in(email, password).await {
            Ok(identity) => {
                tracing::info!(email = %identity.email, "signed in");
                self.status.send_replace(AuthStatus::SignedIn(identity.clone()));
                Ok(identity)
            }
            Err(error) => {
                tracing::warn!(email, %error, "sign-in failed");
                Err(error)
            }
        }
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.provider.sign_out().await?;
        self.status.send_replace(AuthStatus::SignedOut);
        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.status.subscribe()
    }

    pub fn status(&self) -> AuthStatus {
        self.status.borrow().clone()
    }

    /// A guard over this service's auth stream, one per protected mount.
    pub fn guard(&self) -> SessionGuard {
        SessionGuard::new(self.subscribe())
    }
}
