use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An authenticated identity as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

/// Port to the external identity provider. The provider owns credential
/// storage, verification, and session persistence; this layer only tracks
/// the resulting signed-in state.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchanges email/password credentials for an identity.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity>;

    async fn sign_out(&self) -> Result<()>;

    /// The identity restored from a persisted session, if any.
    async fn current_identity(&self) -> Result<Option<Identity>>;
}
