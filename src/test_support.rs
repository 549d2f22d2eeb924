//! Test-only fixtures, compiled behind the `test-utils` feature.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::auth::{Identity, IdentityProvider};
use crate::error::{AppError, Result};
use crate::store::{Document, DocumentStore};

/// Identity provider with a scripted credential table and an optional
/// pre-restored session.
#[derive(Default)]
pub struct ScriptedIdentityProvider {
    accounts: HashMap<String, String>,
    restored: Option<Identity>,
}

impl ScriptedIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, email: &str, password: &str) -> Self {
        self.accounts.insert(email.to_string(), password.to_string());
        self
    }

    pub fn with_restored(mut self, identity: Identity) -> Self {
        self.restored = Some(identity);
        self
    }
}

pub fn identity(email: &str) -> Identity {
    Identity {
        uid: format!("uid-{}", email),
        email: email.to_string(),
    }
}

#[async_trait]
impl IdentityProvider for ScriptedIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        match self.accounts.get(email) {
            Some(expected) if expected == password => Ok(identity(email)),
            _ => Err(AppError::Auth("invalid email or password".to_string())),
        }
    }

    async fn sign_out(&self) -> Result<()> {
        Ok(())
    }

    async fn current_identity(&self) -> Result<Option<Identity>> {
        Ok(self.restored.clone())
    }
}

/// Wraps a real store and fails the next `n` operations with a store
/// error, then passes everything through again.
pub struct FailingStore {
    inner: Arc<dyn DocumentStore>,
    remaining_failures: AtomicUsize,
}

impl FailingStore {
    pub fn new(inner: Arc<dyn DocumentStore>) -> Self {
        Self {
            inner,
            remaining_failures: AtomicUsize::new(0),
        }
    }

    pub fn fail_next(&self, n: usize) {
        self.remaining_failures.store(n, Ordering::SeqCst);
    }

    fn trip(&self) -> Result<()> {
        let armed = self
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if armed {
            Err(AppError::Store("injected store failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>> {
        self.trip()?;
        self.inner.list_all(collection).await
    }

    async fn list_where(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>> {
        self.trip()?;
        self.inner.list_where(collection, field, value).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        self.trip()?;
        self.inner.get(collection, id).await
    }

    async fn insert(&self, collection: &str, body: Value) -> Result<String> {
        self.trip()?;
        self.inner.insert(collection, body).await
    }

    async fn put(&self, collection: &str, id: &str, body: Value) -> Result<()> {
        self.trip()?;
        self.inner.put(collection, id, body).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.trip()?;
        self.inner.delete(collection, id).await
    }
}
