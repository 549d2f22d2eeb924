use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use super::{Document, DocumentStore, Record};
use crate::error::{AppError, Result};

/// Typed accessor for one collection, parameterized by its record schema.
/// All reads decode through the schema and stamp the authoritative id; all
/// writes serialize the record in full.
pub struct Collection<T: Record> {
    store: Arc<dyn DocumentStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _record: PhantomData,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        T::COLLECTION
    }

    pub async fn list_all(&self) -> Result<Vec<T>> {
        let documents = self.store.list_all(T::COLLECTION).await?;
        documents.into_iter().map(Self::decode).collect()
    }

    pub async fn list_where(&self, field: &str, value: &str) -> Result<Vec<T>> {
        let documents = self.store.list_where(T::COLLECTION, field, value).await?;
        documents.into_iter().map(Self::decode).collect()
    }

    pub async fn get(&self, id: &str) -> Result<Option<T>> {
        match self.store.get(T::COLLECTION, id).await? {
            Some(document) => Ok(Some(Self::decode(document)?)),
            None => Ok(None),
        }
    }

    /// Creates when `id` is `None`, replaces in full when `Some`. Returns
    /// the record carrying its authoritative id.
    pub async fn upsert(&self, id: Option<&str>, mut record: T) -> Result<T> {
        match id {
            Some(id) => {
                record.set_id(id.to_string());
                let body = Self::encode(&record)?;
                self.store.put(T::COLLECTION, id, body).await?;
            }
            None => {
                let body = Self::encode(&record)?;
                let id = self.store.insert(T::COLLECTION, body).await?;
                record.set_id(id);
            }
        }
        Ok(record)
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.store.delete(T::COLLECTION, id).await
    }

    fn decode(document: Document) -> Result<T> {
        let Document { id, body } = document;
        let mut record: T = serde_json::from_value(body)
            .map_err(|e| AppError::Decode(format!("{}/{}: {}", T::COLLECTION, id, e)))?;
        record.set_id(id);
        Ok(record)
    }

    fn encode(record: &T) -> Result<Value> {
        serde_json::to_value(record)
            .map_err(|e| AppError::Decode(format!("{}: {}", T::COLLECTION, e)))
    }
}
