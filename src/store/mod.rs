pub mod collection;
pub mod sqlite;

pub use collection::Collection;
pub use sqlite::SqliteDocumentStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// One document in a named collection. The id lives beside the body and is
/// authoritative; an id field embedded in the body is overwritten on read.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub body: Value,
}

/// A content type bound to a named collection. Implementors carry their own
/// id so decoded records stay addressable without a side channel.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// Port to the backing document store.
///
/// `list_where` is a single-field equality match; callers only use it where
/// the store is known to index that field (academic resources by category).
/// Every other read is `list_all` plus caller-side filtering and sorting,
/// which keeps the store free of composite-index requirements.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>>;

    async fn list_where(&self, collection: &str, field: &str, value: &str)
        -> Result<Vec<Document>>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Create with a store-generated id. Returns the new id.
    async fn insert(&self, collection: &str, body: Value) -> Result<String>;

    /// Keyed write of the full body: creates the document if the key is
    /// free, otherwise replaces it outright. Never a field-level merge.
    async fn put(&self, collection: &str, id: &str, body: Value) -> Result<()>;

    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}
