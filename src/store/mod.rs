//! Document persistence.
//!
//! Every entity lives in its own collection. A collection holds schemaless
//! JSON documents plus the bookkeeping columns every document gets (`id`,
//! `createdAt`, `updatedAt`).
//!
//! Two backends implement [`DocumentStore`]:
//!
//! - [`PgDocumentStore`]: PostgreSQL, one JSONB table per collection. The pool
//!   is created on first use and shared for the process lifetime.
//! - [`MemoryDocumentStore`]: process-local maps, used by tests and when the
//!   site runs without `DATABASE_URL`.

mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// The collections the site persists to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Contacts,
    Donors,
    Volunteers,
    Partners,
    TeamMembers,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Contacts,
        Collection::Donors,
        Collection::Volunteers,
        Collection::Partners,
        Collection::TeamMembers,
    ];

    /// Table / collection name in the backing store.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Contacts => "contacts",
            Collection::Donors => "donors",
            Collection::Volunteers => "volunteers",
            Collection::Partners => "partners",
            Collection::TeamMembers => "team_members",
        }
    }

    /// Inquiry collections are append-only; only the team roster is editable.
    pub fn is_mutable(self) -> bool {
        matches!(self, Collection::TeamMembers)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A persisted document and its bookkeeping fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: Value,
}

impl StoredDocument {
    /// Flatten into a single JSON object (`id`, `createdAt`, `updatedAt` + body fields).
    pub fn to_json(&self) -> Value {
        let mut object = match &self.body {
            Value::Object(map) => map.clone(),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other.clone());
                map
            }
        };
        object.insert("id".to_string(), Value::String(self.id.to_string()));
        object.insert(
            "createdAt".to_string(),
            Value::String(self.created_at.to_rfc3339()),
        );
        object.insert(
            "updatedAt".to_string(),
            Value::String(self.updated_at.to_rfc3339()),
        );
        Value::Object(object)
    }

    /// Deserialize the flattened form into a typed record.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.to_json())?)
    }
}

/// Serialize a record into a document body, dropping bookkeeping keys the
/// store owns.
pub fn to_body<T: Serialize>(record: &T) -> Result<Value> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut value {
        map.remove("id");
        map.remove("createdAt");
        map.remove("updatedAt");
    }
    Ok(value)
}

/// Entity-scoped document operations.
///
/// `connect` is idempotent: callers racing before the first connection
/// resolves share one initialization. Every other operation connects on
/// demand, so calling `connect` up front is optional.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn connect(&self) -> Result<()>;

    async fn create(&self, collection: Collection, body: Value) -> Result<StoredDocument>;

    async fn create_many(
        &self,
        collection: Collection,
        bodies: Vec<Value>,
    ) -> Result<Vec<StoredDocument>>;

    async fn count(&self, collection: Collection) -> Result<u64>;

    /// All documents, oldest first.
    async fn find_all(&self, collection: Collection) -> Result<Vec<StoredDocument>>;

    async fn find_by_id(&self, collection: Collection, id: Uuid)
        -> Result<Option<StoredDocument>>;

    /// Replace the body of a document. `None` if no document has that id.
    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
    ) -> Result<Option<StoredDocument>>;

    /// Returns whether a document was removed.
    async fn delete_by_id(&self, collection: Collection, id: Uuid) -> Result<bool>;

    /// Release the connection. Later calls reconnect lazily.
    async fn close(&self);

    fn backend_name(&self) -> &'static str;
}

pub(crate) fn ensure_mutable(collection: Collection) -> Result<()> {
    if !collection.is_mutable() {
        bail!("Collection '{}' is append-only", collection);
    }
    Ok(())
}

pub(crate) fn ensure_object(body: &Value) -> Result<()> {
    if !body.is_object() {
        bail!("Documents must be JSON objects");
    }
    Ok(())
}
