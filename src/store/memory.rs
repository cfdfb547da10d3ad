use super::{ensure_mutable, ensure_object, Collection, DocumentStore, StoredDocument};
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{OnceCell, RwLock};
use uuid::Uuid;

/// In-process document store.
///
/// Mirrors the PostgreSQL backend's semantics (lazy one-time connect,
/// append-only inquiry collections) so handlers behave the same against
/// either. Write failures can be switched on to exercise error paths.
#[derive(Default)]
pub struct MemoryDocumentStore {
    connected: OnceCell<()>,
    connections_opened: AtomicUsize,
    fail_writes: AtomicBool,
    collections: RwLock<HashMap<Collection, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times a connection was actually established.
    pub fn connections_opened(&self) -> usize {
        self.connections_opened.load(Ordering::SeqCst)
    }

    /// Make every subsequent write fail, as an unreachable database would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            bail!("Document store unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn connect(&self) -> Result<()> {
        self.connected
            .get_or_init(|| async {
                // Yield so racing callers observe an in-progress initialization
                tokio::task::yield_now().await;
                self.connections_opened.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        Ok(())
    }

    async fn create(&self, collection: Collection, body: Value) -> Result<StoredDocument> {
        self.connect().await?;
        self.check_writable()?;
        ensure_object(&body)?;

        let now = Utc::now();
        let document = StoredDocument {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body,
        };
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(document.clone());

        Ok(document)
    }

    async fn create_many(
        &self,
        collection: Collection,
        bodies: Vec<Value>,
    ) -> Result<Vec<StoredDocument>> {
        self.connect().await?;
        self.check_writable()?;
        for body in &bodies {
            ensure_object(body)?;
        }

        let now = Utc::now();
        let documents: Vec<StoredDocument> = bodies
            .into_iter()
            .map(|body| StoredDocument {
                id: Uuid::new_v4(),
                created_at: now,
                updated_at: now,
                body,
            })
            .collect();

        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .extend(documents.iter().cloned());

        Ok(documents)
    }

    async fn count(&self, collection: Collection) -> Result<u64> {
        self.connect().await?;
        Ok(self
            .collections
            .read()
            .await
            .get(&collection)
            .map_or(0, |docs| docs.len() as u64))
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<StoredDocument>> {
        self.connect().await?;
        Ok(self
            .collections
            .read()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<StoredDocument>> {
        self.connect().await?;
        Ok(self
            .collections
            .read()
            .await
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id).cloned()))
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
    ) -> Result<Option<StoredDocument>> {
        ensure_mutable(collection)?;
        self.connect().await?;
        self.check_writable()?;
        ensure_object(&body)?;

        let mut collections = self.collections.write().await;
        let Some(document) = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
        else {
            return Ok(None);
        };

        document.body = body;
        document.updated_at = Utc::now();
        Ok(Some(document.clone()))
    }

    async fn delete_by_id(&self, collection: Collection, id: Uuid) -> Result<bool> {
        ensure_mutable(collection)?;
        self.connect().await?;
        self.check_writable()?;

        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        Ok(docs.len() < before)
    }

    async fn close(&self) {}

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_concurrent_connect_initializes_once() {
        let store = Arc::new(MemoryDocumentStore::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.connect().await })
            })
            .collect();
        for handle in handles {
            handle.await.expect("join").expect("connect");
        }

        assert_eq!(store.connections_opened(), 1);
    }

    #[tokio::test]
    async fn test_operations_connect_lazily() {
        let store = MemoryDocumentStore::new();
        assert_eq!(store.connections_opened(), 0);

        store.count(Collection::Donors).await.expect("count");
        store.count(Collection::Donors).await.expect("count");

        assert_eq!(store.connections_opened(), 1);
    }

    #[tokio::test]
    async fn test_create_is_scoped_to_one_collection() {
        let store = MemoryDocumentStore::new();

        store
            .create(Collection::Volunteers, json!({"name": "Jane"}))
            .await
            .expect("create");

        for collection in Collection::ALL {
            let expected = u64::from(collection == Collection::Volunteers);
            assert_eq!(store.count(collection).await.expect("count"), expected);
        }
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let store = MemoryDocumentStore::new();
        store
            .create_many(
                Collection::TeamMembers,
                vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})],
            )
            .await
            .expect("create_many");

        let docs = store.find_all(Collection::TeamMembers).await.expect("list");
        let order: Vec<_> = docs.iter().map(|d| d.body["n"].as_i64().unwrap()).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_and_delete_team_member() {
        let store = MemoryDocumentStore::new();
        let doc = store
            .create(Collection::TeamMembers, json!({"name": "Old"}))
            .await
            .expect("create");

        let updated = store
            .update_by_id(Collection::TeamMembers, doc.id, json!({"name": "New"}))
            .await
            .expect("update")
            .expect("present");
        assert_eq!(updated.body["name"], "New");
        assert_eq!(updated.created_at, doc.created_at);

        assert!(store.delete_by_id(Collection::TeamMembers, doc.id).await.expect("delete"));
        assert!(!store.delete_by_id(Collection::TeamMembers, doc.id).await.expect("delete"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let store = MemoryDocumentStore::new();
        let result = store
            .update_by_id(Collection::TeamMembers, Uuid::new_v4(), json!({}))
            .await
            .expect("update");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_inquiry_collections_are_append_only() {
        let store = MemoryDocumentStore::new();
        let doc = store
            .create(Collection::Donors, json!({"amount": 10}))
            .await
            .expect("create");

        assert!(store
            .update_by_id(Collection::Donors, doc.id, json!({"amount": 20}))
            .await
            .is_err());
        assert!(store.delete_by_id(Collection::Donors, doc.id).await.is_err());
        assert_eq!(store.count(Collection::Donors).await.expect("count"), 1);
    }

    #[tokio::test]
    async fn test_fail_writes_blocks_inserts_only() {
        let store = MemoryDocumentStore::new();
        store.set_fail_writes(true);

        assert!(store.create(Collection::Contacts, json!({})).await.is_err());
        assert_eq!(store.count(Collection::Contacts).await.expect("count"), 0);

        store.set_fail_writes(false);
        assert!(store.create(Collection::Contacts, json!({})).await.is_ok());
    }
}
