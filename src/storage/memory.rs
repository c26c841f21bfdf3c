//! In-memory collection, for tests and for running without a database.

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::id::PlaceId;
use crate::domain::place::{PlaceDocument, PlaceUpdate};
use crate::storage::collection::PlaceCollection;

/// Collection backed by a process-local map. Iteration follows the map's
/// id order, which is stable for a given contents snapshot.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    documents: RwLock<BTreeMap<PlaceId, PlaceDocument>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaceCollection for MemoryCollection {
    async fn find_all(&self) -> Result<Vec<(PlaceId, PlaceDocument)>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().map(|(id, doc)| (*id, doc.clone())).collect())
    }

    async fn find_by_id(&self, id: PlaceId) -> Result<Option<PlaceDocument>> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn insert_one(&self, document: &PlaceDocument) -> Result<PlaceId> {
        let id = PlaceId::generate();
        self.documents.write().await.insert(id, document.clone());
        Ok(id)
    }

    async fn update_one_by_id(&self, id: PlaceId, update: &PlaceUpdate) -> Result<u64> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(&id) {
            Some(document) => {
                update.changes.apply(document);
                document.updated_at = update.updated_at;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one_by_id(&self, id: PlaceId) -> Result<u64> {
        Ok(self.documents.write().await.remove(&id).map_or(0, |_| 1))
    }
}
