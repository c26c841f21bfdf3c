//! Storage interface consumed by the repository.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::id::PlaceId;
use crate::domain::place::{PlaceDocument, PlaceUpdate};

/// One named document collection of places.
///
/// Implementations own all storage details; faults come back as opaque
/// `anyhow` errors and the repository folds them into its error taxonomy.
/// Single-document operations are assumed atomic by callers; nothing here
/// spans more than one document.
#[async_trait]
pub trait PlaceCollection: Send + Sync {
    /// Every stored document with its identifier, in storage order. The
    /// order carries no contract beyond being stable for a given snapshot.
    async fn find_all(&self) -> Result<Vec<(PlaceId, PlaceDocument)>>;

    /// The document stored under `id`, if any.
    async fn find_by_id(&self, id: PlaceId) -> Result<Option<PlaceDocument>>;

    /// Persists a new document and returns its storage-assigned identifier.
    async fn insert_one(&self, document: &PlaceDocument) -> Result<PlaceId>;

    /// Writes only the fields carried by `update` over the document stored
    /// under `id`. Returns the number of matched documents (0 or 1).
    async fn update_one_by_id(&self, id: PlaceId, update: &PlaceUpdate) -> Result<u64>;

    /// Removes the document stored under `id`. Returns the number removed.
    async fn delete_one_by_id(&self, id: PlaceId) -> Result<u64>;
}
