//! CRUD data access for the place collection.
//!
//! Every read and write of the collection goes through this repository: it
//! decodes caller-supplied identifiers, runs required-field validation,
//! stamps creation/update timestamps, and folds storage faults into the
//! error taxonomy. The underlying cause of a storage fault is logged here;
//! callers only ever see the opaque `DatabaseError`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error};

use crate::domain::error::{DatabaseError, DbOperation, RepoError, ValidationError};
use crate::domain::id::PlaceId;
use crate::domain::place::{Place, PlaceDraft, PlacePatch, PlaceUpdate};
use crate::domain::validate::{validate, Candidate};
use crate::storage::PlaceCollection;

/// Repository over one place collection. Stateless apart from the
/// collection handle; each operation is an independent unit of work.
#[derive(Clone)]
pub struct PlaceRepository {
    collection: Arc<dyn PlaceCollection>,
}

impl PlaceRepository {
    pub fn new(collection: Arc<dyn PlaceCollection>) -> Self {
        Self { collection }
    }

    /// All stored places, in storage order.
    pub async fn list(&self) -> Result<Vec<Place>, RepoError> {
        let documents = self.collection.find_all().await.map_err(|err| {
            error!(error = %err, "failed to list places");
            DatabaseError::new(DbOperation::Fetch, "failed to fetch places")
        })?;
        debug!(count = documents.len(), "listed places");
        Ok(documents
            .into_iter()
            .map(|(id, document)| Place::from_parts(id, document))
            .collect())
    }

    /// The place stored under the given external id.
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Place, RepoError> {
        let id = PlaceId::decode(raw_id)?;
        let document = self.collection.find_by_id(id).await.map_err(|err| {
            error!(%id, error = %err, "failed to fetch place");
            DatabaseError::new(DbOperation::Fetch, "failed to fetch place")
        })?;
        match document {
            Some(document) => Ok(Place::from_parts(id, document)),
            None => {
                debug!(%id, "place not found");
                Err(ValidationError::not_found().into())
            }
        }
    }

    /// Validates and persists a new place. On success the stored record
    /// comes back with its assigned id and `createdAt == updatedAt`.
    pub async fn create(&self, draft: PlaceDraft) -> Result<Place, RepoError> {
        let problems = validate(Candidate::from(&draft));
        if !problems.is_empty() {
            debug!(problems = problems.len(), "rejected place draft");
            return Err(RepoError::Fields(problems));
        }

        let document = draft.into_document(Utc::now());
        let id = self.collection.insert_one(&document).await.map_err(|err| {
            error!(error = %err, "failed to insert place");
            DatabaseError::new(DbOperation::Insert, "failed to add place")
        })?;
        debug!(%id, "created place");
        Ok(Place::from_parts(id, document))
    }

    /// Applies a partial update to an existing place.
    ///
    /// The merged result of the stored document and the patch is validated,
    /// so a partial update cannot blank a required field. Only the supplied
    /// fields plus the refreshed `updatedAt` are written; the post-update
    /// record is returned.
    pub async fn update(&self, raw_id: &str, patch: PlacePatch) -> Result<Place, RepoError> {
        let id = PlaceId::decode(raw_id)?;
        let existing = self
            .collection
            .find_by_id(id)
            .await
            .map_err(|err| {
                error!(%id, error = %err, "failed to fetch place for update");
                DatabaseError::new(DbOperation::Update, "failed to update place")
            })?
            .ok_or_else(ValidationError::not_found)?;

        let patch = patch.normalized();
        let mut merged = existing;
        patch.apply(&mut merged);
        let problems = validate(Candidate::from(&merged));
        if !problems.is_empty() {
            debug!(%id, problems = problems.len(), "rejected place update");
            return Err(RepoError::Fields(problems));
        }

        let update = PlaceUpdate {
            changes: patch,
            updated_at: Utc::now(),
        };
        let matched = self
            .collection
            .update_one_by_id(id, &update)
            .await
            .map_err(|err| {
                error!(%id, error = %err, "failed to update place");
                DatabaseError::new(DbOperation::Update, "failed to update place")
            })?;
        if matched == 0 {
            // Deleted between the existence check and the write.
            return Err(ValidationError::not_found().into());
        }

        merged.updated_at = update.updated_at;
        debug!(%id, "updated place");
        Ok(Place::from_parts(id, merged))
    }

    /// Removes the place stored under the given external id. Returns whether
    /// a record was actually removed; an unknown id fails as not-found.
    pub async fn delete(&self, raw_id: &str) -> Result<bool, RepoError> {
        let id = PlaceId::decode(raw_id)?;
        let existing = self.collection.find_by_id(id).await.map_err(|err| {
            error!(%id, error = %err, "failed to fetch place for delete");
            DatabaseError::new(DbOperation::Delete, "failed to delete place")
        })?;
        if existing.is_none() {
            debug!(%id, "place not found");
            return Err(ValidationError::not_found().into());
        }

        let removed = self
            .collection
            .delete_one_by_id(id)
            .await
            .map_err(|err| {
                error!(%id, error = %err, "failed to delete place");
                DatabaseError::new(DbOperation::Delete, "failed to delete place")
            })?;
        debug!(%id, removed, "deleted place");
        Ok(removed > 0)
    }
}
