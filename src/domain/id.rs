//! Opaque external identifier for stored places.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::ValidationError;

/// Native identifier of a stored place.
///
/// The API boundary only ever sees the canonical string encoding; decode
/// caller-supplied input up front so a malformed value never reaches the
/// storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(Uuid);

impl PlaceId {
    /// Decodes the external string form, rejecting anything that is not a
    /// syntactically valid identifier for the backing store.
    pub fn decode(raw: &str) -> Result<PlaceId, ValidationError> {
        Uuid::try_parse(raw)
            .map(PlaceId)
            .map_err(|_| ValidationError::invalid_id())
    }

    /// Fresh identifier; only storage adapters assign these.
    pub fn generate() -> PlaceId {
        PlaceId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PlaceId {
    fn from(id: Uuid) -> Self {
        PlaceId(id)
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
