//! Place record model: stored document, API-facing record, create draft,
//! and typed update patch.
//!
//! Wire names follow the original collection layout (`isPublic`,
//! `createdAt`, `updatedAt`), so serialized documents are also the exact
//! JSON the REST surface speaks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::id::PlaceId;

/// Geographic point attached to a place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// The stored form of a place: every field except the identifier, which the
/// collection assigns and keys on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDocument {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_is_public() -> bool {
    true
}

/// A place as returned to callers: the stored document plus its identifier
/// in string form, so transport-layer serialization stays uniform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Place {
    pub id: String,
    #[serde(flatten)]
    pub document: PlaceDocument,
}

impl Place {
    pub fn from_parts(id: PlaceId, document: PlaceDocument) -> Self {
        Self {
            id: id.to_string(),
            document,
        }
    }
}

/// Create input. Every field is optional so that absent and blank required
/// fields both reach the validator instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PlaceDraft {
    /// Stored document for a validated draft; both timestamps start equal.
    ///
    /// String fields are stored trimmed. Missing required fields collapse to
    /// empty strings, which validation has already ruled out for any draft
    /// that gets this far.
    pub fn into_document(self, now: DateTime<Utc>) -> PlaceDocument {
        PlaceDocument {
            name: self.name.as_deref().map(trimmed).unwrap_or_default(),
            address: self.address.as_deref().map(trimmed).unwrap_or_default(),
            city: self.city.as_deref().map(trimmed),
            state: self.state.as_deref().map(trimmed),
            zip: self.zip.as_deref().map(trimmed),
            coordinates: self.coordinates,
            category: self.category,
            is_public: self.is_public.unwrap_or(true),
            description: self.description.as_deref().map(trimmed),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial set of field changes applied to an existing place. Serialization
/// skips absent fields, so the serialized patch is exactly what a partial
/// storage write should touch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlacePatch {
    /// Trims the string fields that are present, mirroring how drafts are
    /// stored. Normalize once before merging or persisting a patch.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.as_deref().map(trimmed);
        self.address = self.address.as_deref().map(trimmed);
        self.city = self.city.as_deref().map(trimmed);
        self.state = self.state.as_deref().map(trimmed);
        self.zip = self.zip.as_deref().map(trimmed);
        self.description = self.description.as_deref().map(trimmed);
        self
    }

    /// Overlays the patch on an existing document. Fields absent from the
    /// patch keep their stored values; timestamps are untouched here.
    pub fn apply(&self, document: &mut PlaceDocument) {
        if let Some(name) = &self.name {
            document.name = name.clone();
        }
        if let Some(address) = &self.address {
            document.address = address.clone();
        }
        if let Some(city) = &self.city {
            document.city = Some(city.clone());
        }
        if let Some(state) = &self.state {
            document.state = Some(state.clone());
        }
        if let Some(zip) = &self.zip {
            document.zip = Some(zip.clone());
        }
        if let Some(coordinates) = self.coordinates {
            document.coordinates = Some(coordinates);
        }
        if let Some(category) = &self.category {
            document.category = Some(category.clone());
        }
        if let Some(is_public) = self.is_public {
            document.is_public = is_public;
        }
        if let Some(description) = &self.description {
            document.description = Some(description.clone());
        }
    }
}

/// What an update persists: the caller-supplied changes plus the refreshed
/// modification timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceUpdate {
    #[serde(flatten)]
    pub changes: PlacePatch,
    pub updated_at: DateTime<Utc>,
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}
