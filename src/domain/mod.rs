//! Domain model for the place directory.

pub mod error;
pub mod id;
pub mod place;
pub mod validate;

pub use error::{DatabaseError, DbOperation, FieldError, RepoError, ValidationError};
pub use id::PlaceId;
pub use place::{Coordinates, Place, PlaceDocument, PlaceDraft, PlacePatch, PlaceUpdate};
