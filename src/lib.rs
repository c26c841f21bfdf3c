pub mod app;
pub mod domain;
pub mod infra;
pub mod ingest;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::repository::PlaceRepository;
pub use domain::error::{DatabaseError, DbOperation, FieldError, RepoError, ValidationError};
pub use domain::id::PlaceId;
pub use domain::place::{Coordinates, Place, PlaceDocument, PlaceDraft, PlacePatch, PlaceUpdate};
pub use ingest::{parse_csv, seed_if_empty, SAMPLE_CSV};
pub use storage::{MemoryCollection, PgCollection, PlaceCollection};
