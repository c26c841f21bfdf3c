//! Storage adapters for the place collection.

pub mod collection;
pub mod memory;
pub mod postgres;

pub use collection::PlaceCollection;
pub use memory::MemoryCollection;
pub use postgres::PgCollection;
