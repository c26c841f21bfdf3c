pub mod repository;

pub use repository::PlaceRepository;
