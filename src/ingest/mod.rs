//! CSV parsing and collection seeding.

pub mod csv;
pub mod seed;

pub use csv::parse_csv;
pub use seed::{seed_if_empty, SAMPLE_CSV};
