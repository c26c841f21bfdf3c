//! Centralized configuration (environment variables + defaults).

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// HTTP port to listen on (default 4000).
pub fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(4000)
}

/// Collection (table) name holding place documents.
pub fn collection_name() -> String {
    std::env::var("PLACES_COLLECTION").unwrap_or_else(|_| "places".to_string())
}

/// Optional path to a CSV file used to seed an empty collection at startup.
/// When unset, the embedded sample data is used.
pub fn seed_csv_path() -> Option<String> {
    std::env::var("SEED_CSV_PATH").ok()
}
