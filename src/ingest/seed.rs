//! Seeding an empty place collection from CSV sample data.

use serde_json::{Map, Value as JsonValue};
use tracing::{debug, info, warn};

use crate::app::repository::PlaceRepository;
use crate::domain::error::RepoError;
use crate::domain::place::{Coordinates, PlaceDraft};
use crate::ingest::csv::parse_csv;

/// Sample rows shipped with the service.
pub const SAMPLE_CSV: &str = include_str!("../../data/locations.csv");

/// Seeds the collection through the repository when it is empty.
///
/// All writes go through `PlaceRepository::create`, so seeded rows get the
/// same validation and timestamps as API-created ones. Rows failing
/// required-field validation are skipped and logged rather than failing
/// the whole seed; a storage fault aborts it. Returns the number of places
/// inserted (0 when the collection already has data).
pub async fn seed_if_empty(
    repository: &PlaceRepository,
    csv_text: &str,
) -> Result<usize, RepoError> {
    let existing = repository.list().await?;
    if !existing.is_empty() {
        debug!(count = existing.len(), "collection already has data, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0usize;
    for (index, row) in parse_csv(csv_text).into_iter().enumerate() {
        let draft = match row_to_draft(row) {
            Ok(draft) => draft,
            Err(err) => {
                warn!(row = index + 1, error = %err, "skipping malformed seed row");
                continue;
            }
        };
        match repository.create(draft).await {
            Ok(_) => inserted += 1,
            Err(RepoError::Fields(problems)) => {
                warn!(row = index + 1, ?problems, "skipping invalid seed row");
            }
            Err(err) => return Err(err),
        }
    }

    info!(inserted, "seeded place collection");
    Ok(inserted)
}

/// Shapes a parsed CSV row into a create draft: the flat `latitude` and
/// `longitude` columns fold into the nested coordinates object, everything
/// else maps by its wire name.
fn row_to_draft(mut row: Map<String, JsonValue>) -> serde_json::Result<PlaceDraft> {
    let lat = row.remove("latitude").and_then(|v| v.as_f64());
    let lng = row.remove("longitude").and_then(|v| v.as_f64());
    let mut draft: PlaceDraft = serde_json::from_value(JsonValue::Object(row))?;
    if let (Some(lat), Some(lng)) = (lat, lng) {
        draft.coordinates = Some(Coordinates { lat, lng });
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_fold_coordinates_into_the_draft() {
        let rows = parse_csv("name,address,latitude,longitude,isPublic\nAcme,1 Main St,10.5,-20.25,true\n");
        let draft = row_to_draft(rows.into_iter().next().unwrap()).unwrap();
        assert_eq!(draft.name.as_deref(), Some("Acme"));
        assert_eq!(draft.address.as_deref(), Some("1 Main St"));
        assert_eq!(draft.coordinates, Some(Coordinates { lat: 10.5, lng: -20.25 }));
        assert_eq!(draft.is_public, Some(true));
    }

    #[test]
    fn sample_csv_parses_into_valid_drafts() {
        let rows = parse_csv(SAMPLE_CSV);
        assert!(!rows.is_empty());
        for row in rows {
            let draft = row_to_draft(row).unwrap();
            assert!(draft.name.is_some());
            assert!(draft.address.is_some());
        }
    }

    #[test]
    fn unknown_columns_are_ignored_by_the_draft() {
        let mut row = Map::new();
        row.insert("name".to_string(), json!("Acme"));
        row.insert("website".to_string(), json!("https://acme.example"));
        let draft = row_to_draft(row).unwrap();
        assert_eq!(draft.name.as_deref(), Some("Acme"));
    }
}
