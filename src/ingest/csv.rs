//! Line-oriented CSV parsing for location seed data.

use serde_json::{Map, Number, Value as JsonValue};

/// Columns coerced to floating point.
const NUMERIC_COLUMNS: &[&str] = &["latitude", "longitude"];
/// Column coerced to boolean.
const BOOLEAN_COLUMN: &str = "isPublic";

/// Parses a header-plus-rows CSV blob into one JSON document per data row.
///
/// The first non-empty line names the columns; names and values are
/// trimmed and rows split on commas. `latitude`/`longitude` values become
/// numbers — unparsable or missing values default to 0.0 — and `isPublic`
/// becomes a boolean via a case-insensitive match against `"true"`. Every
/// other column stays a string. A column missing from a short row is
/// treated as empty. Header-only or empty input yields no rows.
///
/// No required-field validation happens here; rows headed for storage go
/// through the repository, which validates on create.
pub fn parse_csv(text: &str) -> Vec<Map<String, JsonValue>> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let headers: Vec<String> = match lines.next() {
        Some(header) => header.split(',').map(|name| name.trim().to_string()).collect(),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            let mut row = Map::new();
            for (i, header) in headers.iter().enumerate() {
                let value = values.get(i).copied().unwrap_or("");
                row.insert(header.clone(), coerce(header, value));
            }
            row
        })
        .collect()
}

fn coerce(column: &str, value: &str) -> JsonValue {
    if NUMERIC_COLUMNS.contains(&column) {
        let parsed = value.parse::<f64>().unwrap_or(0.0);
        // Non-finite values cannot be represented in JSON; fall back to 0.0.
        return Number::from_f64(parsed)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::from(0.0));
    }
    if column == BOOLEAN_COLUMN {
        return JsonValue::Bool(value.eq_ignore_ascii_case("true"));
    }
    JsonValue::String(value.to_string())
}
