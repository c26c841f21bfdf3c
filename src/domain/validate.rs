//! Required-field validation for place input.

use crate::domain::error::FieldError;
use crate::domain::place::{PlaceDocument, PlaceDraft};

/// The fields validation looks at, borrowed from either a create draft or
/// the merged result of an update.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub name: Option<&'a str>,
    pub address: Option<&'a str>,
}

impl<'a> From<&'a PlaceDraft> for Candidate<'a> {
    fn from(draft: &'a PlaceDraft) -> Self {
        Candidate {
            name: draft.name.as_deref(),
            address: draft.address.as_deref(),
        }
    }
}

impl<'a> From<&'a PlaceDocument> for Candidate<'a> {
    fn from(document: &'a PlaceDocument) -> Self {
        Candidate {
            name: Some(&document.name),
            address: Some(&document.address),
        }
    }
}

/// Checks the required fields and returns every violation found.
///
/// Absent counts the same as present-but-blank. An empty result means the
/// candidate is valid; this function itself never fails.
pub fn validate(candidate: Candidate<'_>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if is_blank(candidate.name) {
        errors.push(FieldError::required("name"));
    }
    if is_blank(candidate.address) {
        errors.push(FieldError::required("address"));
    }
    errors
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate<'a>(name: Option<&'a str>, address: Option<&'a str>) -> Candidate<'a> {
        Candidate { name, address }
    }

    #[test]
    fn complete_candidate_passes() {
        let errors = validate(candidate(Some("Green Acres Farm"), Some("123 Rural Route")));
        assert!(errors.is_empty());
    }

    #[test]
    fn absent_fields_each_get_an_error() {
        let errors = validate(candidate(None, None));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], FieldError::required("name"));
        assert_eq!(errors[1], FieldError::required("address"));
    }

    #[test]
    fn blank_counts_as_missing() {
        for blank in ["", " ", "\t", "  \n "] {
            let errors = validate(candidate(Some(blank), Some("123 Rural Route")));
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "name");
            assert_eq!(errors[0].message, "name is required");
        }
    }

    #[test]
    fn validation_is_deterministic() {
        let a = validate(candidate(Some(" "), None));
        let b = validate(candidate(Some(" "), None));
        assert_eq!(a, b);
    }
}
