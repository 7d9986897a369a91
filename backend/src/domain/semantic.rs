//! Attribution of free-text semantic findings onto form fields.
//!
//! The semantic checker returns human-readable sentences with no guaranteed
//! vocabulary, so attribution is a best-effort keyword scan. A finding that
//! mentions more than one keyword lands on the first match in priority
//! order, which can misattribute combined findings such as "the date and
//! amount are inconsistent"; anything with no keyword goes to the root
//! bucket.

use super::fields::{Field, FieldErrors};

/// Message surfaced when the semantic checker cannot be reached.
pub const SEMANTIC_UNAVAILABLE_MESSAGE: &str =
    "AI validation service is unavailable. Please try again later.";

/// Keyword table scanned in priority order; first match wins.
const KEYWORD_FIELDS: [(&str, Field); 4] = [
    ("name", Field::FullName),
    ("passport", Field::PassportNumber),
    ("date", Field::ApplicationDate),
    ("amount", Field::AmountPaid),
];

/// Map each finding onto a form field via case-insensitive substring search.
///
/// Findings attributed to the same field accumulate in arrival order.
pub fn attribute_findings(findings: &[String]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for finding in findings {
        let lowered = finding.to_lowercase();
        let field = KEYWORD_FIELDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map_or(Field::Root, |(_, field)| *field);
        errors.push(field, finding.clone());
    }
    errors
}
