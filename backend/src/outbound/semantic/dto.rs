//! Wire types for the semantic checker's HTTP contract.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{SemanticCheckRequest, SemanticVerdict};

/// Request payload: snake_case keys fixed by the checker's input schema.
#[derive(Debug, Serialize)]
pub(super) struct CheckRequestDto<'a> {
    full_name: &'a str,
    passport_number: &'a str,
    application_date: &'a str,
    amount_paid: f64,
}

impl<'a> From<&'a SemanticCheckRequest> for CheckRequestDto<'a> {
    fn from(request: &'a SemanticCheckRequest) -> Self {
        Self {
            full_name: &request.full_name,
            passport_number: &request.passport_number,
            application_date: &request.application_date,
            amount_paid: request.amount_paid,
        }
    }
}

/// Response payload. Beyond `isValid` and a list of strings, nothing about
/// the shape is guaranteed, so `errors` tolerates being absent.
#[derive(Debug, Deserialize)]
pub(super) struct VerdictDto {
    #[serde(rename = "isValid")]
    is_valid: bool,
    #[serde(default)]
    errors: Vec<String>,
}

impl VerdictDto {
    pub(super) fn into_verdict(self) -> SemanticVerdict {
        SemanticVerdict {
            is_valid: self.is_valid,
            errors: self.errors,
        }
    }
}
