//! Application record model and structural validation.
//!
//! Structural validation is the first stage of the submission pipeline: it
//! checks shape, format, and range without consulting any external service.
//! Every field is checked independently and all failures are collected, so a
//! submission form can surface them together.

use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use super::fields::{Field, FieldErrors};

/// Minimum character count for an applicant's full name.
pub const FULL_NAME_MIN: usize = 3;
/// Minimum character count for an applicant's address.
pub const ADDRESS_MIN: usize = 5;
/// Date format accepted for `applicationDate` and used on every outbound
/// rendering of the field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Pattern accepted for passport numbers. The second alternation branch is
/// anchored at the end only, so a conforming suffix after arbitrary leading
/// characters is accepted.
const PASSPORT_NUMBER_PATTERN: &str =
    r"^[A-PR-WYa-pr-wy][1-9]\d\s?\d{4,5}$|[A-PR-WYa-pr-wy][1-9]\d{5,6}$";

static PASSPORT_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn passport_number_regex() -> &'static Regex {
    PASSPORT_NUMBER_RE.get_or_init(|| {
        Regex::new(PASSPORT_NUMBER_PATTERN)
            .unwrap_or_else(|error| panic!("passport number regex failed to compile: {error}"))
    })
}

/// Stable identifier assigned to a committed application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

/// Validation errors returned when constructing an [`ApplicationId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationIdError {
    /// Identifier is empty after trimming whitespace.
    #[error("application id must not be empty")]
    Empty,
    /// Identifier contains leading or trailing whitespace.
    #[error("application id must not contain surrounding whitespace")]
    Padded,
}

impl ApplicationId {
    /// Validate and construct an identifier from caller-supplied input.
    pub fn new(value: impl Into<String>) -> Result<Self, ApplicationIdError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ApplicationIdError::Empty);
        }
        if raw.trim() != raw {
            return Err(ApplicationIdError::Padded);
        }
        Ok(Self(raw))
    }

    /// Generate a fresh identifier for a newly inserted record.
    pub fn generate() -> Self {
        Self(format!("app-{}", Uuid::new_v4()))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ApplicationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<ApplicationId> for String {
    fn from(value: ApplicationId) -> Self {
        let ApplicationId(raw) = value;
        raw
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = ApplicationIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The validated scalar fields of an application, without identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationFields {
    /// Applicant's full name, at least [`FULL_NAME_MIN`] characters.
    pub full_name: String,
    /// Passport number matching the accepted pattern.
    pub passport_number: String,
    /// Postal address, at least [`ADDRESS_MIN`] characters.
    pub address: String,
    /// Date the application was lodged.
    pub application_date: NaiveDate,
    /// Fee amount received, strictly positive.
    pub amount_paid: f64,
}

/// A committed visa-fee application record.
///
/// ## Invariants
/// - `id` is unique across the store while the record is present and never
///   changes once assigned.
/// - `fields` satisfied structural validation when the record was committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Store-assigned identifier.
    pub id: ApplicationId,
    /// The five applicant-facing fields.
    #[serde(flatten)]
    pub fields: ApplicationFields,
}

impl Application {
    /// Assemble a record from an identifier and validated fields.
    pub fn new(id: ApplicationId, fields: ApplicationFields) -> Self {
        Self { id, fields }
    }
}

/// Validate an arbitrary JSON value as a new-application submission.
///
/// All fields are checked; every failure is collected into [`FieldErrors`]
/// rather than stopping at the first. `amountPaid` accepts a JSON number or
/// a numeric string, which is coerced before the positivity check.
///
/// # Errors
///
/// Returns the collected per-field messages when any field is missing,
/// mistyped, or out of range.
pub fn validate_application(input: &Value) -> Result<ApplicationFields, FieldErrors> {
    let Some(object) = input.as_object() else {
        return Err(FieldErrors::root("application input must be a JSON object"));
    };

    let mut errors = FieldErrors::new();
    match collect_fields(object, &mut errors) {
        Some(fields) if errors.is_empty() => Ok(fields),
        _ => Err(errors),
    }
}

/// Validate an arbitrary JSON value as an edit submission carrying an `id`.
///
/// # Errors
///
/// Returns the collected per-field messages, including an `id` entry when
/// the identifier is missing or blank.
pub fn validate_application_update(
    input: &Value,
) -> Result<(ApplicationId, ApplicationFields), FieldErrors> {
    let Some(object) = input.as_object() else {
        return Err(FieldErrors::root("application input must be a JSON object"));
    };

    let mut errors = FieldErrors::new();
    let id = match object.get(Field::Id.as_str()) {
        Some(Value::String(raw)) => match ApplicationId::new(raw.clone()) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(Field::Id, "Application id is required.");
                None
            }
        },
        None | Some(Value::Null) => {
            errors.push(Field::Id, "Application id is required.");
            None
        }
        Some(_) => {
            errors.push(Field::Id, "Application id must be a string.");
            None
        }
    };
    let fields = collect_fields(object, &mut errors);

    match (id, fields) {
        (Some(id), Some(fields)) if errors.is_empty() => Ok((id, fields)),
        _ => Err(errors),
    }
}

fn collect_fields(
    object: &Map<String, Value>,
    errors: &mut FieldErrors,
) -> Option<ApplicationFields> {
    let full_name = string_field(object, Field::FullName, "Full name", errors).and_then(|name| {
        if name.chars().count() < FULL_NAME_MIN {
            errors.push(
                Field::FullName,
                format!("Full name must be at least {FULL_NAME_MIN} characters."),
            );
            None
        } else {
            Some(name)
        }
    });

    let passport_number =
        string_field(object, Field::PassportNumber, "Passport number", errors).and_then(|value| {
            if passport_number_regex().is_match(&value) {
                Some(value)
            } else {
                errors.push(Field::PassportNumber, "Please enter a valid passport number.");
                None
            }
        });

    let address = string_field(object, Field::Address, "Address", errors).and_then(|value| {
        if value.chars().count() < ADDRESS_MIN {
            errors.push(
                Field::Address,
                format!("Address must be at least {ADDRESS_MIN} characters."),
            );
            None
        } else {
            Some(value)
        }
    });

    let application_date = date_field(object, errors);
    let amount_paid = amount_field(object, errors);

    Some(ApplicationFields {
        full_name: full_name?,
        passport_number: passport_number?,
        address: address?,
        application_date: application_date?,
        amount_paid: amount_paid?,
    })
}

fn string_field(
    object: &Map<String, Value>,
    field: Field,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match object.get(field.as_str()) {
        Some(Value::String(value)) => Some(value.clone()),
        None | Some(Value::Null) => {
            errors.push(field, format!("{label} is required."));
            None
        }
        Some(_) => {
            errors.push(field, format!("{label} must be a string."));
            None
        }
    }
}

fn date_field(object: &Map<String, Value>, errors: &mut FieldErrors) -> Option<NaiveDate> {
    match object.get(Field::ApplicationDate.as_str()) {
        Some(Value::String(raw)) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(
                    Field::ApplicationDate,
                    "Application date must be a yyyy-MM-dd date.",
                );
                None
            }
        },
        None | Some(Value::Null) => {
            errors.push(Field::ApplicationDate, "An application date is required.");
            None
        }
        Some(_) => {
            errors.push(
                Field::ApplicationDate,
                "Application date must be a yyyy-MM-dd date.",
            );
            None
        }
    }
}

fn amount_field(object: &Map<String, Value>, errors: &mut FieldErrors) -> Option<f64> {
    let coerced = match object.get(Field::AmountPaid.as_str()) {
        None | Some(Value::Null) => {
            errors.push(Field::AmountPaid, "Amount paid is required.");
            return None;
        }
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(raw)) => raw.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match coerced {
        Some(amount) if amount.is_finite() => {
            if amount > 0.0 {
                Some(amount)
            } else {
                errors.push(Field::AmountPaid, "Amount must be greater than 0.");
                None
            }
        }
        _ => {
            errors.push(Field::AmountPaid, "Amount paid must be a number.");
            None
        }
    }
}
