//! Form-field identifiers and per-field error collections.
//!
//! Validation failures are reported against the wire names the submission
//! form uses, with a `root` bucket for findings that cannot be attributed to
//! a single field.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

/// Fields of the application submission form.
///
/// Ordering follows the form layout so collected errors serialise in a
/// stable, reader-friendly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Record identifier, present on edit submissions only.
    Id,
    /// Applicant's full name.
    FullName,
    /// Applicant's passport number.
    PassportNumber,
    /// Applicant's postal address.
    Address,
    /// Date the application was lodged.
    ApplicationDate,
    /// Fee amount received.
    AmountPaid,
    /// Bucket for errors that belong to no single field.
    Root,
}

impl Field {
    /// Wire name used in error payloads and submission JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FullName => "fullName",
            Self::PassportNumber => "passportNumber",
            Self::Address => "address",
            Self::ApplicationDate => "applicationDate",
            Self::AmountPaid => "amountPaid",
            Self::Root => "root",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error messages collected per field during validation.
///
/// All failing fields are reported together; validation never short-circuits
/// on the first failure. Messages attributed to the same field accumulate in
/// arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<Field, Vec<String>>,
}

impl FieldErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding a single root-level message.
    pub fn root(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(Field::Root, message);
        errors
    }

    /// Append a message to a field's bucket.
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.entries.entry(field).or_default().push(message.into());
    }

    /// True when no field has collected a message.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Messages collected for one field, empty when the field passed.
    pub fn messages(&self, field: Field) -> &[String] {
        self.entries.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Fields that collected at least one message, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    /// Render the collection as a JSON object keyed by wire field name.
    pub fn as_json(&self) -> Value {
        let mut object = Map::new();
        for (field, messages) in &self.entries {
            object.insert(
                field.as_str().to_owned(),
                Value::Array(messages.iter().cloned().map(Value::String).collect()),
            );
        }
        Value::Object(object)
    }
}
