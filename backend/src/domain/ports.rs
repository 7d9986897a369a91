//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe how the domain expects to interact with adapters
//! (the application store, the semantic checker, view-refresh signalling).
//! Driving ports describe the operations the presentation layer consumes.
//! Each driven trait exposes strongly typed errors so adapters map their
//! failures into predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::application::{Application, ApplicationFields, ApplicationId, DATE_FORMAT};
use super::error::Error;

/// Errors surfaced by the application-store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationStoreError {
    /// Infrastructure failure inside the store backend.
    #[error("application store backend failure: {message}")]
    Backend {
        /// Adapter-supplied diagnostic.
        message: String,
    },
}

impl ApplicationStoreError {
    /// Helper for backend-level failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Persistence port for application records.
///
/// The store owns identifier assignment: [`ApplicationRepository::insert`]
/// returns the committed record with its fresh id, and newly inserted
/// records appear first in [`ApplicationRepository::list`].
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// All records, most recently inserted first.
    async fn list(&self) -> Result<Vec<Application>, ApplicationStoreError>;

    /// Fetch one record by identifier.
    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, ApplicationStoreError>;

    /// Commit validated fields as a new record, assigning its identifier.
    async fn insert(
        &self,
        fields: ApplicationFields,
    ) -> Result<Application, ApplicationStoreError>;

    /// Replace the fields of an existing record, keeping its identifier.
    ///
    /// Returns `None` when no record carries the identifier.
    async fn update(
        &self,
        id: &ApplicationId,
        fields: ApplicationFields,
    ) -> Result<Option<Application>, ApplicationStoreError>;

    /// Remove a record. Returns whether anything was removed.
    async fn delete(&self, id: &ApplicationId) -> Result<bool, ApplicationStoreError>;
}

/// The four scalar fields submitted to the semantic checker.
///
/// The wire shape is fixed by the checker's contract: snake_case keys and an
/// ISO `yyyy-MM-dd` date string.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticCheckRequest {
    /// Applicant's full name.
    pub full_name: String,
    /// Applicant's passport number.
    pub passport_number: String,
    /// Application date rendered as `yyyy-MM-dd`.
    pub application_date: String,
    /// Fee amount received.
    pub amount_paid: f64,
}

impl SemanticCheckRequest {
    /// Build a check request from structurally validated fields.
    pub fn from_fields(fields: &ApplicationFields) -> Self {
        Self {
            full_name: fields.full_name.clone(),
            passport_number: fields.passport_number.clone(),
            application_date: fields.application_date.format(DATE_FORMAT).to_string(),
            amount_paid: fields.amount_paid,
        }
    }
}

/// Outcome of a completed semantic check.
///
/// An invalid verdict is a *successful* call: the checker was reached and
/// judged the data implausible. Transport problems surface as
/// [`SemanticCheckError`] instead and must never be conflated with this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVerdict {
    /// Whether the checker judged the submission plausible.
    pub is_valid: bool,
    /// Free-text findings; no vocabulary is guaranteed.
    pub errors: Vec<String>,
}

/// Errors surfaced by the semantic-checker adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticCheckError {
    /// Connection-level failure reaching the checker.
    #[error("semantic checker transport failure: {message}")]
    Transport {
        /// Adapter-supplied diagnostic.
        message: String,
    },
    /// The checker did not answer within the client timeout.
    #[error("semantic checker timed out: {message}")]
    Timeout {
        /// Adapter-supplied diagnostic.
        message: String,
    },
    /// The checker rejected the request as malformed.
    #[error("semantic checker rejected the request: {message}")]
    InvalidRequest {
        /// Adapter-supplied diagnostic.
        message: String,
    },
    /// The checker answered with a payload that could not be decoded.
    #[error("semantic checker returned an invalid payload: {message}")]
    Decode {
        /// Adapter-supplied diagnostic.
        message: String,
    },
}

impl SemanticCheckError {
    /// Helper for connection-level failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for client-side timeouts.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Helper for request rejections.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Helper for undecodable payloads.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for the external semantic plausibility checker.
#[async_trait]
pub trait SemanticValidator: Send + Sync {
    /// Submit the four scalar fields and await the checker's verdict.
    async fn check(
        &self,
        request: &SemanticCheckRequest,
    ) -> Result<SemanticVerdict, SemanticCheckError>;
}

/// Port signalling that a presentation path should refresh after a commit.
///
/// Fire-and-forget: the domain never depends on the outcome.
pub trait ViewRefresh: Send + Sync {
    /// Mark one presentation path stale.
    fn invalidate(&self, path: &str);
}

/// Read operations exposed to the presentation layer.
#[async_trait]
pub trait ApplicationsQuery: Send + Sync {
    /// All committed applications, most recently created first.
    async fn list_applications(&self) -> Result<Vec<Application>, Error>;

    /// Fetch one application; `None` when the identifier is unknown.
    async fn get_application(&self, id: &str) -> Result<Option<Application>, Error>;
}

/// Mutating operations exposed to the presentation layer.
#[async_trait]
pub trait ApplicationsCommand: Send + Sync {
    /// Run the full submission pipeline and commit on success.
    async fn create_application(&self, input: &Value) -> Result<Application, Error>;

    /// Validate an edit submission and replace the record's fields.
    async fn update_application(&self, input: &Value) -> Result<Application, Error>;

    /// Remove a record, returning a confirmation message.
    async fn delete_application(&self, id: &str) -> Result<String, Error>;
}
