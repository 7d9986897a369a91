//! Application submission pipeline.
//!
//! Implements the driving ports over the store, the semantic checker, and
//! view-refresh signalling. The pipeline is linear with no retries:
//! structural validation, then the semantic check, then the store commit.
//! Each stage has its own error exit and the store is only touched after
//! both validation stages pass, so a record is either fully validated and
//! committed or not stored at all.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{info, warn};

use super::application::{
    Application, ApplicationId, validate_application, validate_application_update,
};
use super::error::Error;
use super::fields::FieldErrors;
use super::ports::{
    ApplicationRepository, ApplicationStoreError, ApplicationsCommand, ApplicationsQuery,
    SemanticCheckRequest, SemanticValidator, ViewRefresh,
};
use super::semantic::{SEMANTIC_UNAVAILABLE_MESSAGE, attribute_findings};

/// Confirmation message returned by a successful delete.
pub const APPLICATION_DELETED_MESSAGE: &str = "Application deleted.";
/// Message returned when an identifier matches no record.
pub const APPLICATION_NOT_FOUND_MESSAGE: &str = "Application not found.";

/// Latency simulated before a delete touches the store. Tests shrink it
/// to zero.
pub const DEFAULT_DELETE_LATENCY: Duration = Duration::from_millis(500);

/// Presentation path listing all applications.
const DASHBOARD_PATH: &str = "/";

fn receipt_path(id: &ApplicationId) -> String {
    format!("/receipt/{id}")
}

/// Submission pipeline service implementing the driving ports.
#[derive(Clone)]
pub struct ApplicationService<R, C, V> {
    repository: Arc<R>,
    checker: Arc<C>,
    views: Arc<V>,
    delete_latency: Duration,
}

impl<R, C, V> ApplicationService<R, C, V> {
    /// Create a service with the default simulated delete latency.
    pub fn new(repository: Arc<R>, checker: Arc<C>, views: Arc<V>) -> Self {
        Self {
            repository,
            checker,
            views,
            delete_latency: DEFAULT_DELETE_LATENCY,
        }
    }

    /// Override the simulated delete latency.
    #[must_use]
    pub fn with_delete_latency(mut self, latency: Duration) -> Self {
        self.delete_latency = latency;
        self
    }
}

impl<R, C, V> ApplicationService<R, C, V>
where
    R: ApplicationRepository,
    C: SemanticValidator,
    V: ViewRefresh,
{
    fn structural_error(errors: FieldErrors) -> Error {
        Error::invalid_request("Application data failed validation.").with_details(json!({
            "code": "structural_validation_failed",
            "fieldErrors": errors.as_json(),
        }))
    }

    fn semantic_error(errors: &FieldErrors) -> Error {
        Error::invalid_request("Application data failed semantic validation.").with_details(
            json!({
                "code": "semantic_validation_failed",
                "fieldErrors": errors.as_json(),
            }),
        )
    }

    fn unavailable_error() -> Error {
        let errors = FieldErrors::root(SEMANTIC_UNAVAILABLE_MESSAGE);
        Error::service_unavailable(SEMANTIC_UNAVAILABLE_MESSAGE)
            .with_details(json!({ "fieldErrors": errors.as_json() }))
    }

    fn not_found_error() -> Error {
        let errors = FieldErrors::root(APPLICATION_NOT_FOUND_MESSAGE);
        Error::not_found(APPLICATION_NOT_FOUND_MESSAGE)
            .with_details(json!({ "fieldErrors": errors.as_json() }))
    }

    fn map_store_error(error: ApplicationStoreError) -> Error {
        Error::internal(format!("application store failure: {error}"))
    }
}

#[async_trait]
impl<R, C, V> ApplicationsQuery for ApplicationService<R, C, V>
where
    R: ApplicationRepository,
    C: SemanticValidator,
    V: ViewRefresh,
{
    async fn list_applications(&self) -> Result<Vec<Application>, Error> {
        self.repository.list().await.map_err(Self::map_store_error)
    }

    async fn get_application(&self, id: &str) -> Result<Option<Application>, Error> {
        // A syntactically hopeless identifier cannot match any record.
        let Ok(id) = ApplicationId::new(id) else {
            return Ok(None);
        };
        self.repository
            .find_by_id(&id)
            .await
            .map_err(Self::map_store_error)
    }
}

#[async_trait]
impl<R, C, V> ApplicationsCommand for ApplicationService<R, C, V>
where
    R: ApplicationRepository,
    C: SemanticValidator,
    V: ViewRefresh,
{
    async fn create_application(&self, input: &Value) -> Result<Application, Error> {
        let fields = validate_application(input).map_err(Self::structural_error)?;

        let verdict = self
            .checker
            .check(&SemanticCheckRequest::from_fields(&fields))
            .await
            .map_err(|error| {
                warn!(error = %error, "semantic check could not be completed");
                Self::unavailable_error()
            })?;
        if !verdict.is_valid {
            return Err(Self::semantic_error(&attribute_findings(&verdict.errors)));
        }

        let application = self
            .repository
            .insert(fields)
            .await
            .map_err(Self::map_store_error)?;
        self.views.invalidate(DASHBOARD_PATH);
        info!(id = %application.id, "application committed");
        Ok(application)
    }

    async fn update_application(&self, input: &Value) -> Result<Application, Error> {
        let (id, fields) = validate_application_update(input).map_err(Self::structural_error)?;

        let updated = self
            .repository
            .update(&id, fields)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(Self::not_found_error)?;
        self.views.invalidate(DASHBOARD_PATH);
        self.views.invalidate(&receipt_path(&id));
        info!(id = %id, "application updated");
        Ok(updated)
    }

    async fn delete_application(&self, id: &str) -> Result<String, Error> {
        tokio::time::sleep(self.delete_latency).await;

        let Ok(id) = ApplicationId::new(id) else {
            return Err(Self::not_found_error());
        };
        let removed = self
            .repository
            .delete(&id)
            .await
            .map_err(Self::map_store_error)?;
        if !removed {
            return Err(Self::not_found_error());
        }
        self.views.invalidate(DASHBOARD_PATH);
        info!(id = %id, "application deleted");
        Ok(APPLICATION_DELETED_MESSAGE.to_owned())
    }
}
