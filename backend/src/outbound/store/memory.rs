//! Process-local application store.
//!
//! A `Mutex<Vec<_>>` is all the durability the service promises: records
//! live for the process lifetime and vanish on restart. The vector keeps
//! newest-first order by inserting at the front, so the dashboard shows the
//! latest submission first without sorting.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::application::{Application, ApplicationFields, ApplicationId};
use crate::domain::ports::{ApplicationRepository, ApplicationStoreError};

/// In-memory [`ApplicationRepository`] adapter.
#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    records: Mutex<Vec<Application>>,
}

impl InMemoryApplicationRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append pre-built records, preserving their given order.
    ///
    /// Seeding bypasses the submission pipeline entirely; callers own the
    /// well-formedness of what they insert.
    ///
    /// # Errors
    ///
    /// Returns a backend error when the store mutex is poisoned.
    pub fn seed(&self, applications: Vec<Application>) -> Result<(), ApplicationStoreError> {
        self.guard()?.extend(applications);
        Ok(())
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<Application>>, ApplicationStoreError> {
        self.records
            .lock()
            .map_err(|_| ApplicationStoreError::backend("application store mutex poisoned"))
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn list(&self) -> Result<Vec<Application>, ApplicationStoreError> {
        Ok(self.guard()?.clone())
    }

    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<Application>, ApplicationStoreError> {
        Ok(self.guard()?.iter().find(|app| app.id == *id).cloned())
    }

    async fn insert(
        &self,
        fields: ApplicationFields,
    ) -> Result<Application, ApplicationStoreError> {
        let application = Application::new(ApplicationId::generate(), fields);
        self.guard()?.insert(0, application.clone());
        Ok(application)
    }

    async fn update(
        &self,
        id: &ApplicationId,
        fields: ApplicationFields,
    ) -> Result<Option<Application>, ApplicationStoreError> {
        let mut records = self.guard()?;
        Ok(records.iter_mut().find(|app| app.id == *id).map(|app| {
            app.fields = fields;
            app.clone()
        }))
    }

    async fn delete(&self, id: &ApplicationId) -> Result<bool, ApplicationStoreError> {
        let mut records = self.guard()?;
        let before = records.len();
        records.retain(|app| app.id != *id);
        Ok(records.len() != before)
    }
}
