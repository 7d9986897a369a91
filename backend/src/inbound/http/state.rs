//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ReceiptIssuer;
use crate::domain::ports::{ApplicationsCommand, ApplicationsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Mutating application operations.
    pub applications: Arc<dyn ApplicationsCommand>,
    /// Read-only application operations.
    pub applications_query: Arc<dyn ApplicationsQuery>,
    /// Receipt issuing, shared so numbering is process-wide.
    pub receipts: Arc<ReceiptIssuer>,
}
