//! Visa-fee application service library modules.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
