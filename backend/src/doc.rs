//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. The
//! generated document backs Swagger UI in debug builds and can be exported
//! for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::applications::{ApplicationResponse, DeleteResponse};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::receipts::ReceiptResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Visa-fee application service API",
        description = "HTTP interface for submitting, reporting, and receipting visa-fee applications."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::applications::list_applications,
        crate::inbound::http::applications::get_application,
        crate::inbound::http::applications::create_application,
        crate::inbound::http::applications::update_application,
        crate::inbound::http::applications::delete_application,
        crate::inbound::http::export::export_applications,
        crate::inbound::http::receipts::get_receipt,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ApplicationResponse, DeleteResponse, ReceiptResponse, ApiError)),
    tags(
        (name = "applications", description = "Submission, reporting, and receipting"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
