//! HTTP inbound adapter exposing REST endpoints.

pub mod applications;
pub mod error;
pub mod export;
pub mod health;
pub mod receipts;
pub mod state;

pub use error::{ApiError, ApiResult};

use actix_web::web;

/// Register every route on a service config.
///
/// The export resource is registered before the by-id resource so the
/// literal `export` segment is not swallowed by the `{id}` matcher.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(export::export_applications)
            .service(applications::list_applications)
            .service(applications::create_application)
            .service(receipts::get_receipt)
            .service(applications::get_application)
            .service(applications::update_application)
            .service(applications::delete_application),
    )
    .service(health::ready)
    .service(health::live);
}
