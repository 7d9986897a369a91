//! Server assembly: settings, adapter construction, and the HTTP entry-point.

mod settings;

pub use settings::ServiceSettings;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::info;
use url::Url;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{ApplicationService, ReceiptIssuer};
use crate::example_data::demo_applications;
use crate::inbound::http;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::outbound::refresh::TracingViewRefresh;
use crate::outbound::semantic::HttpSemanticChecker;
use crate::outbound::store::InMemoryApplicationRepository;

/// Wire the production adapters into the HTTP handler state.
///
/// # Errors
///
/// Returns an error when the checker endpoint is not a valid URL, the HTTP
/// client cannot be constructed, or demo seeding fails.
pub fn build_http_state(settings: &ServiceSettings) -> std::io::Result<HttpState> {
    let endpoint = Url::parse(settings.checker_endpoint()).map_err(|error| {
        std::io::Error::other(format!("invalid semantic checker endpoint: {error}"))
    })?;
    let checker =
        HttpSemanticChecker::new(endpoint, settings.checker_timeout()).map_err(|error| {
            std::io::Error::other(format!("semantic checker client failed to build: {error}"))
        })?;

    let repository = Arc::new(InMemoryApplicationRepository::new());
    if settings.seed_demo_data {
        repository
            .seed(demo_applications())
            .map_err(|error| std::io::Error::other(format!("demo seeding failed: {error}")))?;
        info!("demo dataset seeded into the application store");
    }

    let service = Arc::new(
        ApplicationService::new(
            repository,
            Arc::new(checker),
            Arc::new(TracingViewRefresh),
        )
        .with_delete_latency(settings.delete_latency()),
    );

    Ok(HttpState {
        applications: service.clone(),
        applications_query: service,
        receipts: Arc::new(ReceiptIssuer::new()),
    })
}

/// Build the adapters and run the HTTP server until shutdown.
///
/// # Errors
///
/// Returns an error when state construction or socket binding fails.
pub async fn run(settings: ServiceSettings) -> std::io::Result<()> {
    let state = web::Data::new(build_http_state(&settings)?);
    let health = web::Data::new(HealthState::new());
    let bind_addr = settings.bind_addr().to_owned();

    let server_state = state.clone();
    let server_health = health.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_state.clone())
            .app_data(server_health.clone())
            .configure(http::configure);
        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
        app
    })
    .bind(bind_addr.as_str())?;

    health.mark_ready();
    info!(addr = %bind_addr, "visa-fee application service listening");
    server.run().await
}
