//! Application CRUD HTTP handlers.
//!
//! ```text
//! GET    /api/v1/applications
//! POST   /api/v1/applications
//! GET    /api/v1/applications/{id}
//! PUT    /api/v1/applications/{id}
//! DELETE /api/v1/applications/{id}
//! ```
//!
//! Create and update accept arbitrary JSON and hand it to the domain
//! pipeline unparsed; field-level validation is a domain concern, and the
//! handlers only translate outcomes into HTTP.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::application::{Application, DATE_FORMAT};
use crate::domain::{APPLICATION_NOT_FOUND_MESSAGE, Error};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Response payload for a committed application.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    /// Store-assigned identifier.
    #[schema(example = "app-6f2f9a0e-4fca-4c9f-8b1a-0d7c7f6b2a11")]
    pub id: String,
    /// Applicant's full name.
    pub full_name: String,
    /// Applicant's passport number.
    pub passport_number: String,
    /// Applicant's postal address.
    pub address: String,
    /// Application date as `yyyy-MM-dd`.
    #[schema(example = "2024-05-15")]
    pub application_date: String,
    /// Fee amount received.
    pub amount_paid: f64,
}

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        Self {
            id: value.id.to_string(),
            full_name: value.fields.full_name,
            passport_number: value.fields.passport_number,
            address: value.fields.address,
            application_date: value.fields.application_date.format(DATE_FORMAT).to_string(),
            amount_paid: value.fields.amount_paid,
        }
    }
}

/// Response payload for a delete request.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    /// Always true on a 200 response.
    pub success: bool,
    /// Human-readable confirmation.
    #[schema(example = "Application deleted.")]
    pub message: String,
}

/// List all applications, most recently created first.
#[utoipa::path(
    get,
    path = "/api/v1/applications",
    responses(
        (status = 200, description = "All committed applications", body = [ApplicationResponse]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["applications"],
    operation_id = "listApplications"
)]
#[get("/applications")]
pub async fn list_applications(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ApplicationResponse>>> {
    let applications = state.applications_query.list_applications().await?;
    Ok(web::Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// Fetch one application by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/applications/{id}",
    params(("id" = String, Path, description = "Application identifier")),
    responses(
        (status = 200, description = "The application", body = ApplicationResponse),
        (status = 404, description = "Unknown identifier", body = ApiError)
    ),
    tags = ["applications"],
    operation_id = "getApplication"
)]
#[get("/applications/{id}")]
pub async fn get_application(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApplicationResponse>> {
    let id = path.into_inner();
    let application = state
        .applications_query
        .get_application(&id)
        .await?
        .ok_or_else(|| ApiError::from(Error::not_found(APPLICATION_NOT_FOUND_MESSAGE)))?;
    Ok(web::Json(application.into()))
}

/// Submit a new application through the validation pipeline.
#[utoipa::path(
    post,
    path = "/api/v1/applications",
    responses(
        (status = 201, description = "Application committed", body = ApplicationResponse),
        (status = 400, description = "Validation failed; see details.fieldErrors", body = ApiError),
        (status = 503, description = "Semantic checker unreachable", body = ApiError)
    ),
    tags = ["applications"],
    operation_id = "createApplication"
)]
#[post("/applications")]
pub async fn create_application(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let application = state.applications.create_application(&payload).await?;
    Ok(HttpResponse::Created().json(ApplicationResponse::from(application)))
}

/// Replace the fields of an existing application.
#[utoipa::path(
    put,
    path = "/api/v1/applications/{id}",
    params(("id" = String, Path, description = "Application identifier")),
    responses(
        (status = 200, description = "Updated application", body = ApplicationResponse),
        (status = 400, description = "Validation failed; see details.fieldErrors", body = ApiError),
        (status = 404, description = "Unknown identifier", body = ApiError)
    ),
    tags = ["applications"],
    operation_id = "updateApplication"
)]
#[put("/applications/{id}")]
pub async fn update_application(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<ApplicationResponse>> {
    let id = path.into_inner();
    let mut input = payload.into_inner();
    // The domain operation expects the identifier inside the input value;
    // the path is authoritative over anything the body carried.
    if let Some(object) = input.as_object_mut() {
        object.insert("id".to_owned(), Value::String(id));
    }
    let application = state.applications.update_application(&input).await?;
    Ok(web::Json(application.into()))
}

/// Delete an application.
#[utoipa::path(
    delete,
    path = "/api/v1/applications/{id}",
    params(("id" = String, Path, description = "Application identifier")),
    responses(
        (status = 200, description = "Application removed", body = DeleteResponse),
        (status = 404, description = "Unknown identifier", body = ApiError)
    ),
    tags = ["applications"],
    operation_id = "deleteApplication"
)]
#[delete("/applications/{id}")]
pub async fn delete_application(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteResponse>> {
    let message = state
        .applications
        .delete_application(&path.into_inner())
        .await?;
    Ok(web::Json(DeleteResponse {
        success: true,
        message,
    }))
}
