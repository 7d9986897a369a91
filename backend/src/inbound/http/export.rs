//! CSV export HTTP handler.

use actix_web::{HttpResponse, get, http::header, web};

use crate::domain::export::{CSV_FILE_NAME, render_applications_csv};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Download the full report as a CSV attachment.
#[utoipa::path(
    get,
    path = "/api/v1/applications/export",
    responses(
        (status = 200, description = "CSV report of all applications, one row per record"),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["applications"],
    operation_id = "exportApplications"
)]
#[get("/applications/export")]
pub async fn export_applications(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let applications = state.applications_query.list_applications().await?;
    let csv = render_applications_csv(&applications);
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{CSV_FILE_NAME}\""),
        ))
        .body(csv))
}
