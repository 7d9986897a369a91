//! Receipt HTTP handler.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::application::DATE_FORMAT;
use crate::domain::{APPLICATION_NOT_FOUND_MESSAGE, Error, Receipt};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Response payload for a rendered receipt.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    /// Sequential receipt number within this process lifetime.
    pub number: u64,
    /// Generation date as `yyyy-MM-dd`.
    #[schema(example = "2024-06-20")]
    pub issued_on: String,
    /// Issuing authority heading.
    pub authority: String,
    /// Issuer contact block.
    pub issued_by: Vec<String>,
    /// Applicant the fee was received from.
    pub payer_name: String,
    /// Travel document number quoted on the receipt.
    pub document_number: String,
    /// Line-item description.
    pub description: String,
    /// Fee amount formatted as en-US USD currency.
    #[schema(example = "$250.00")]
    pub amount_display: String,
    /// Raw fee amount.
    pub amount_paid: f64,
    /// Identifier of the underlying application.
    pub application_id: String,
    /// Application date as `yyyy-MM-dd`.
    #[schema(example = "2024-05-15")]
    pub application_date: String,
}

impl From<Receipt> for ReceiptResponse {
    fn from(value: Receipt) -> Self {
        Self {
            number: value.number,
            issued_on: value.issued_on.format(DATE_FORMAT).to_string(),
            authority: value.authority,
            issued_by: value.issued_by,
            payer_name: value.payer_name,
            document_number: value.document_number,
            description: value.description,
            amount_display: value.amount_display,
            amount_paid: value.amount_paid,
            application_id: value.application_id.to_string(),
            application_date: value.application_date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Render a printable receipt for one application.
///
/// Numbering restarts with the process; a receipt number is not a durable
/// reference to the payment.
#[utoipa::path(
    get,
    path = "/api/v1/applications/{id}/receipt",
    params(("id" = String, Path, description = "Application identifier")),
    responses(
        (status = 200, description = "Rendered receipt", body = ReceiptResponse),
        (status = 404, description = "Unknown identifier", body = ApiError)
    ),
    tags = ["applications"],
    operation_id = "getApplicationReceipt"
)]
#[get("/applications/{id}/receipt")]
pub async fn get_receipt(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ReceiptResponse>> {
    let id = path.into_inner();
    let application = state
        .applications_query
        .get_application(&id)
        .await?
        .ok_or_else(|| ApiError::from(Error::not_found(APPLICATION_NOT_FOUND_MESSAGE)))?;
    let receipt = state.receipts.issue(&application);
    Ok(web::Json(receipt.into()))
}
