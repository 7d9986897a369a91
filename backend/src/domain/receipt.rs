//! Receipt documents for committed applications.
//!
//! Receipt numbers come from an in-memory counter that resets with the
//! process. They order receipts within one service lifetime and are
//! explicitly not unique across restarts.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use super::application::{Application, ApplicationId};

/// Issuing authority printed on every receipt.
pub const RECEIPT_AUTHORITY: &str = "People's Democratic Republic of Algeria";
/// Issuer contact block printed on every receipt.
pub const RECEIPT_ISSUER_LINES: [&str; 3] = [
    "Embassy of Algeria in Slovenia",
    "Opekarska cesta 35, 1000 Ljubljana",
    "Tel: 083 83 1700",
];
/// Line-item description for the fee.
pub const RECEIPT_DESCRIPTION: &str = "Visa Application Fee";

/// A rendered payment receipt for one application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Sequential number within this process lifetime.
    pub number: u64,
    /// Date the receipt was generated.
    pub issued_on: NaiveDate,
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
    pub amount_display: String,
    /// Raw fee amount.
    pub amount_paid: f64,
    /// Identifier of the underlying application.
    pub application_id: ApplicationId,
    /// Date the application was lodged.
    pub application_date: NaiveDate,
}

/// Issues sequentially numbered receipts.
#[derive(Debug, Default)]
pub struct ReceiptIssuer {
    counter: AtomicU64,
}

impl ReceiptIssuer {
    /// Create an issuer whose first receipt is numbered 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a receipt for a committed application.
    pub fn issue(&self, application: &Application) -> Receipt {
        let number = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Receipt {
            number,
            issued_on: Utc::now().date_naive(),
            authority: RECEIPT_AUTHORITY.to_owned(),
            issued_by: RECEIPT_ISSUER_LINES
                .iter()
                .map(|line| (*line).to_owned())
                .collect(),
            payer_name: application.fields.full_name.clone(),
            document_number: application.fields.passport_number.clone(),
            description: RECEIPT_DESCRIPTION.to_owned(),
            amount_display: format_usd(application.fields.amount_paid),
            amount_paid: application.fields.amount_paid,
            application_id: application.id.clone(),
            application_date: application.fields.application_date,
        }
    }
}

/// Format an amount the way `en-US` USD currency renders: dollar sign,
/// thousands grouping, two fraction digits.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let dollars = cents / 100;
    let fraction = (cents % 100).unsigned_abs();
    format!("${}.{fraction:02}", group_thousands(dollars))
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
