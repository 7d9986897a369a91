//! CSV rendering of the applications report.
//!
//! Known limitation, preserved deliberately: fields are comma-joined with no
//! quoting or escaping, so a value containing a comma produces a malformed
//! row. Addresses are not exported, which keeps the most comma-prone field
//! out of the file, but names are not immune.

use super::application::{Application, DATE_FORMAT};

/// Download filename offered for the export.
pub const CSV_FILE_NAME: &str = "visa_applications.csv";

const CSV_HEADER: &str = "Full Name,Passport Number,Application Date,Amount Paid";

/// Render all records as a CSV document, header first, no trailing newline.
pub fn render_applications_csv(applications: &[Application]) -> String {
    let mut lines = Vec::with_capacity(applications.len() + 1);
    lines.push(CSV_HEADER.to_owned());
    for application in applications {
        lines.push(format!(
            "{},{},{},{}",
            application.fields.full_name,
            application.fields.passport_number,
            application.fields.application_date.format(DATE_FORMAT),
            application.fields.amount_paid,
        ));
    }
    lines.join("\n")
}
