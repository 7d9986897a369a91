//! Demo records for local dashboards.
//!
//! Seed records are inserted directly into the store at startup when
//! seeding is enabled and never pass through the submission pipeline, so
//! they are not guaranteed to satisfy the structural constraints a live
//! submission must.

use chrono::NaiveDate;

use crate::domain::application::{Application, ApplicationFields, ApplicationId};

fn demo_application(
    id: &str,
    full_name: &str,
    passport_number: &str,
    date: (i32, u32, u32),
    amount_paid: f64,
) -> Application {
    let (year, month, day) = date;
    Application::new(
        ApplicationId::new(id).expect("demo id literal is well formed"),
        ApplicationFields {
            full_name: full_name.to_owned(),
            passport_number: passport_number.to_owned(),
            address: "c/o Embassy of Algeria, Opekarska cesta 35, Ljubljana".to_owned(),
            application_date: NaiveDate::from_ymd_opt(year, month, day)
                .expect("demo date literal is well formed"),
            amount_paid,
        },
    )
}

/// The demo dataset, in dashboard display order.
pub fn demo_applications() -> Vec<Application> {
    vec![
        demo_application("app-01", "John Doe", "A12345678", (2024, 5, 15), 250.0),
        demo_application("app-02", "Jane Smith", "B87654321", (2024, 6, 1), 180.5),
        demo_application("app-03", "Peter Jones", "C54738291", (2024, 6, 20), 320.75),
    ]
}
