//! End-to-end coverage for the applications REST API.
//!
//! Each test assembles the real pipeline (service + in-memory store) over a
//! scripted semantic checker, so requests exercise everything but the
//! network call to the remote classifier.

use std::sync::Arc;
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use visafee_backend::domain::ports::{
    SemanticCheckError, SemanticCheckRequest, SemanticValidator, SemanticVerdict, ViewRefresh,
};
use visafee_backend::domain::{ApplicationService, ReceiptIssuer};
use visafee_backend::inbound::http;
use visafee_backend::inbound::http::health::HealthState;
use visafee_backend::inbound::http::state::HttpState;
use visafee_backend::outbound::store::InMemoryApplicationRepository;

enum CheckerScript {
    Approve,
    Reject(Vec<String>),
    Fail,
}

struct ScriptedChecker {
    script: CheckerScript,
}

#[async_trait]
impl SemanticValidator for ScriptedChecker {
    async fn check(
        &self,
        _request: &SemanticCheckRequest,
    ) -> Result<SemanticVerdict, SemanticCheckError> {
        match &self.script {
            CheckerScript::Approve => Ok(SemanticVerdict {
                is_valid: true,
                errors: Vec::new(),
            }),
            CheckerScript::Reject(errors) => Ok(SemanticVerdict {
                is_valid: false,
                errors: errors.clone(),
            }),
            CheckerScript::Fail => Err(SemanticCheckError::transport("connection refused")),
        }
    }
}

struct NoRefresh;

impl ViewRefresh for NoRefresh {
    fn invalidate(&self, _path: &str) {}
}

fn state_with(script: CheckerScript) -> HttpState {
    let service = Arc::new(
        ApplicationService::new(
            Arc::new(InMemoryApplicationRepository::new()),
            Arc::new(ScriptedChecker { script }),
            Arc::new(NoRefresh),
        )
        .with_delete_latency(Duration::ZERO),
    );
    HttpState {
        applications: service.clone(),
        applications_query: service,
        receipts: Arc::new(ReceiptIssuer::new()),
    }
}

async fn spawn_app(
    script: CheckerScript,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .app_data(web::Data::new(state_with(script)))
            .app_data(web::Data::new(HealthState::new()))
            .configure(http::configure),
    )
    .await
}

fn valid_input() -> Value {
    json!({
        "fullName": "John Doe",
        "passportNumber": "A1234567",
        "address": "1 Embassy Row, Ljubljana",
        "applicationDate": "2024-05-15",
        "amountPaid": 250.0,
    })
}

fn field_errors(body: &Value, field: &str) -> Vec<String> {
    body.get("details")
        .and_then(|details| details.get("fieldErrors"))
        .and_then(|errors| errors.get(field))
        .and_then(Value::as_array)
        .map(|messages| {
            messages
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[actix_web::test]
async fn create_commits_and_lists_newest_first() {
    let app = spawn_app(CheckerScript::Approve).await;

    let created = test::TestRequest::post()
        .uri("/api/v1/applications")
        .set_json(valid_input())
        .send_request(&app)
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(created).await;
    let id = created["id"].as_str().expect("assigned id").to_owned();
    assert!(id.starts_with("app-"));

    let mut second = valid_input();
    second["fullName"] = json!("Jane Smith");
    let response = test::TestRequest::post()
        .uri("/api/v1/applications")
        .set_json(second)
        .send_request(&app)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let listed = test::TestRequest::get()
        .uri("/api/v1/applications")
        .send_request(&app)
        .await;
    assert_eq!(listed.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(listed).await;
    let rows = listed.as_array().expect("array body");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["fullName"], json!("Jane Smith"));
    assert_eq!(rows[1]["id"], json!(id));
}

#[actix_web::test]
async fn create_then_fetch_round_trips() {
    let app = spawn_app(CheckerScript::Approve).await;

    let created = test::TestRequest::post()
        .uri("/api/v1/applications")
        .set_json(valid_input())
        .send_request(&app)
        .await;
    let created: Value = test::read_body_json(created).await;
    let id = created["id"].as_str().expect("assigned id");

    let fetched = test::TestRequest::get()
        .uri(&format!("/api/v1/applications/{id}"))
        .send_request(&app)
        .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(fetched).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn structural_errors_are_reported_per_field() {
    let app = spawn_app(CheckerScript::Approve).await;

    let response = test::TestRequest::post()
        .uri("/api/v1/applications")
        .set_json(json!({ "fullName": "Jo" }))
        .send_request(&app)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["code"], json!("invalid_request"));
    assert_eq!(
        field_errors(&body, "fullName"),
        ["Full name must be at least 3 characters."],
    );
    assert_eq!(field_errors(&body, "address"), ["Address is required."]);
    assert_eq!(
        field_errors(&body, "applicationDate"),
        ["An application date is required."],
    );
}

#[actix_web::test]
async fn semantic_findings_map_onto_fields() {
    let finding = "Passport number format looks incorrect";
    let app = spawn_app(CheckerScript::Reject(vec![finding.to_owned()])).await;

    let response = test::TestRequest::post()
        .uri("/api/v1/applications")
        .set_json(valid_input())
        .send_request(&app)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(field_errors(&body, "passportNumber"), [finding]);

    // Nothing was committed.
    let listed = test::TestRequest::get()
        .uri("/api/v1/applications")
        .send_request(&app)
        .await;
    let listed: Value = test::read_body_json(listed).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn checker_outage_maps_to_service_unavailable() {
    let app = spawn_app(CheckerScript::Fail).await;

    let response = test::TestRequest::post()
        .uri("/api/v1/applications")
        .set_json(valid_input())
        .send_request(&app)
        .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["code"], json!("service_unavailable"));
    assert_eq!(
        field_errors(&body, "root"),
        ["AI validation service is unavailable. Please try again later."],
    );
}

#[actix_web::test]
async fn update_replaces_fields_in_place() {
    let app = spawn_app(CheckerScript::Approve).await;

    let created = test::TestRequest::post()
        .uri("/api/v1/applications")
        .set_json(valid_input())
        .send_request(&app)
        .await;
    let created: Value = test::read_body_json(created).await;
    let id = created["id"].as_str().expect("assigned id");

    let mut edit = valid_input();
    edit["address"] = json!("22 Consulate Lane, Maribor");
    let response = test::TestRequest::put()
        .uri(&format!("/api/v1/applications/{id}"))
        .set_json(edit)
        .send_request(&app)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["id"], json!(id));
    assert_eq!(body["address"], json!("22 Consulate Lane, Maribor"));
}

#[actix_web::test]
async fn update_of_unknown_id_is_not_found() {
    let app = spawn_app(CheckerScript::Approve).await;

    let response = test::TestRequest::put()
        .uri("/api/v1/applications/app-missing")
        .set_json(valid_input())
        .send_request(&app)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], json!("Application not found."));
}

#[actix_web::test]
async fn delete_confirms_and_removes() {
    let app = spawn_app(CheckerScript::Approve).await;

    let created = test::TestRequest::post()
        .uri("/api/v1/applications")
        .set_json(valid_input())
        .send_request(&app)
        .await;
    let created: Value = test::read_body_json(created).await;
    let id = created["id"].as_str().expect("assigned id").to_owned();

    let deleted = test::TestRequest::delete()
        .uri(&format!("/api/v1/applications/{id}"))
        .send_request(&app)
        .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let deleted: Value = test::read_body_json(deleted).await;
    assert_eq!(
        deleted,
        json!({ "success": true, "message": "Application deleted." }),
    );

    let fetched = test::TestRequest::get()
        .uri(&format!("/api/v1/applications/{id}"))
        .send_request(&app)
        .await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_an_unknown_id_is_not_found() {
    let app = spawn_app(CheckerScript::Approve).await;

    let response = test::TestRequest::delete()
        .uri("/api/v1/applications/app-missing")
        .send_request(&app)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["code"], json!("not_found"));
    assert_eq!(body["message"], json!("Application not found."));
}

#[actix_web::test]
async fn export_streams_a_csv_attachment() {
    let app = spawn_app(CheckerScript::Approve).await;

    for name in ["John Doe", "Jane Smith"] {
        let mut input = valid_input();
        input["fullName"] = json!(name);
        let response = test::TestRequest::post()
            .uri("/api/v1/applications")
            .set_json(input)
            .send_request(&app)
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = test::TestRequest::get()
        .uri("/api/v1/applications/export")
        .send_request(&app)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/csv"));
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(disposition.contains("visa_applications.csv"));

    let body = test::read_body(response).await;
    let body = String::from_utf8(body.to_vec()).expect("utf-8 body");
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("Full Name,Passport Number,Application Date,Amount Paid"),
    );
    assert_eq!(
        lines.next(),
        Some("Jane Smith,A1234567,2024-05-15,250"),
        "newest submission leads the report",
    );
    assert_eq!(lines.next(), Some("John Doe,A1234567,2024-05-15,250"));
}

#[actix_web::test]
async fn receipts_number_sequentially_within_the_process() {
    let app = spawn_app(CheckerScript::Approve).await;

    let created = test::TestRequest::post()
        .uri("/api/v1/applications")
        .set_json(valid_input())
        .send_request(&app)
        .await;
    let created: Value = test::read_body_json(created).await;
    let id = created["id"].as_str().expect("assigned id").to_owned();

    for expected in 1..=2u64 {
        let response = test::TestRequest::get()
            .uri(&format!("/api/v1/applications/{id}/receipt"))
            .send_request(&app)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let receipt: Value = test::read_body_json(response).await;
        assert_eq!(receipt["number"], json!(expected));
        assert_eq!(receipt["payerName"], json!("John Doe"));
        assert_eq!(receipt["documentNumber"], json!("A1234567"));
        assert_eq!(receipt["amountDisplay"], json!("$250.00"));
    }
}

#[actix_web::test]
async fn receipt_for_an_unknown_id_is_not_found() {
    let app = spawn_app(CheckerScript::Approve).await;

    let response = test::TestRequest::get()
        .uri("/api/v1/applications/app-missing/receipt")
        .send_request(&app)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn health_probes_respond() {
    let app = spawn_app(CheckerScript::Approve).await;

    let live = test::TestRequest::get()
        .uri("/health/live")
        .send_request(&app)
        .await;
    assert_eq!(live.status(), StatusCode::OK);

    // Readiness is marked by the bootstrap path, not by test assembly.
    let ready = test::TestRequest::get()
        .uri("/health/ready")
        .send_request(&app)
        .await;
    assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);
}
