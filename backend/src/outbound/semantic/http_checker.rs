//! Reqwest-backed semantic checker adapter.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP error mapping, and JSON decoding into a domain verdict. Whether
//! the data is plausible is decided entirely by the remote classifier.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{CheckRequestDto, VerdictDto};
use crate::domain::ports::{
    SemanticCheckError, SemanticCheckRequest, SemanticValidator, SemanticVerdict,
};

/// Semantic checker adapter performing HTTP POST requests against one endpoint.
pub struct HttpSemanticChecker {
    client: Client,
    endpoint: Url,
}

impl HttpSemanticChecker {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout, the only timeout enforced anywhere on the check.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl SemanticValidator for HttpSemanticChecker {
    async fn check(
        &self,
        request: &SemanticCheckRequest,
    ) -> Result<SemanticVerdict, SemanticCheckError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&CheckRequestDto::from(request))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_verdict(body.as_ref())
    }
}

fn parse_verdict(body: &[u8]) -> Result<SemanticVerdict, SemanticCheckError> {
    let decoded: VerdictDto = serde_json::from_slice(body).map_err(|error| {
        SemanticCheckError::decode(format!("invalid checker JSON payload: {error}"))
    })?;
    Ok(decoded.into_verdict())
}

fn map_transport_error(error: reqwest::Error) -> SemanticCheckError {
    if error.is_timeout() {
        SemanticCheckError::timeout(error.to_string())
    } else {
        SemanticCheckError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SemanticCheckError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            SemanticCheckError::timeout(message)
        }
        _ if status.is_client_error() => SemanticCheckError::invalid_request(message),
        _ => SemanticCheckError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_a_valid_verdict() {
        let body = br#"{ "isValid": false, "errors": ["Passport number format looks incorrect"] }"#;

        let verdict = parse_verdict(body).expect("payload decodes");
        assert!(!verdict.is_valid);
        assert_eq!(verdict.errors, ["Passport number format looks incorrect"]);
    }

    #[rstest]
    fn tolerates_a_missing_errors_list() {
        let verdict = parse_verdict(br#"{ "isValid": true }"#).expect("payload decodes");
        assert!(verdict.is_valid);
        assert!(verdict.errors.is_empty());
    }

    #[rstest]
    fn garbage_payloads_map_to_decode_errors() {
        let error = parse_verdict(b"<html>oops</html>").expect_err("decode fails");
        assert!(matches!(error, SemanticCheckError::Decode { .. }));
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT)]
    fn timeout_statuses_map_to_timeout(#[case] status: StatusCode) {
        let error = map_status_error(status, b"");
        assert!(matches!(error, SemanticCheckError::Timeout { .. }));
    }

    #[rstest]
    fn client_statuses_map_to_invalid_request() {
        let error = map_status_error(StatusCode::UNPROCESSABLE_ENTITY, b"{\"detail\":\"bad\"}");
        assert!(matches!(error, SemanticCheckError::InvalidRequest { .. }));
    }

    #[rstest]
    fn server_statuses_map_to_transport() {
        let error = map_status_error(StatusCode::INTERNAL_SERVER_ERROR, b"backend unavailable");
        assert!(matches!(
            error,
            SemanticCheckError::Transport { message } if message.contains("backend unavailable")
        ));
    }

    #[rstest]
    fn long_bodies_are_previewed_not_echoed() {
        let body = "x".repeat(500);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 163);
    }
}
