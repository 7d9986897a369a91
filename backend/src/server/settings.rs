//! Service configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CHECKER_ENDPOINT: &str = "http://127.0.0.1:9400/v1/validate-application";
const DEFAULT_CHECKER_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DELETE_LATENCY_MS: u64 = 500;

/// Configuration values controlling the service at startup.
///
/// Every value can come from the environment with the `VISAFEE_` prefix,
/// e.g. `VISAFEE_CHECKER_ENDPOINT`.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VISAFEE")]
pub struct ServiceSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Endpoint of the semantic checker service.
    pub checker_endpoint: Option<String>,
    /// Request timeout for checker calls, in seconds.
    pub checker_timeout_secs: Option<u64>,
    /// Insert the demo dataset into the store at startup.
    #[ortho_config(default = false)]
    pub seed_demo_data: bool,
    /// Simulated latency before a delete touches the store, in milliseconds.
    pub delete_latency_ms: Option<u64>,
}

impl ServiceSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured checker endpoint, falling back to the default.
    pub fn checker_endpoint(&self) -> &str {
        self.checker_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_CHECKER_ENDPOINT)
    }

    /// Return the checker request timeout.
    pub fn checker_timeout(&self) -> Duration {
        Duration::from_secs(
            self.checker_timeout_secs
                .unwrap_or(DEFAULT_CHECKER_TIMEOUT_SECS),
        )
    }

    /// Return the simulated delete latency.
    pub fn delete_latency(&self) -> Duration {
        Duration::from_millis(self.delete_latency_ms.unwrap_or(DEFAULT_DELETE_LATENCY_MS))
    }
}
