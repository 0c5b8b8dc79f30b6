//! Mock of the display application's config endpoint.

use std::time::Duration;

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const CONFIG_PATH: &str = "/get_current_config";

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockConfigServer {
    pub server: MockServer,
}

impl MockConfigServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Full URL of the config endpoint.
    pub fn config_url(&self) -> String {
        format!("{}{}", self.server.uri(), CONFIG_PATH)
    }

    /// Serve a settings document.
    pub async fn mock_settings(&self, settings: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(CONFIG_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(settings)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Serve a settings document after a delay.
    pub async fn mock_delayed(&self, settings: serde_json::Value, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(CONFIG_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(settings)
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Serve a raw body with the given status.
    pub async fn mock_raw(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(CONFIG_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the endpoint has seen.
    pub async fn hits(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
