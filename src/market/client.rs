//! Gamma API client for event lookup by slug.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::PromptError;
use crate::metrics;

use super::types::GammaEvent;

/// Something that can resolve a slug into an event record.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch the event for `slug`.
    async fn fetch_event(&self, slug: &str) -> Result<GammaEvent, PromptError>;
}

/// Polymarket Gamma API client.
#[derive(Debug, Clone)]
pub struct GammaClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Full URL of the `/events` endpoint.
    events_url: String,
}

impl GammaClient {
    /// Create a client for the Gamma host named in config.
    pub fn new(config: &Config) -> Self {
        Self::with_http(reqwest::Client::new(), config.events_url())
    }

    /// Create a client from an existing HTTP client and `/events` URL.
    pub fn with_http(http: reqwest::Client, events_url: impl Into<String>) -> Self {
        Self {
            http,
            events_url: events_url.into(),
        }
    }

    /// The `/events` endpoint this client queries.
    pub fn events_url(&self) -> &str {
        &self.events_url
    }
}

#[async_trait]
impl EventSource for GammaClient {
    #[instrument(skip(self))]
    async fn fetch_event(&self, slug: &str) -> Result<GammaEvent, PromptError> {
        let _timer = metrics::timer_event_fetch();

        let response = self
            .http
            .get(&self.events_url)
            .query(&[("slug", slug)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!(endpoint = %self.events_url, bytes = body.len(), "Received events response");

        decode_event_list(slug, &body)
    }
}

/// Decode a `/events` response body and return its first event.
///
/// Invalid JSON is a decode error; valid JSON that is not a non-empty
/// array means the event does not exist.
pub fn decode_event_list(slug: &str, body: &str) -> Result<GammaEvent, PromptError> {
    let value: Value = serde_json::from_str(body)?;

    let first = match value {
        Value::Array(items) => items.into_iter().next(),
        _ => None,
    }
    .ok_or_else(|| PromptError::not_found(slug))?;

    Ok(serde_json::from_value(first)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use axum::{extract::Query, http::StatusCode, routing::get, Router};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    /// Serve `status` and `body` on `/events`, recording each `slug` query value.
    async fn spawn_events_server(
        status: StatusCode,
        body: &'static str,
    ) -> (String, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorded = seen.clone();
        let app = Router::new().route(
            "/events",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let recorded = recorded.clone();
                async move {
                    if let Some(slug) = params.get("slug") {
                        recorded.lock().unwrap().push(slug.clone());
                    }
                    (status, body)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/events", addr), seen)
    }

    #[test]
    fn first_event_is_returned() {
        let body = r#"[{"title": "First", "markets": []}, {"title": "Second"}]"#;
        let event = decode_event_list("slug", body).unwrap();
        assert_eq!(event.title.as_deref(), Some("First"));
    }

    #[test]
    fn empty_array_is_not_found() {
        let err = decode_event_list("missing-event", "[]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn non_array_is_not_found() {
        let err = decode_event_list("slug", r#"{"error": "nope"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let err = decode_event_list("slug", "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn non_object_event_is_decode_error() {
        let err = decode_event_list("slug", r#"["just a string"]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn client_uses_configured_host() {
        let config = Config {
            gamma_api_url: "http://127.0.0.1:9999".to_string(),
            ..Config::default()
        };
        let client = GammaClient::new(&config);
        assert_eq!(client.events_url(), "http://127.0.0.1:9999/events");
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let client = GammaClient::with_http(reqwest::Client::new(), "http://127.0.0.1:1/events");
        let err = client.fetch_event("anything").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn error_status_is_network_error() {
        for status in [StatusCode::INTERNAL_SERVER_ERROR, StatusCode::NOT_FOUND] {
            let (url, seen) = spawn_events_server(status, r#"[{"title": "Ignored"}]"#).await;
            let client = GammaClient::with_http(reqwest::Client::new(), url);

            let err = client.fetch_event("some-event").await.unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Network, "status {}", status);
            assert_eq!(*seen.lock().unwrap(), vec!["some-event".to_string()]);
        }
    }

    #[tokio::test]
    async fn slug_is_sent_as_query_parameter() {
        let (url, seen) =
            spawn_events_server(StatusCode::OK, r#"[{"title": "Remote", "markets": []}]"#).await;
        let client = GammaClient::with_http(reqwest::Client::new(), url);

        let event = client.fetch_event("caf\u{e9} au lait").await.unwrap();

        assert_eq!(event.title.as_deref(), Some("Remote"));
        assert_eq!(*seen.lock().unwrap(), vec!["caf\u{e9} au lait".to_string()]);
    }
}
