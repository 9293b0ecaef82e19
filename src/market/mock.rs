//! Mock event source for unit testing.
//!
//! Serves canned `/events` response bodies by slug without making network
//! requests. Bodies go through the same decoding as the real client.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PromptError;

use super::client::{decode_event_list, EventSource};
use super::types::GammaEvent;

/// Mock Gamma API for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEventSource {
    /// Response bodies by slug.
    responses: Arc<Mutex<HashMap<String, String>>>,
    /// Slugs requested so far, in order.
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockEventSource {
    /// Create an empty mock; every slug resolves to `[]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` verbatim for `slug`.
    pub fn with_body(self, slug: &str, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(slug.to_string(), body.into());
        self
    }

    /// Serve a one-element event list for `slug`.
    pub fn with_event(self, slug: &str, event: Value) -> Self {
        let body = Value::Array(vec![event]).to_string();
        self.with_body(slug, body)
    }

    /// Slugs requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSource for MockEventSource {
    async fn fetch_event(&self, slug: &str) -> Result<GammaEvent, PromptError> {
        self.requests.lock().unwrap().push(slug.to_string());

        let body = self
            .responses
            .lock()
            .unwrap()
            .get(slug)
            .cloned()
            .unwrap_or_else(|| "[]".to_string());

        decode_event_list(slug, &body)
    }
}
