//! Shared fixtures for the HTTP integration tests.
//!
//! Every test starts its own `wiremock` server and points an opened client at
//! it. Retry waits go through [`RecordingSleeper`], which records the
//! requested delays instead of sleeping.

#![allow(dead_code)]

use async_trait::async_trait;
use congress_core::api::client::CongressClient;
use congress_core::config::Config;
use congress_core::utils::retry::Sleeper;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::{MockServer, Request};

pub const TEST_API_KEY: &str = "test_key";

#[derive(Debug, Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        if let Ok(mut delays) = self.delays.lock() {
            delays.push(duration);
        }
    }
}

pub fn test_config(server: &MockServer) -> Config {
    Config::new(TEST_API_KEY)
        .with_base_url(server.uri())
        .with_retry(3, Duration::from_secs(1))
}

/// Opened client for `config` whose retry waits are recorded
pub fn open_client(config: Config) -> (CongressClient, Arc<RecordingSleeper>) {
    let sleeper = Arc::new(RecordingSleeper::default());
    let mut client = CongressClient::new(Arc::new(config)).with_sleeper(sleeper.clone());
    client.open().expect("client should open");
    (client, sleeper)
}

/// Requests received for one path
pub async fn requests_to(server: &MockServer, path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == path)
        .collect()
}

pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// `count` numbered bill summaries starting at `start`
pub fn bill_items(start: usize, count: usize) -> Vec<Value> {
    (start..start + count)
        .map(|n| json!({"congress": 118, "type": "HR", "number": n.to_string(), "title": format!("Summary {}", n)}))
        .collect()
}
