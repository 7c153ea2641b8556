use crate::request::ApiRequest;
use crate::traits::{HttpClient, OutcomeHandler, ProgressIndicator};
use crate::types::{HttpResponse, RawResult, TransportError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock HTTP client for testing, keyed by request path
#[derive(Clone, Default)]
pub struct MockHttpClient {
    pub results: HashMap<String, RawResult>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, path: &str, response: HttpResponse) -> Self {
        self.results
            .insert(path.to_string(), RawResult::Response(response));
        self
    }

    pub fn with_transport_error(mut self, path: &str, error: TransportError) -> Self {
        self.results
            .insert(path.to_string(), RawResult::Transport(error));
        self
    }

    /// "METHOD path" for every executed request, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HttpClient for MockHttpClient {
    async fn execute(&self, request: &ApiRequest) -> RawResult {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", request.method, request.path));

        self.results.get(&request.path).cloned().unwrap_or_else(|| {
            RawResult::Response(HttpResponse::new(501, "Not Implemented", ""))
        })
    }
}

/// Client whose calls never complete
#[derive(Clone, Copy, Default)]
pub struct StalledHttpClient;

impl HttpClient for StalledHttpClient {
    async fn execute(&self, _request: &ApiRequest) -> RawResult {
        std::future::pending().await
    }
}

/// Handler that records what it was given
#[derive(Debug)]
pub struct RecordingHandler<T> {
    pub successes: Vec<T>,
    pub failures: Vec<(i64, String)>,
}

impl<T> Default for RecordingHandler<T> {
    fn default() -> Self {
        Self {
            successes: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> OutcomeHandler<T> for RecordingHandler<T> {
    fn on_success(&mut self, payload: T) {
        self.successes.push(payload);
    }

    fn on_failure(&mut self, code: i64, message: &str) {
        self.failures.push((code, message.to_string()));
    }
}

/// Progress indicator that records start/finish events
#[derive(Clone, Default)]
pub struct RecordingProgress {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressIndicator for RecordingProgress {
    fn start(&self, message: Option<&str>) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start:{}", message.unwrap_or_default()));
    }

    fn finish(&self) {
        self.events.lock().unwrap().push("finish".to_string());
    }
}
