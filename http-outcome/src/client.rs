use crate::config::OutcomeConfig;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::traits::HttpClient;
use crate::types::{HttpResponse, RawResult, TransportError, TransportKind};
use reqwest::{Client, Method, Request};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::time::Duration;
use tracing::debug;

/// Fragments that identify a failed host lookup in a connect error chain
const DNS_FAILURE_MARKERS: [&str; 4] = [
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "no such host",
];

/// reqwest-backed HTTP client
#[derive(Clone)]
pub struct ReqwestClient {
    client: Client,
    base_url: String,
    headers: HashMap<String, String>,
}

impl ReqwestClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: &OutcomeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .redirect(if config.follow_redirects() {
                reqwest::redirect::Policy::default()
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            headers: config.headers(),
        })
    }

    /// Build a reqwest request; configured headers first, request headers win
    fn build_request(&self, request: &ApiRequest) -> std::result::Result<Request, TransportError> {
        let url = request.resolve_url(&self.base_url).map_err(|e| {
            TransportError::new(
                TransportKind::UnknownService,
                format!("Invalid URL for '{}': {}", request.path, e),
            )
        })?;

        let method = Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            TransportError::new(
                TransportKind::UnknownService,
                format!("Invalid HTTP method: {}", request.method),
            )
        })?;

        let mut headers = self.headers.clone();
        headers.extend(request.headers.clone());

        let mut builder = self.client.request(method, url);
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        builder.build().map_err(|e| transport_error(&e))
    }

    /// Convert reqwest Response to our HttpResponse
    async fn convert_response(
        response: reqwest::Response,
    ) -> std::result::Result<HttpResponse, reqwest::Error> {
        let status = response.status();
        let url = response.url().to_string();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.to_string(), value_str.to_string());
            }
        }

        let body = response.text().await?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
            url,
        })
    }
}

impl HttpClient for ReqwestClient {
    async fn execute(&self, request: &ApiRequest) -> RawResult {
        let built = match self.build_request(request) {
            Ok(built) => built,
            Err(error) => return RawResult::Transport(error),
        };

        debug!(method = %built.method(), url = %built.url(), "sending request");
        let result = match self.client.execute(built).await {
            Ok(response) => Self::convert_response(response).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(response) => RawResult::Response(response),
            Err(e) => RawResult::Transport(transport_error(&e)),
        }
    }
}

/// Map a reqwest error onto a transport failure kind
pub fn transport_error(error: &reqwest::Error) -> TransportError {
    let detail = error_chain(error);
    let kind = if error.is_timeout() {
        TransportKind::Timeout
    } else if error.is_connect() {
        let lowered = detail.to_lowercase();
        if DNS_FAILURE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            TransportKind::UnknownHost
        } else {
            TransportKind::ConnectionRefused
        }
    } else if error.is_builder() || error.is_redirect() {
        TransportKind::UnknownService
    } else if error.is_body() || error.is_decode() {
        TransportKind::Runtime
    } else {
        TransportKind::Other
    };

    TransportError::new(kind, detail)
}

/// Render an error and all of its sources as one line
fn error_chain(error: &dyn StdError) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OutcomeConfig {
        OutcomeConfig::builder("https://api.example.com")
            .timeout(5)
            .header("Accept", "application/json")
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(ReqwestClient::new(&test_config()).is_ok());
    }

    #[test]
    fn test_build_request_merges_headers() {
        let client = ReqwestClient::new(&test_config()).unwrap();
        let request = ApiRequest::get("/items")
            .with_header("Accept", "text/plain")
            .with_header("X-Trace", "abc")
            .with_query("page", "3");

        let built = client.build_request(&request).unwrap();
        assert_eq!(built.url().as_str(), "https://api.example.com/items?page=3");
        assert_eq!(built.headers()["accept"], "text/plain");
        assert_eq!(built.headers()["x-trace"], "abc");
    }

    #[test]
    fn test_invalid_method_is_unknown_service() {
        let client = ReqwestClient::new(&test_config()).unwrap();
        let error = client
            .build_request(&ApiRequest::new("GE T", "/items"))
            .unwrap_err();
        assert_eq!(error.kind, TransportKind::UnknownService);
        assert!(error.detail.contains("GE T"));
    }

    #[tokio::test]
    async fn test_invalid_url_is_transport_failure() {
        let mut config = test_config();
        config.base_url = "not a url".to_string();
        let client = ReqwestClient::new(&config).unwrap();

        let raw = client.execute(&ApiRequest::get("/items")).await;
        assert!(matches!(
            raw,
            RawResult::Transport(TransportError {
                kind: TransportKind::UnknownService,
                ..
            })
        ));
    }
}
