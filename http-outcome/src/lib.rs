//! HTTP Outcome - response classification for a typed request/response client
//!
//! Every completed or failed call is reduced to exactly one [`Outcome`]:
//! business success, business failure, HTTP-protocol failure or transport
//! failure. Callers plug in an [`OutcomeHandler`] to render it.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Shared utility modules
pub mod request;
pub mod utils;

// Main functionality modules
pub mod classifier;
pub mod client;
pub mod runner;
pub mod traits;

pub mod testing;

// Re-export main types for convenience
pub use classifier::{ResponseClassifier, ResponseClassifierImpl};
pub use client::ReqwestClient;
pub use config::{MessageCatalog, OutcomeConfig, OutcomeConfigBuilder};
pub use error::{OutcomeError, Result};
pub use request::ApiRequest;
pub use runner::{CallReport, CallRunner};
pub use traits::{HttpClient, NoProgress, OutcomeHandler, ProgressIndicator};
pub use types::{
    Envelope, HttpResponse, Outcome, Presentation, RawResult, TransportError, TransportKind,
    RESPONSE_CODE_FAILED, RESPONSE_CODE_OK,
};

/// Execute one request with a client built from `config` and classify it
pub async fn fetch<T: serde::de::DeserializeOwned>(
    config: &OutcomeConfig,
    request: &ApiRequest,
) -> Result<Outcome<T>> {
    let runner = CallRunner::from_config(config)?.with_show_progress(false);
    Ok(runner.fetch(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that error types work correctly
    #[test]
    fn test_error_types() {
        let error = OutcomeError::invalid_config("test error");
        assert!(error.to_string().contains("Invalid configuration"));

        let error = OutcomeError::general("boom");
        assert_eq!(error.to_string(), "General error: boom");
    }

    #[test]
    fn test_classify_through_reexports() {
        let classifier = ResponseClassifierImpl::default();
        let raw: RawResult = HttpResponse::new(200, "OK", r#"{"code": 0, "result": true}"#).into();
        let outcome: Outcome<bool> = classifier.classify(&raw);
        assert_eq!(outcome, Outcome::Success(true));
    }
}
