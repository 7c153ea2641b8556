//! Maps a raw call result onto exactly one `Outcome`.
//! No presentation concerns; callers decide how failures are shown.

use crate::config::{MessageCatalog, OutcomeConfig};
use crate::types::{
    Envelope, HttpResponse, Outcome, RawResult, TransportError, RESPONSE_CODE_FAILED,
    RESPONSE_CODE_OK,
};
use crate::utils::text;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Longest slice of a body quoted in decode diagnostics
const DIAGNOSTIC_BODY_CHARS: usize = 120;

/// Trait for response classification
pub trait ResponseClassifier: Send + Sync {
    /// Classify a completed or failed call. Never fails: anything that
    /// cannot be decoded lands in a sentinel business failure.
    fn classify<T: DeserializeOwned>(&self, raw: &RawResult) -> Outcome<T>;
}

/// Default implementation of the response classifier
#[derive(Debug, Clone)]
pub struct ResponseClassifierImpl {
    success_code: i64,
    not_found_is_business: bool,
    messages: MessageCatalog,
}

impl ResponseClassifierImpl {
    pub fn new() -> Self {
        Self {
            success_code: RESPONSE_CODE_OK,
            not_found_is_business: true,
            messages: MessageCatalog::default(),
        }
    }

    /// Build a classifier from the classification and message sections
    pub fn from_config(config: &OutcomeConfig) -> Self {
        Self {
            success_code: config.success_code(),
            not_found_is_business: config.not_found_is_business(),
            messages: config.message_catalog(),
        }
    }

    pub fn with_success_code(mut self, code: i64) -> Self {
        self.success_code = code;
        self
    }

    pub fn with_not_found_as_business(mut self, enabled: bool) -> Self {
        self.not_found_is_business = enabled;
        self
    }

    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    /// 2xx: the body must be an envelope; its code decides the outcome
    fn classify_success<T: DeserializeOwned>(&self, response: &HttpResponse) -> Outcome<T> {
        let body = text::normalize_body(&response.body);
        let envelope = match Envelope::decode(body) {
            Ok(Some(envelope)) => envelope,
            Ok(None) => return self.sentinel(self.messages.null_error_body.clone()),
            Err(e) => return self.decode_failure(body, &e),
        };

        if envelope.code != self.success_code {
            return Outcome::BusinessFailure {
                code: envelope.code,
                message: envelope.error.unwrap_or_default(),
            };
        }

        match envelope.into_payload() {
            Ok(payload) => Outcome::Success(payload),
            Err(e) => self.decode_failure(body, &e),
        }
    }

    /// Non-2xx. 404 may carry a business error envelope; everything else is
    /// reported with the raw status line.
    fn classify_error<T>(&self, response: &HttpResponse) -> Outcome<T> {
        let reason = reason_phrase(response);
        warn!(status = response.status, reason = %reason, url = %response.url, "http-error");

        if response.status != 404 || !self.not_found_is_business {
            return Outcome::ProtocolFailure {
                status: response.status,
                reason,
            };
        }

        let body = text::normalize_body(&response.body);
        match Envelope::decode(body) {
            Ok(Some(envelope)) => Outcome::BusinessFailure {
                code: envelope.code,
                message: envelope.error.unwrap_or_default(),
            },
            Ok(None) => self.sentinel(self.messages.null_error_body.clone()),
            Err(e) => self.decode_failure(body, &e),
        }
    }

    fn classify_transport<T>(&self, error: &TransportError) -> Outcome<T> {
        debug!(kind = %error.kind, detail = %error.detail, "transport failure");
        Outcome::TransportFailure {
            kind: error.kind,
            message: self.messages.transport_message(error.kind, &error.detail),
        }
    }

    fn decode_failure<T>(&self, body: &str, error: &serde_json::Error) -> Outcome<T> {
        debug!(
            error = %error,
            body = %text::truncate(body, DIAGNOSTIC_BODY_CHARS),
            "failed to decode response envelope"
        );
        self.sentinel(format!("{}: {}", self.messages.decode_failed, error))
    }

    fn sentinel<T>(&self, message: String) -> Outcome<T> {
        Outcome::BusinessFailure {
            code: RESPONSE_CODE_FAILED,
            message,
        }
    }
}

impl Default for ResponseClassifierImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseClassifier for ResponseClassifierImpl {
    fn classify<T: DeserializeOwned>(&self, raw: &RawResult) -> Outcome<T> {
        match raw {
            RawResult::Response(response) if response.is_success() => {
                self.classify_success(response)
            }
            RawResult::Response(response) => self.classify_error(response),
            RawResult::Transport(error) => self.classify_transport(error),
        }
    }
}

/// Reason phrase for a response, falling back to the canonical one and then
/// to a bare status line
fn reason_phrase(response: &HttpResponse) -> String {
    let reason = response.reason.trim();
    if !reason.is_empty() {
        return reason.to_string();
    }
    reqwest::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", response.status))
}
