use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Business code carried by an envelope when the call succeeded
pub const RESPONSE_CODE_OK: i64 = 0;

/// Sentinel failure code used for transport and decode failures
pub const RESPONSE_CODE_FAILED: i64 = -1;

/// Business codes that mean the caller's session is no longer valid
pub const REAUTHENTICATION_CODES: [i64; 4] = [101, 112, 123, 401];

/// HTTP response data with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase, e.g. "Not Found"
    pub reason: String,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub url: String,
}

impl HttpResponse {
    /// Create a new HTTP response
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            headers: HashMap::new(),
            body: body.into(),
            url: String::new(),
        }
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Check if the response indicates an error (non-2xx status code)
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }
}

/// What went wrong below the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Timeout,
    ConnectionRefused,
    UnknownHost,
    UnknownService,
    Runtime,
    Other,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Timeout => "timeout",
            Self::ConnectionRefused => "connection-refused",
            Self::UnknownHost => "unknown-host",
            Self::UnknownService => "unknown-service",
            Self::Runtime => "runtime",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A call that never produced an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub kind: TransportKind,
    /// Diagnostic text from the underlying client
    pub detail: String,
}

impl TransportError {
    pub fn new(kind: TransportKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.detail)
    }
}

/// Raw result of a call, before classification
#[derive(Debug, Clone)]
pub enum RawResult {
    Response(HttpResponse),
    Transport(TransportError),
}

impl From<HttpResponse> for RawResult {
    fn from(response: HttpResponse) -> Self {
        Self::Response(response)
    }
}

impl From<TransportError> for RawResult {
    fn from(error: TransportError) -> Self {
        Self::Transport(error)
    }
}

/// Decoded response body carrying a business status code.
///
/// `code == RESPONSE_CODE_OK` means `result` holds the payload; any other
/// code makes `error` the authoritative description. A missing `code`
/// reads as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default)]
    pub code: i64,
    #[serde(alias = "data")]
    pub result: Option<T>,
    #[serde(alias = "message")]
    pub error: Option<String>,
}

impl Envelope<Value> {
    /// Decode an envelope from body text, keeping the payload untyped.
    ///
    /// A literal `null` body, or one with no content at all, yields `Ok(None)`.
    pub fn decode(body: &str) -> serde_json::Result<Option<Self>> {
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(body)
    }

    /// Convert the untyped payload into `T`. A missing payload is decoded
    /// from JSON `null` so unit and optional payloads still succeed.
    pub fn into_payload<T: serde::de::DeserializeOwned>(self) -> serde_json::Result<T> {
        serde_json::from_value(self.result.unwrap_or(Value::Null))
    }
}

/// How a caller is expected to surface a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Nothing to surface
    None,
    /// Blocking tip, shown for sentinel failures
    Alert,
    /// Brief note of the form "<message> # <code>"
    Notice,
}

/// Classification result for a single call
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    BusinessFailure { code: i64, message: String },
    ProtocolFailure { status: u16, reason: String },
    TransportFailure { kind: TransportKind, message: String },
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Code handed to failure handlers: business code, HTTP status, or the
    /// sentinel for transport failures
    pub fn failure_code(&self) -> Option<i64> {
        match self {
            Self::Success(_) => None,
            Self::BusinessFailure { code, .. } => Some(*code),
            Self::ProtocolFailure { status, .. } => Some(i64::from(*status)),
            Self::TransportFailure { .. } => Some(RESPONSE_CODE_FAILED),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::BusinessFailure { message, .. } | Self::TransportFailure { message, .. } => {
                Some(message)
            }
            Self::ProtocolFailure { reason, .. } => Some(reason),
        }
    }

    pub fn presentation(&self) -> Presentation {
        match self.failure_code() {
            None => Presentation::None,
            Some(RESPONSE_CODE_FAILED) => Presentation::Alert,
            Some(_) => Presentation::Notice,
        }
    }

    /// Whether the business code asks the caller to log in again.
    /// Only reported here; acting on it is up to the caller.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, Self::BusinessFailure { code, .. } if REAUTHENTICATION_CODES.contains(code))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Success(payload) => Outcome::Success(f(payload)),
            Self::BusinessFailure { code, message } => Outcome::BusinessFailure { code, message },
            Self::ProtocolFailure { status, reason } => Outcome::ProtocolFailure { status, reason },
            Self::TransportFailure { kind, message } => Outcome::TransportFailure { kind, message },
        }
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }
}
