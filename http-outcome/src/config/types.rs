use crate::error::{OutcomeError, Result};
use crate::types::{TransportKind, RESPONSE_CODE_OK};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Main configuration structure, usually read from `outcome.toml`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutcomeConfig {
    /// Base URL that request paths are joined onto
    pub base_url: String,
    /// HTTP client settings
    pub client: Option<ClientSettings>,
    /// Classification rules
    pub classification: Option<ClassificationSettings>,
    /// Overrides for user-facing failure messages
    pub messages: Option<MessageOverrides>,
}

/// HTTP client settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClientSettings {
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Whether to follow redirects
    pub follow_redirects: Option<bool>,
    /// Whether callers should show a progress indicator while a call runs
    pub show_progress: Option<bool>,
    /// Headers applied to every request
    pub headers: Option<HashMap<String, String>>,
}

/// Rules the classifier applies to responses
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassificationSettings {
    /// Business code meaning success
    pub success_code: Option<i64>,
    /// Treat 404 bodies as business error envelopes (paging past the last
    /// page answers 404 on some APIs)
    pub not_found_is_business: Option<bool>,
}

/// Partial message catalog as written in the config file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MessageOverrides {
    pub timeout: Option<String>,
    pub connection_refused: Option<String>,
    pub unknown_host: Option<String>,
    pub unknown_service: Option<String>,
    pub runtime: Option<String>,
    pub generic: Option<String>,
    pub null_error_body: Option<String>,
    pub decode_failed: Option<String>,
}

/// Resolved user-facing failure messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    pub timeout: String,
    pub connection_refused: String,
    pub unknown_host: String,
    pub unknown_service: String,
    pub runtime: String,
    /// Prefix for unrecognised transport failures; the detail is appended
    pub generic: String,
    pub null_error_body: String,
    pub decode_failed: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            timeout: "Server response timed out".to_string(),
            connection_refused: "Network connection failed, please check the network".to_string(),
            unknown_host: "Unable to resolve host, please check the network connection"
                .to_string(),
            unknown_service: "Unknown server error".to_string(),
            runtime: "Runtime error".to_string(),
            generic: "Failed to fetch data [def-error]".to_string(),
            null_error_body: "Error response is null".to_string(),
            decode_failed: "Response body could not be decoded".to_string(),
        }
    }
}

impl MessageCatalog {
    /// Apply overrides on top of the defaults
    pub fn with_overrides(overrides: &MessageOverrides) -> Self {
        let mut catalog = Self::default();
        let pairs = [
            (&mut catalog.timeout, &overrides.timeout),
            (&mut catalog.connection_refused, &overrides.connection_refused),
            (&mut catalog.unknown_host, &overrides.unknown_host),
            (&mut catalog.unknown_service, &overrides.unknown_service),
            (&mut catalog.runtime, &overrides.runtime),
            (&mut catalog.generic, &overrides.generic),
            (&mut catalog.null_error_body, &overrides.null_error_body),
            (&mut catalog.decode_failed, &overrides.decode_failed),
        ];
        for (slot, value) in pairs {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
        catalog
    }

    /// Localized message for a transport failure
    pub fn transport_message(&self, kind: TransportKind, detail: &str) -> String {
        match kind {
            TransportKind::Timeout => self.timeout.clone(),
            TransportKind::ConnectionRefused => self.connection_refused.clone(),
            TransportKind::UnknownHost => self.unknown_host.clone(),
            TransportKind::UnknownService => self.unknown_service.clone(),
            TransportKind::Runtime => self.runtime.clone(),
            TransportKind::Other => format!("{} {}", self.generic, detail),
        }
    }
}

impl OutcomeConfig {
    /// Configuration with only a base URL; everything else defaults
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            client: None,
            classification: None,
            messages: None,
        }
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.client
            .as_ref()
            .and_then(|c| c.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn follow_redirects(&self) -> bool {
        self.client
            .as_ref()
            .and_then(|c| c.follow_redirects)
            .unwrap_or(true)
    }

    pub fn show_progress(&self) -> bool {
        self.client
            .as_ref()
            .and_then(|c| c.show_progress)
            .unwrap_or(true)
    }

    pub fn headers(&self) -> HashMap<String, String> {
        self.client
            .as_ref()
            .and_then(|c| c.headers.clone())
            .unwrap_or_default()
    }

    pub fn success_code(&self) -> i64 {
        self.classification
            .as_ref()
            .and_then(|c| c.success_code)
            .unwrap_or(RESPONSE_CODE_OK)
    }

    pub fn not_found_is_business(&self) -> bool {
        self.classification
            .as_ref()
            .and_then(|c| c.not_found_is_business)
            .unwrap_or(true)
    }

    pub fn message_catalog(&self) -> MessageCatalog {
        self.messages
            .as_ref()
            .map(MessageCatalog::with_overrides)
            .unwrap_or_default()
    }

    /// Check the base URL and client settings
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            OutcomeError::invalid_config(format!("Invalid base_url '{}': {}", self.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(OutcomeError::invalid_config(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout_seconds() == 0 {
            return Err(OutcomeError::invalid_config(
                "timeout_seconds must be greater than 0",
            ));
        }

        Ok(())
    }
}
