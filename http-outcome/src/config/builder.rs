use crate::config::types::{
    ClassificationSettings, ClientSettings, MessageOverrides, OutcomeConfig,
};
use crate::error::Result;
use std::collections::HashMap;

/// Builder for OutcomeConfig to improve API ergonomics
pub struct OutcomeConfigBuilder {
    base_url: String,
    client: Option<ClientSettings>,
    classification: Option<ClassificationSettings>,
    messages: Option<MessageOverrides>,
}

impl OutcomeConfigBuilder {
    /// Create a new config builder
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            client: None,
            classification: None,
            messages: None,
        }
    }

    /// Set timeout in seconds
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.client.get_or_insert_with(Default::default).timeout_seconds = Some(seconds);
        self
    }

    /// Set whether to follow redirects
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.client.get_or_insert_with(Default::default).follow_redirects = Some(follow);
        self
    }

    /// Set whether a progress indicator should be shown
    pub fn show_progress(mut self, show: bool) -> Self {
        self.client.get_or_insert_with(Default::default).show_progress = Some(show);
        self
    }

    /// Add a header sent with every request
    pub fn header<S: Into<String>>(mut self, key: S, value: S) -> Self {
        self.client
            .get_or_insert_with(Default::default)
            .headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the business success code
    pub fn success_code(mut self, code: i64) -> Self {
        self.classification
            .get_or_insert_with(Default::default)
            .success_code = Some(code);
        self
    }

    /// Toggle 404 error-envelope decoding
    pub fn not_found_is_business(mut self, enabled: bool) -> Self {
        self.classification
            .get_or_insert_with(Default::default)
            .not_found_is_business = Some(enabled);
        self
    }

    /// Replace the message overrides
    pub fn messages(mut self, messages: MessageOverrides) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<OutcomeConfig> {
        let config = OutcomeConfig {
            base_url: self.base_url,
            client: self.client,
            classification: self.classification,
            messages: self.messages,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_sections() {
        let config = OutcomeConfigBuilder::new("https://api.example.com")
            .timeout(10)
            .follow_redirects(false)
            .header("Accept", "application/json")
            .success_code(1)
            .not_found_is_business(false)
            .build()
            .unwrap();

        assert_eq!(config.timeout_seconds(), 10);
        assert!(!config.follow_redirects());
        assert_eq!(config.headers().len(), 1);
        assert_eq!(config.success_code(), 1);
        assert!(!config.not_found_is_business());
    }

    #[test]
    fn test_builder_validates() {
        assert!(OutcomeConfigBuilder::new("nope").build().is_err());
    }
}
