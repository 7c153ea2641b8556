use crate::error::{OutcomeError, Result};
use std::path::Path;

/// Generate the default outcome.toml template
pub fn generate_default_config_template() -> String {
    r#"# HTTP Outcome Configuration
# Request paths given on the command line are joined onto base_url
base_url = "https://api.example.com"

# HTTP client settings (optional)
[client]
# Request timeout in seconds
timeout_seconds = 30
# Whether to follow HTTP redirects
follow_redirects = true
# Show a spinner while a request is in flight
show_progress = true

# Headers applied to all requests
[client.headers]
"User-Agent" = "outcome/1.0"
"Accept" = "application/json"

# How responses are classified (optional)
[classification]
# Business code the API uses for success
success_code = 0
# Decode 404 bodies as business error envelopes
not_found_is_business = true

# Failure messages shown to users (optional, each key may be omitted)
[messages]
timeout = "Server response timed out"
connection_refused = "Network connection failed, please check the network"
unknown_host = "Unable to resolve host, please check the network connection"
unknown_service = "Unknown server error"
runtime = "Runtime error"
generic = "Failed to fetch data [def-error]"
"#
    .to_string()
}

/// Write the default template if `config_path` does not exist yet.
///
/// Returns `true` when a file was written.
pub fn ensure_config_file_exists(config_path: &str, force: bool) -> Result<bool> {
    let path = Path::new(config_path);
    if path.exists() && !force {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(OutcomeError::general(format!(
                "Directory does not exist: {}",
                parent.display()
            )));
        }
    }

    std::fs::write(path, generate_default_config_template())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutcomeConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_and_validates() {
        let config: OutcomeConfig = toml::from_str(&generate_default_config_template()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.message_catalog().runtime, "Runtime error");
    }

    #[test]
    fn test_ensure_config_file_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outcome.toml");
        let path_str = path.to_string_lossy().to_string();

        assert!(ensure_config_file_exists(&path_str, false).unwrap());
        assert!(!ensure_config_file_exists(&path_str, false).unwrap());
        assert!(ensure_config_file_exists(&path_str, true).unwrap());
        assert!(OutcomeConfig::load_with_validation(&path).is_ok());
    }
}
