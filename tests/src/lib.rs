//! Helpers shared by the workspace end-to-end tests

use std::fs;
use std::path::{Path, PathBuf};

/// Write an outcome.toml for `base_url` into `dir`, based on the default template
pub fn write_config(dir: &Path, base_url: &str) -> std::io::Result<PathBuf> {
    let template = http_outcome::config::generate_default_config_template();
    let content = template.replacen(
        "base_url = \"https://api.example.com\"",
        &format!("base_url = \"{base_url}\""),
        1,
    );
    let path = dir.join("outcome.toml");
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_outcome::OutcomeConfig;
    use tempfile::TempDir;

    #[test]
    fn test_write_config_replaces_base_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(temp_dir.path(), "http://127.0.0.1:9").unwrap();

        let config = OutcomeConfig::load_with_validation(&path).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9");
        assert_eq!(config.timeout_seconds(), 30);
    }
}
