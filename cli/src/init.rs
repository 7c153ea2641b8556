use crate::error::{CliError, Result};
use crate::ui;
use http_outcome::config::ensure_config_file_exists;

pub fn execute(config_path: &str, force: bool) -> Result<()> {
    ui::section_header("HTTP Outcome Configuration Setup");

    if ensure_config_file_exists(config_path, force)? {
        ui::success_message(&format!("Wrote {config_path}"));
        ui::info_message(&format!(
            "Edit {config_path} to configure base_url, headers and messages"
        ));
        Ok(())
    } else {
        Err(CliError::Other(format!(
            "{config_path} already exists, use --force to overwrite it"
        )))
    }
}
