use crate::error::{CliError, Result, ResultExt};
use crate::progress::SpinnerProgress;
use crate::ui;
use dialoguer::{Confirm, theme::ColorfulTheme};
use http_outcome::{
    ApiRequest, CallRunner, OutcomeConfig, OutcomeHandler, RESPONSE_CODE_FAILED,
    config::ensure_config_file_exists,
};
use serde_json::Value;
use std::path::Path;
use tokio::runtime::Runtime;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FetchArgs {
    pub path: String,
    pub method: String,
    pub data: Option<String>,
    pub headers: Vec<String>,
    pub query: Vec<String>,
    pub config_path: String,
    pub no_progress: bool,
    pub verbose: bool,
}

pub fn execute(args: FetchArgs) -> Result<()> {
    let config_path = Path::new(&args.config_path);
    if !config_path.exists() {
        return offer_default_config(&args.config_path);
    }

    let config = OutcomeConfig::load_with_validation(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let request = build_request(&args)?;

    log_request(&request, &config.base_url);

    let mut runner = CallRunner::from_config(&config)?.with_progress(SpinnerProgress::new());
    if args.no_progress {
        runner = runner.with_show_progress(false);
    }

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    let mut handler = TerminalHandler;
    let report = rt.block_on(runner.run::<Value, _>(&request, &mut handler));

    if report.requires_reauthentication {
        ui::info_message("The session is no longer valid, sign in again before retrying");
    }
    if args.verbose {
        ui::info_message(&format!("Completed in {} ms", report.elapsed.as_millis()));
    }

    match report.failure_code {
        None => Ok(()),
        Some(code) => Err(CliError::CallFailed(code)),
    }
}

/// Ask whether to write a default config when none exists
fn offer_default_config(config_path: &str) -> Result<()> {
    ui::warning_message(&format!("Configuration file not found: {config_path}"));

    let should_create = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Would you like to create a default configuration file?")
        .interact()?;

    if !should_create {
        return Err(CliError::Other(
            "A configuration file is required to send requests".to_string(),
        ));
    }

    ensure_config_file_exists(config_path, false)?;
    ui::success_message("Configuration file created successfully!");
    ui::info_message(&format!("Edit {config_path} to set base_url, then run the command again"));
    Ok(())
}

/// Turn command line arguments into an `ApiRequest`
fn build_request(args: &FetchArgs) -> Result<ApiRequest> {
    let mut request = ApiRequest::new(args.method.to_uppercase(), args.path.clone());

    for header in &args.headers {
        let (name, value) = parse_pair(header, ':')?;
        request = request.with_header(name, value);
    }
    for param in &args.query {
        let (key, value) = parse_pair(param, '=')?;
        request = request.with_query(key, value);
    }
    if let Some(data) = &args.data {
        request = request.with_body(data.clone());
    }

    Ok(request)
}

fn log_request(request: &ApiRequest, base_url: &str) {
    debug!(
        method = %request.method,
        path = %request.path,
        base_url,
        query = ?request.query,
        headers = request.headers.len(),
        has_body = request.body.is_some(),
        "sending request"
    );
}

/// Split "key<sep>value", trimming both halves; the key must not be empty
fn parse_pair(raw: &str, separator: char) -> Result<(String, String)> {
    let (key, value) = raw.split_once(separator).ok_or_else(|| {
        CliError::invalid_argument(raw, format!("expected '{separator}' between name and value"))
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::invalid_argument(raw, "name is empty"));
    }

    Ok((key.to_string(), value.trim().to_string()))
}

/// Prints outcomes to the terminal
struct TerminalHandler;

impl OutcomeHandler<Value> for TerminalHandler {
    fn on_success(&mut self, payload: Value) {
        ui::outcome_payload(&payload);
    }

    fn on_failure(&mut self, code: i64, message: &str) {
        if code == RESPONSE_CODE_FAILED {
            ui::outcome_alert(message);
        } else {
            ui::outcome_notice(message, code);
        }
    }
}
