use http_outcome::ProgressIndicator;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const DEFAULT_MESSAGE: &str = "loading...";

/// Terminal spinner shown while a request is in flight
#[derive(Clone)]
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        Self { bar }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressIndicator for SpinnerProgress {
    fn start(&self, message: Option<&str>) {
        self.bar
            .set_message(message.unwrap_or(DEFAULT_MESSAGE).to_string());
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
