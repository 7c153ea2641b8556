use crate::request::ApiRequest;
use crate::types::{Outcome, RawResult, RESPONSE_CODE_FAILED};
use std::future::Future;

/// Trait for HTTP client implementations
pub trait HttpClient: Send + Sync + Clone {
    /// Execute a request. Transport problems come back as
    /// `RawResult::Transport`, never as an error.
    fn execute(&self, request: &ApiRequest) -> impl Future<Output = RawResult> + Send;
}

/// Receives the classified outcome of a call, exactly once per call
pub trait OutcomeHandler<T> {
    fn on_success(&mut self, payload: T);

    /// Called for every kind of failure with its failure code and message
    fn on_failure(&mut self, _code: i64, _message: &str) {}

    /// Extension point; the default routes to `on_success` / `on_failure`
    fn on_outcome(&mut self, outcome: Outcome<T>) {
        match outcome {
            Outcome::Success(payload) => self.on_success(payload),
            failure => {
                let code = failure.failure_code().unwrap_or(RESPONSE_CODE_FAILED);
                self.on_failure(code, failure.message().unwrap_or_default());
            }
        }
    }
}

/// Loading indicator driven around a call
pub trait ProgressIndicator: Send + Sync {
    fn start(&self, message: Option<&str>);
    fn finish(&self);
}

/// Indicator that shows nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressIndicator for NoProgress {
    fn start(&self, _message: Option<&str>) {}
    fn finish(&self) {}
}
