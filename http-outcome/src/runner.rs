use crate::classifier::{ResponseClassifier, ResponseClassifierImpl};
use crate::client::ReqwestClient;
use crate::config::OutcomeConfig;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::traits::{HttpClient, NoProgress, OutcomeHandler, ProgressIndicator};
use crate::types::{Outcome, Presentation};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::info;

/// What happened to a call dispatched through `CallRunner::run`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallReport {
    pub failure_code: Option<i64>,
    pub presentation: Presentation,
    pub requires_reauthentication: bool,
    pub elapsed: Duration,
}

impl CallReport {
    pub fn is_success(&self) -> bool {
        self.failure_code.is_none()
    }
}

/// Started indicator that is finished when dropped, so a call whose future
/// is cancelled still clears it
struct ProgressGuard<'a> {
    progress: &'a dyn ProgressIndicator,
}

impl<'a> ProgressGuard<'a> {
    fn start(progress: &'a dyn ProgressIndicator, message: Option<&str>) -> Self {
        progress.start(message);
        Self { progress }
    }
}

impl Drop for ProgressGuard<'_> {
    fn drop(&mut self) {
        self.progress.finish();
    }
}

/// Executes requests, classifies them and hands the outcome to a handler
pub struct CallRunner<C, K = ResponseClassifierImpl> {
    client: C,
    classifier: K,
    progress: Box<dyn ProgressIndicator>,
    show_progress: bool,
    progress_message: Option<String>,
}

impl CallRunner<ReqwestClient, ResponseClassifierImpl> {
    /// Runner with a reqwest client and classifier built from `config`
    pub fn from_config(config: &OutcomeConfig) -> Result<Self> {
        let client = ReqwestClient::new(config)?;
        Ok(Self::new(client, ResponseClassifierImpl::from_config(config))
            .with_show_progress(config.show_progress()))
    }
}

impl<C: HttpClient, K: ResponseClassifier> CallRunner<C, K> {
    pub fn new(client: C, classifier: K) -> Self {
        Self {
            client,
            classifier,
            progress: Box::new(NoProgress),
            show_progress: true,
            progress_message: None,
        }
    }

    /// Indicator started before each call and finished once it completes
    pub fn with_progress<P: ProgressIndicator + 'static>(mut self, progress: P) -> Self {
        self.progress = Box::new(progress);
        self
    }

    pub fn with_show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_progress_message<S: Into<String>>(mut self, message: S) -> Self {
        self.progress_message = Some(message.into());
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Execute and classify without a handler
    pub async fn fetch<T: DeserializeOwned>(&self, request: &ApiRequest) -> Outcome<T> {
        let guard = self.show_progress.then(|| {
            ProgressGuard::start(&*self.progress, self.progress_message.as_deref())
        });
        let raw = self.client.execute(request).await;
        drop(guard);
        self.classifier.classify(&raw)
    }

    /// Execute, classify and dispatch to `handler` exactly once
    pub async fn run<T, H>(&self, request: &ApiRequest, handler: &mut H) -> CallReport
    where
        T: DeserializeOwned,
        H: OutcomeHandler<T>,
    {
        let started = Instant::now();
        let outcome: Outcome<T> = self.fetch(request).await;
        let report = CallReport {
            failure_code: outcome.failure_code(),
            presentation: outcome.presentation(),
            requires_reauthentication: outcome.requires_reauthentication(),
            elapsed: started.elapsed(),
        };

        info!(
            method = %request.method,
            path = %request.path,
            failure_code = ?report.failure_code,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "call completed"
        );

        handler.on_outcome(outcome);
        report
    }
}
