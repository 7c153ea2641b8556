#[cfg(test)]
pub mod mocks;

#[cfg(test)]
pub use mocks::{MockHttpClient, RecordingHandler, RecordingProgress, StalledHttpClient};
