//! Shared helpers for http-outcome integration tests

#![allow(dead_code)]

use http_outcome::{OutcomeConfig, ReqwestClient};
use serde::Deserialize;
use wiremock::MockServer;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
}

/// Config pointing at a mock server with a short timeout
pub fn config_for(server: &MockServer) -> OutcomeConfig {
    OutcomeConfig::builder(server.uri())
        .timeout(2)
        .header("Accept", "application/json")
        .build()
        .unwrap()
}

pub fn client_for(server: &MockServer) -> ReqwestClient {
    ReqwestClient::new(&config_for(server)).unwrap()
}

/// Address on localhost that nothing is listening on
pub fn closed_local_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", address)
}
