//! Integration tests module
//!
//! This module contains all HTTP-level integration tests for SportsHub,
//! organized by resource and end-to-end scenarios.

pub mod handlers;
pub mod scenarios;

/// Common setup function for integration tests
pub async fn setup_integration_test() -> crate::helpers::TestContext {
    crate::helpers::TestContext::new().await
}

/// Assert a failure envelope with the given code
pub fn assert_failure(response: &serde_json::Value, code: &str) {
    assert_eq!(response["success"], false, "expected failure, got {}", response);
    assert_eq!(response["code"], code, "unexpected code in {}", response);
}

/// Assert a success envelope and return its data
pub fn assert_success(response: &serde_json::Value) -> serde_json::Value {
    assert_eq!(response["success"], true, "expected success, got {}", response);
    response["data"].clone()
}
