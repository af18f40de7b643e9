/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for swyftx-adapter tests

use swyftx_adapter::{ClientConfig, SwyftxClient};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mock access token for testing
pub fn mock_access_token() -> String {
    "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer, token: &str) -> SwyftxClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    SwyftxClient::with_token(config, token).expect("client init")
}

/// Fails on drop if the server receives any request at all
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .named("no request expected")
        .mount(server)
        .await;
}
