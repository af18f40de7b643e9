/*
[INPUT]:  HTTP configuration (base URL, timeouts, bearer token)
[OUTPUT]: Configured reqwest client plus request/response plumbing
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{Result, SwyftxError};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL for the Swyftx API
pub const DEFAULT_BASE_URL: &str = "https://api.swyftx.com.au/";

/// Endpoint paths, relative to the base URL
pub(crate) mod routes {
    pub const ORDERS: &str = "orders/";
    pub const EXCHANGE_RATE: &str = "orders/rate/";
    pub const ACCOUNT_BALANCE: &str = "user/balance/";
    pub const SET_CURRENCY: &str = "user/currency/";
    pub const WITHDRAWAL_LIMITS: &str = "limits/withdrawal/";
    pub const DETAILED_INFO: &str = "markets/info/detail/";
    pub const MESSAGES_LATEST: &str = "messages/latest/";
    pub const ANNOUNCEMENTS_LATEST: &str = "messages/announcements/";
    pub const INFO: &str = "info/";
    pub const COMPARISON: &str = "compare/";
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Applied to every call without an explicit bound
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Bound for the buy/sell price lookups
    pub price_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            price_timeout: Duration::from_secs(2),
        }
    }
}

/// Credentials attached to every request
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Pre-obtained access token, may be empty
    pub access_token: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Swyftx API
#[derive(Debug)]
pub struct SwyftxClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    config: ClientConfig,
}

impl SwyftxClient {
    /// Create a new client with default configuration and an empty token
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration and an empty token
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_token(config, "")
    }

    /// Create a new client with custom configuration and an access token
    pub fn with_token(config: ClientConfig, access_token: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
            credentials: Credentials::new(access_token),
            config,
        })
    }

    /// Replace the access token used for subsequent requests
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.credentials = Credentials::new(access_token);
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build full URL for an endpoint
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder with the default header set
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        debug!(method = %method, url = %url, "building request");
        Ok(self
            .http_client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.credentials.bearer()))
    }

    /// Send and deserialize the JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let body = self.execute(builder, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send with an explicit timeout and deserialize the JSON body
    pub(crate) async fn send_json_with_timeout<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        timeout: Duration,
    ) -> Result<T> {
        let body = self.execute(builder, Some(timeout)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send and return the raw body text
    pub(crate) async fn send_text(&self, builder: RequestBuilder) -> Result<String> {
        self.execute(builder, None).await
    }

    async fn execute(&self, builder: RequestBuilder, timeout: Option<Duration>) -> Result<String> {
        let limit = timeout.unwrap_or(self.config.timeout);
        let connect_limit = self.config.connect_timeout;
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|err| transport_error(err, connect_limit, limit))?;
        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        let body = response
            .text()
            .await
            .map_err(|err| transport_error(err, connect_limit, limit))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "request rejected by API");
            return Err(SwyftxError::api_error(status, api_message(&body)));
        }

        Ok(body)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    // Url::join drops the last segment unless the base ends with '/'
    let url = if raw.ends_with('/') {
        Url::parse(raw)?
    } else {
        Url::parse(&format!("{raw}/"))?
    };
    if url.cannot_be_a_base() {
        return Err(SwyftxError::Config(format!("base URL {raw:?} cannot be a base")));
    }
    Ok(url)
}

fn transport_error(err: reqwest::Error, connect_limit: Duration, limit: Duration) -> SwyftxError {
    if err.is_timeout() {
        SwyftxError::Timeout {
            duration_ms: timeout_bound(err.is_connect(), connect_limit, limit).as_millis(),
        }
    } else {
        SwyftxError::Http(err)
    }
}

/// The bound that fired: connect timeouts report the connect limit
fn timeout_bound(during_connect: bool, connect_limit: Duration, limit: Duration) -> Duration {
    if during_connect {
        connect_limit.min(limit)
    } else {
        limit
    }
}

/// Pull `error.message` out of an error body, falling back to the raw text
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.price_timeout, Duration::from_secs(2));
        assert!(config.timeout > config.price_timeout);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = parse_base_url("http://127.0.0.1:8080/api").expect("url");
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/");
        assert_eq!(
            url.join(routes::ORDERS).expect("join").as_str(),
            "http://127.0.0.1:8080/api/orders/"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = parse_base_url("mailto:ops@example.com").unwrap_err();
        assert!(matches!(err, SwyftxError::Config(_)));
    }

    #[test]
    fn test_endpoint_url_with_default_base() {
        let client = SwyftxClient::new().expect("client init");
        let url = client.endpoint_url(routes::EXCHANGE_RATE).expect("url");
        assert_eq!(url.as_str(), "https://api.swyftx.com.au/orders/rate/");
    }

    #[test]
    fn test_bearer_with_empty_token() {
        assert_eq!(Credentials::default().bearer(), "Bearer ");
        assert_eq!(Credentials::new("abc").bearer(), "Bearer abc");
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let rendered = format!("{:?}", Credentials::new("secret-token"));
        assert!(!rendered.contains("secret-token"));
    }

    #[test]
    fn test_set_access_token() {
        let mut client = SwyftxClient::new().expect("client init");
        assert_eq!(client.credentials().access_token, "");
        client.set_access_token("fresh");
        assert_eq!(client.credentials().bearer(), "Bearer fresh");
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SwyftxClient>();
    }

    #[test]
    fn test_timeout_bound() {
        let connect = Duration::from_secs(10);
        let total = Duration::from_secs(30);
        assert_eq!(timeout_bound(true, connect, total), connect);
        assert_eq!(timeout_bound(false, connect, total), total);
        // a price bound shorter than the connect limit fires first
        let price = Duration::from_millis(200);
        assert_eq!(timeout_bound(true, connect, price), price);
    }

    #[test]
    fn test_api_message_extraction() {
        let body = r#"{"error":{"error":"InvalidToken","message":"Token expired"}}"#;
        assert_eq!(api_message(body), "Token expired");
        assert_eq!(api_message("  bad gateway \n"), "bad gateway");
    }
}
