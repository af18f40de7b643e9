/*
[INPUT]:  Asset codes, optional limits, comparison exchange names
[OUTPUT]: Market detail, messages, announcements, API info, price comparisons
[POS]:    HTTP layer - informational endpoints returned as raw JSON
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::client::routes;
use crate::http::{Result, SwyftxClient};
use crate::types::ComparisonExchange;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

impl SwyftxClient {
    /// Detailed market info for an asset
    ///
    /// GET markets/info/detail/{asset}
    pub async fn get_detailed_info(&self, asset: &str) -> Result<Value> {
        let endpoint = format!("{}{}", routes::DETAILED_INFO, asset);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Latest messages
    ///
    /// GET messages/latest/{limit}
    pub async fn get_messages(&self, limit: Option<u32>) -> Result<Value> {
        let endpoint = with_limit(routes::MESSAGES_LATEST, limit);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Latest announcements
    ///
    /// GET messages/announcements/{limit}
    pub async fn get_announcements(&self, limit: Option<u32>) -> Result<Value> {
        let endpoint = with_limit(routes::ANNOUNCEMENTS_LATEST, limit);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// API info
    ///
    /// GET info/
    pub async fn get_info(&self) -> Result<Value> {
        let builder = self.request(Method::GET, routes::INFO)?;
        self.send_json(builder).await
    }

    /// Prices on a supported comparison exchange (swyftx, coinspot; any case)
    ///
    /// GET compare/{exchange}
    pub async fn compare_exchange(&self, exchange: &str) -> Result<Value> {
        let exchange = exchange.parse::<ComparisonExchange>().inspect_err(|_| {
            debug!(exchange, "rejected unsupported comparison exchange");
        })?;
        let endpoint = format!("{}{}", routes::COMPARISON, exchange.as_str());
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}

fn with_limit(route: &str, limit: Option<u32>) -> String {
    match limit {
        Some(limit) => format!("{route}{limit}"),
        None => route.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::with_limit;
    use crate::http::{ClientConfig, SwyftxClient};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SwyftxClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        SwyftxClient::with_config(config).expect("client init")
    }

    #[test]
    fn test_with_limit() {
        assert_eq!(with_limit("messages/latest/", None), "messages/latest/");
        assert_eq!(with_limit("messages/latest/", Some(5)), "messages/latest/5");
    }

    #[tokio::test]
    async fn test_get_detailed_info() {
        let server = MockServer::start().await;
        let detail = json!({"name": "Bitcoin", "code": "BTC", "rank": 1});

        Mock::given(method("GET"))
            .and(path("/markets/info/detail/BTC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(detail.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_detailed_info("BTC")
            .await
            .expect("get_detailed_info failed");

        assert_eq!(response, detail);
    }

    #[tokio::test]
    async fn test_get_messages_with_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/messages/latest/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_messages(Some(3))
            .await
            .expect("get_messages failed");

        assert_eq!(response, json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn test_get_info() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/info/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "1.0"})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).get_info().await.expect("get_info failed");
        assert_eq!(response["version"], "1.0");
    }
}
