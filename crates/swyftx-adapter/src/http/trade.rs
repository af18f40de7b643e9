/*
[INPUT]:  Order parameters and asset/standard pairs
[OUTPUT]: Order placement responses and buy/sell quotes
[POS]:    HTTP layer - trading and pricing endpoints
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::client::routes;
use crate::http::{Result, SwyftxClient, SwyftxError};
use crate::types::responses::parse_price;
use crate::types::{NewOrderRequest, RateRequest};
use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;

impl SwyftxClient {
    /// Place a market buy of `asset`, spending `amount` of `standard`
    ///
    /// POST orders/
    /// Codes are not checked locally; the exchange rejects invalid ones.
    pub async fn place_order(
        &self,
        asset: &str,
        standard: &str,
        amount: Decimal,
        target_price: Decimal,
    ) -> Result<String> {
        self.submit_order(&NewOrderRequest::market_buy(asset, standard, amount, target_price))
            .await
    }

    /// Submit an arbitrary order body
    ///
    /// POST orders/
    pub async fn submit_order(&self, req: &NewOrderRequest) -> Result<String> {
        let builder = self.request(Method::POST, routes::ORDERS)?.json(req);
        self.send_text(builder).await
    }

    /// Price of `asset` in units of `standard`
    ///
    /// POST orders/rate/ with `{buy: asset, sell: standard}`
    pub async fn get_buy_price(&self, asset: &str, standard: &str) -> Result<f64> {
        self.quote(&RateRequest::new(asset, standard)).await
    }

    /// Selling price of `asset` in units of `standard`
    ///
    /// POST orders/rate/ with `{buy: standard, sell: asset}`, returned as the reciprocal.
    /// A zero quote is an error rather than infinity.
    pub async fn get_sell_price(&self, asset: &str, standard: &str) -> Result<f64> {
        let price = self.quote(&RateRequest::new(standard, asset)).await?;
        if price == 0.0 {
            return Err(SwyftxError::ZeroPrice);
        }
        Ok(1.0 / price)
    }

    async fn quote(&self, req: &RateRequest) -> Result<f64> {
        let builder = self.request(Method::POST, routes::EXCHANGE_RATE)?.json(req);
        let body: Value = self
            .send_json_with_timeout(builder, self.config().price_timeout)
            .await?;
        parse_price(body)
    }
}
