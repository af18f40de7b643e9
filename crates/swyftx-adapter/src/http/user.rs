/*
[INPUT]:  Asset codes and bearer authentication
[OUTPUT]: User account data (balances, limits, orders, currency preference)
[POS]:    HTTP layer - user data endpoints (require bearer auth)
[UPDATE]: When adding new user endpoints or changing response transforms
*/

// ### User Endpoints

use crate::http::client::routes;
use crate::http::{Result, SwyftxClient};
use crate::types::responses::{parse_orders, parse_withdrawal_limits};
use crate::types::{SetCurrencyRequest, Standard, WithdrawalLimits};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

impl SwyftxClient {
    /// Query account balances
    ///
    /// GET user/balance/
    pub async fn get_account_balance(&self) -> Result<Value> {
        let builder = self.request(Method::GET, routes::ACCOUNT_BALANCE)?;
        self.send_json(builder).await
    }

    /// Query withdrawal limits, every amount converted to a float
    ///
    /// GET limits/withdrawal/
    pub async fn get_withdrawal_limits(&self) -> Result<WithdrawalLimits> {
        let builder = self.request(Method::GET, routes::WITHDRAWAL_LIMITS)?;
        let body: Value = self.send_json(builder).await?;
        parse_withdrawal_limits(body)
    }

    /// Set the account's default currency
    ///
    /// POST user/currency/
    /// Only AUD, USD and BTC are accepted; anything else fails before a request is built.
    pub async fn set_currency(&self, asset: &str) -> Result<String> {
        let standard = asset.parse::<Standard>().inspect_err(|_| {
            debug!(asset, "rejected unsupported currency");
        })?;
        let builder = self
            .request(Method::POST, routes::SET_CURRENCY)?
            .json(&SetCurrencyRequest::from(standard));
        self.send_text(builder).await
    }

    /// Query placed orders for an asset
    ///
    /// GET orders/{asset}
    pub async fn get_orders(&self, asset: &str) -> Result<Vec<Value>> {
        let endpoint = format!("{}{}", routes::ORDERS, asset);
        let builder = self.request(Method::GET, &endpoint)?;
        let body: Value = self.send_json(builder).await?;
        parse_orders(body)
    }
}
