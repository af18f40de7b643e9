/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};

use super::enums::{OrderType, Standard};

/// Body of `POST orders/`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub primary: String,
    pub secondary: String,
    pub asset_quantity: String,
    pub order_type: OrderType,
    #[serde(serialize_with = "serialize_quantity")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub trigger: Decimal,
}

impl NewOrderRequest {
    /// Market buy of `asset` paid in `standard`, quantity denominated in `standard`
    pub fn market_buy(asset: &str, standard: &str, quantity: Decimal, trigger: Decimal) -> Self {
        Self {
            primary: standard.to_string(),
            secondary: asset.to_string(),
            asset_quantity: standard.to_string(),
            order_type: OrderType::MarketBuy,
            quantity,
            trigger,
        }
    }
}

/// Whole amounts go out as JSON integers, fractional ones as floats
fn serialize_quantity<S: Serializer>(quantity: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if quantity.fract().is_zero() {
        if let Some(whole) = quantity.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match quantity.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => Err(serde::ser::Error::custom(format!("quantity {quantity} is not representable"))),
    }
}

/// Body of `POST user/currency/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetCurrencyRequest {
    pub profile: ProfileUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Asset id as a decimal string
    pub default_asset: String,
}

impl From<Standard> for SetCurrencyRequest {
    fn from(standard: Standard) -> Self {
        Self {
            profile: ProfileUpdate {
                default_asset: standard.asset_id().to_string(),
            },
        }
    }
}

/// Body of `POST orders/rate/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateRequest {
    pub buy: String,
    pub sell: String,
}

impl RateRequest {
    pub fn new(buy: &str, sell: &str) -> Self {
        Self {
            buy: buy.to_string(),
            sell: sell.to_string(),
        }
    }
}
