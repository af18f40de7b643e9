/*
[INPUT]:  Fixed code sets accepted by the exchange
[OUTPUT]: Standard currencies, comparison exchanges, numeric order types
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the exchange supports new standards, exchanges, or order types
*/

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::http::SwyftxError;

/// Codes accepted by `set_currency`
pub const SUPPORTED_STANDARDS: [&str; 3] = ["AUD", "USD", "BTC"];

/// Names accepted by `compare_exchange`
pub const SUPPORTED_COMPARISON_EXCHANGES: [&str; 2] = ["swyftx", "coinspot"];

/// Reference currency used to price an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    Aud,
    Usd,
    Btc,
}

impl Standard {
    pub const ALL: [Standard; 3] = [Standard::Aud, Standard::Usd, Standard::Btc];

    pub fn code(self) -> &'static str {
        match self {
            Standard::Aud => "AUD",
            Standard::Usd => "USD",
            Standard::Btc => "BTC",
        }
    }

    /// Exchange-internal asset id
    pub fn asset_id(self) -> u32 {
        match self {
            Standard::Aud => 1,
            Standard::Btc => 3,
            Standard::Usd => 36,
        }
    }
}

impl FromStr for Standard {
    type Err = SwyftxError;

    /// Case-sensitive: only the upper-case ticker is accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Standard::ALL
            .into_iter()
            .find(|standard| standard.code() == s)
            .ok_or_else(|| SwyftxError::UnsupportedStandard(s.to_string()))
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Exchange whose prices can be compared against Swyftx
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonExchange {
    Swyftx,
    Coinspot,
}

impl ComparisonExchange {
    pub const ALL: [ComparisonExchange; 2] =
        [ComparisonExchange::Swyftx, ComparisonExchange::Coinspot];

    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonExchange::Swyftx => "swyftx",
            ComparisonExchange::Coinspot => "coinspot",
        }
    }
}

impl FromStr for ComparisonExchange {
    type Err = SwyftxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        ComparisonExchange::ALL
            .into_iter()
            .find(|exchange| exchange.as_str() == name)
            .ok_or_else(|| SwyftxError::UnsupportedExchange(s.to_string()))
    }
}

impl fmt::Display for ComparisonExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric order type understood by `POST orders/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    MarketBuy,
    MarketSell,
    LimitBuy,
    LimitSell,
    StopLimitBuy,
    StopLimitSell,
}

impl OrderType {
    pub fn code(self) -> u8 {
        match self {
            OrderType::MarketBuy => 1,
            OrderType::MarketSell => 2,
            OrderType::LimitBuy => 3,
            OrderType::LimitSell => 4,
            OrderType::StopLimitBuy => 5,
            OrderType::StopLimitSell => 6,
        }
    }
}

impl Serialize for OrderType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}
