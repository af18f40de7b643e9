/*
[INPUT]:  Parsed subcommand and a configured SwyftxClient
[OUTPUT]: JSON value describing the operation result
[POS]:    Command layer - maps one subcommand to one adapter call
[UPDATE]: When adapter operations are added or their signatures change
*/

use anyhow::{Context, Result};
use clap::Subcommand;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use swyftx_adapter::SwyftxClient;
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Account balances
    Balance,
    /// Withdrawal limits per asset
    Limits,
    /// Set the default currency (AUD, USD or BTC)
    SetCurrency { code: String },
    /// Placed orders for an asset
    Orders { asset: String },
    /// Market buy of ASSET spending AMOUNT of STANDARD
    PlaceOrder {
        asset: String,
        standard: String,
        amount: Decimal,
        trigger: Decimal,
    },
    /// Price of ASSET in STANDARD
    BuyPrice { asset: String, standard: String },
    /// Selling price of ASSET in STANDARD
    SellPrice { asset: String, standard: String },
    /// Detailed market info for an asset
    Detail { asset: String },
    /// Latest messages
    Messages {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Latest announcements
    Announcements {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// API info
    Info,
    /// Prices on a comparison exchange (swyftx, coinspot)
    Compare { exchange: String },
}

/// Run one subcommand against the client
pub async fn run_command(client: &SwyftxClient, command: Command) -> Result<Value> {
    info!(?command, "running command");
    let value = match command {
        Command::Balance => client.get_account_balance().await.context("get account balance")?,
        Command::Limits => json!(
            client
                .get_withdrawal_limits()
                .await
                .context("get withdrawal limits")?
        ),
        Command::SetCurrency { code } => {
            text_to_json(client.set_currency(&code).await.context("set currency")?)
        }
        Command::Orders { asset } => {
            Value::Array(client.get_orders(&asset).await.context("get orders")?)
        }
        Command::PlaceOrder {
            asset,
            standard,
            amount,
            trigger,
        } => text_to_json(
            client
                .place_order(&asset, &standard, amount, trigger)
                .await
                .context("place order")?,
        ),
        Command::BuyPrice { asset, standard } => json!(
            client
                .get_buy_price(&asset, &standard)
                .await
                .context("get buy price")?
        ),
        Command::SellPrice { asset, standard } => json!(
            client
                .get_sell_price(&asset, &standard)
                .await
                .context("get sell price")?
        ),
        Command::Detail { asset } => client
            .get_detailed_info(&asset)
            .await
            .context("get detailed info")?,
        Command::Messages { limit } => client.get_messages(limit).await.context("get messages")?,
        Command::Announcements { limit } => client
            .get_announcements(limit)
            .await
            .context("get announcements")?,
        Command::Info => client.get_info().await.context("get info")?,
        Command::Compare { exchange } => client
            .compare_exchange(&exchange)
            .await
            .context("compare exchange")?,
    };
    Ok(value)
}

/// Raw-text endpoints usually answer with JSON; keep the text otherwise
fn text_to_json(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
