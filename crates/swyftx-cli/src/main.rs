/*
[INPUT]:  CLI arguments, optional YAML configuration file, access token env var
[OUTPUT]: One Swyftx API call printed as JSON, or the usage notice
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use swyftx_adapter::SwyftxClient;
use swyftx_cli::{CliConfig, Command, USAGE_NOTICE, run_command};

#[derive(Parser, Debug)]
#[command(name = "swyftx", version, about = "Swyftx API command line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "token", env = "SWYFTX_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let Some(command) = args.command else {
        println!("{USAGE_NOTICE}");
        return Ok(());
    };

    let config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    }
    .with_token_override(args.token);
    debug!(
        has_token = !config.access_token.is_empty(),
        "configuration loaded"
    );

    let client = SwyftxClient::with_token(config.client_config(), config.access_token.clone())
        .context("build swyftx client")?;
    info!(base_url = %client.base_url(), "client ready");

    let value = run_command(&client, command).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&value).context("render response")?
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<CliConfig> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
