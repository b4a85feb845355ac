use alloy_primitives::Address;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;
use watcher_core::types::BlockRange;
use watcher_core::{WatcherConfig, WatcherError};
use watcher_scan::{ProviderManager, RpcChainClient, TwapOrderWatcher};

/// Read one required env var and parse it
fn required_env<T: FromStr>(name: &str) -> Result<T, WatcherError> {
    env::var(name)
        .map_err(|_| WatcherError::MissingEnvVar(name.to_string()))?
        .trim()
        .parse::<T>()
        .map_err(|_| WatcherError::MissingEnvVar(format!("{} (invalid format)", name)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("watcher_scan=info".parse()?),
        )
        .init();

    info!("{} starting...", TwapOrderWatcher::DISPLAY_NAME);

    let config = match WatcherConfig::load() {
        Ok(config) => {
            info!(
                twap_address = ?config.twap_address,
                "Configuration loaded"
            );
            config
        }
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // The host scheduler normally supplies the range and subscriber address
    // per scan; this binary runs a single scan driven by the environment.
    let from_block: u64 = required_env("FROM_BLOCK")?;
    let to_block: u64 = required_env("TO_BLOCK")?;
    let watched: Address = required_env("WATCHED_ADDRESS")?;

    let provider = Arc::new(ProviderManager::new(&config.rpc_url).await?);
    let client = Arc::new(RpcChainClient::new(provider, config.twap_address));
    let watcher = TwapOrderWatcher::new(client);

    let range = BlockRange::new(from_block, to_block);
    let notifications = watcher.on_blocks(range, watched).await?;

    if notifications.is_empty() {
        info!(
            from = range.from_block,
            to = range.to_block,
            "No notifications for this range"
        );
    }
    for n in &notifications {
        info!(unique_id = %n.unique_id, "{}", n.notification);
    }

    Ok(())
}
