use alloy::network::Ethereum;
use alloy::providers::{Provider, ProviderBuilder};
use std::sync::Arc;
use watcher_core::{Result, WatcherError};

/// Boxed provider trait for HTTP connections
pub type BoxedProvider = Arc<dyn Provider<Ethereum> + Send + Sync>;

/// Manages the RPC provider for HTTP connections
pub struct ProviderManager {
    http: BoxedProvider,
}

impl ProviderManager {
    /// Create a new provider manager with HTTP connection
    pub async fn new(http_url: &str) -> Result<Self> {
        let http_url: reqwest::Url = http_url
            .parse()
            .map_err(|e| WatcherError::Rpc(format!("Invalid HTTP URL: {}", e)))?;

        let http = ProviderBuilder::new().connect_http(http_url);

        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Get HTTP provider reference
    pub fn http(&self) -> &BoxedProvider {
        &self.http
    }
}
