use crate::error::{Result, WatcherError};
use alloy_primitives::Address;
use std::env;
use std::str::FromStr;

/// TWAP contract deployment watched by default. Overridable via `TWAP_ADDRESS`
/// for testnets or redeployments.
pub const DEFAULT_TWAP_ADDRESS: &str = "0x8358686cf6dE08c89EE48016b6A40BBf1b1F9d3D";

/// Runtime configuration from environment variables
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    pub rpc_url: String,
    pub twap_address: Address,
}

impl WatcherConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let rpc_url = Self::sanitize_url(
            env::var("RPC_URL").map_err(|_| WatcherError::MissingEnvVar("RPC_URL".to_string()))?,
        );

        let raw_address =
            env::var("TWAP_ADDRESS").unwrap_or_else(|_| DEFAULT_TWAP_ADDRESS.to_string());
        let twap_address = Address::from_str(raw_address.trim())
            .map_err(|_| WatcherError::InvalidAddress(raw_address))?;

        Ok(Self {
            rpc_url,
            twap_address,
        })
    }

    /// Sanitize URL by removing surrounding quotes and whitespace
    fn sanitize_url(url: String) -> String {
        let trimmed = url.trim();
        let without_quotes = if trimmed.starts_with('"') && trimmed.ends_with('"') {
            &trimmed[1..trimmed.len() - 1]
        } else if trimmed.starts_with('\'') && trimmed.ends_with('\'') {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };
        without_quotes.to_string()
    }
}
