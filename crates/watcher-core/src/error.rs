use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid block range: from_block {from} is past to_block {to}")]
    InvalidRange { from: u64, to: u64 },

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("ABI decode error: {0}")]
    AbiDecode(String),
}

pub type Result<T> = std::result::Result<T, WatcherError>;
