pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::WatcherConfig;
pub use error::{Result, WatcherError};
