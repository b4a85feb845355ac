pub mod client;
pub mod fetcher;
pub mod provider;
pub mod reconciler;
pub mod subscription;
pub mod watcher;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ChainClient, RpcChainClient};
pub use fetcher::EventFetcher;
pub use provider::ProviderManager;
pub use reconciler::Reconciler;
pub use subscription::FormField;
pub use watcher::TwapOrderWatcher;
