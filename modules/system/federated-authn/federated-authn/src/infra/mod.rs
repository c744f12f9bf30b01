//! Infrastructure adapters for exchange clients.

pub mod blocking;

pub use blocking::{BlockingTokenExchangeClient, SpawnBlockingExchange};
