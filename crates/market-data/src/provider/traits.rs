//! Snapshot provider trait definition.
//!
//! Implement [`SnapshotProvider`] to plug a new data source into the engine.
//! Fetch concurrency, per-source timeouts and TTL caching all belong to the
//! implementation; the engine only sees resolved snapshots.

use std::collections::HashMap;

use async_trait::async_trait;
use log::warn;

use crate::errors::MarketDataError;
use crate::models::MarketSnapshot;

/// Trait for market snapshot providers.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO" or "MANUAL". Used for
    /// logging and for tagging snapshots with their origin.
    fn id(&self) -> &'static str;

    /// Fetch the latest snapshot for one symbol.
    async fn latest_snapshot(&self, symbol: &str) -> Result<MarketSnapshot, MarketDataError>;

    /// Fetch the latest snapshots for a batch of symbols.
    ///
    /// A symbol the provider cannot serve degrades to
    /// [`MarketSnapshot::unavailable`] instead of failing the batch, so every
    /// requested symbol is present in the result.
    async fn latest_snapshots(&self, symbols: &[String]) -> HashMap<String, MarketSnapshot> {
        let mut snapshots = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            match self.latest_snapshot(symbol).await {
                Ok(snapshot) => {
                    snapshots.insert(symbol.clone(), snapshot);
                }
                Err(e) => {
                    warn!("{}: snapshot fetch failed for {}: {}", self.id(), symbol, e);
                    snapshots.insert(symbol.clone(), MarketSnapshot::unavailable(symbol));
                }
            }
        }
        snapshots
    }
}
