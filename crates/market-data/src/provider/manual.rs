//! In-memory snapshot provider for manually priced portfolios.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::MarketSnapshot;

use super::traits::SnapshotProvider;

/// Serves snapshots from an in-memory map, keyed by symbol.
///
/// This is the `DataSource::Manual` path: users who price their positions by
/// hand, and tests that need deterministic market data.
#[derive(Default)]
pub struct ManualProvider {
    snapshots: HashMap<String, MarketSnapshot>,
}

impl ManualProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, keyed by the snapshot's own symbol.
    pub fn with_snapshot(mut self, snapshot: MarketSnapshot) -> Self {
        self.snapshots.insert(snapshot.symbol.clone(), snapshot);
        self
    }

    pub fn insert(&mut self, snapshot: MarketSnapshot) {
        self.snapshots.insert(snapshot.symbol.clone(), snapshot);
    }
}

#[async_trait]
impl SnapshotProvider for ManualProvider {
    fn id(&self) -> &'static str {
        "MANUAL"
    }

    async fn latest_snapshot(&self, symbol: &str) -> Result<MarketSnapshot, MarketDataError> {
        self.snapshots
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(symbol: &str, price: rust_decimal::Decimal) -> MarketSnapshot {
        MarketSnapshot {
            price: Some(price),
            ..MarketSnapshot::unavailable(symbol)
        }
    }

    #[tokio::test]
    async fn returns_snapshot_for_known_symbol() {
        let provider = ManualProvider::new().with_snapshot(snapshot("RBOT.SW", dec!(15.50)));

        let fetched = provider.latest_snapshot("RBOT.SW").await.unwrap();
        assert_eq!(fetched.price, Some(dec!(15.50)));
    }

    #[tokio::test]
    async fn unknown_symbol_is_an_error() {
        let provider = ManualProvider::new();

        let err = provider.latest_snapshot("NVDA").await.unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(_)));
    }

    #[tokio::test]
    async fn batch_fetch_degrades_missing_symbols() {
        let provider = ManualProvider::new().with_snapshot(snapshot("RBOT.SW", dec!(15.50)));

        let symbols = vec!["RBOT.SW".to_string(), "NVDA".to_string()];
        let snapshots = provider.latest_snapshots(&symbols).await;

        assert_eq!(snapshots.len(), 2);
        assert!(snapshots["RBOT.SW"].has_price());
        assert!(!snapshots["NVDA"].has_price());
    }
}
