//! Point-in-time market snapshot for a single symbol.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::DataSource;

/// Price and fundamentals for one symbol at one point in time.
///
/// Every market-sourced field is optional: a `None` means the provider could
/// not supply the figure this cycle. Consumers must treat `None` as unknown -
/// it is never equivalent to zero, and it never triggers or suppresses a
/// downstream rule.
///
/// # Fields
///
/// * `symbol` - the ticker this snapshot describes
/// * `currency` - quote currency as reported by the provider, advisory only
///   (the holding's declared currency governs conversions)
/// * `price` - latest traded price in the quote currency
/// * `eps` - trailing earnings per share
/// * `pe_ratio` - trailing price/earnings ratio
/// * `peg_ratio` - price/earnings-to-growth ratio
/// * `beta` - volatility relative to the market
/// * `free_cash_flow` - trailing free cash flow
/// * `revenue_growth_yoy` - year-over-year revenue growth, in percent
/// * `market_cap` - market capitalization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub symbol: String,
    pub currency: Option<String>,
    pub price: Option<Decimal>,
    pub eps: Option<Decimal>,
    pub pe_ratio: Option<Decimal>,
    pub peg_ratio: Option<Decimal>,
    pub beta: Option<Decimal>,
    pub free_cash_flow: Option<Decimal>,
    pub revenue_growth_yoy: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub data_source: DataSource,
    pub as_of: DateTime<Utc>,
}

impl MarketSnapshot {
    /// Snapshot for a symbol the provider could not serve this cycle.
    ///
    /// Every market-sourced field is unknown. Positions valued against such
    /// a snapshot surface as unpriced rather than disappearing.
    pub fn unavailable(symbol: &str) -> Self {
        MarketSnapshot {
            symbol: symbol.to_string(),
            currency: None,
            price: None,
            eps: None,
            pe_ratio: None,
            peg_ratio: None,
            beta: None,
            free_cash_flow: None,
            revenue_growth_yoy: None,
            market_cap: None,
            data_source: DataSource::default(),
            as_of: Utc::now(),
        }
    }

    pub fn has_price(&self) -> bool {
        self.price.is_some()
    }
}
