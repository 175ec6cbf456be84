use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REPORTING_CURRENCY;
use crate::portfolio::holdings::Holding;
use crate::portfolio::recommendation::RiskPolicy;

/// Static portfolio configuration.
///
/// Everything here is supplied by the user, not derived: the positions, the
/// cash on hand, the total capital deposited, and the risk thresholds. Each
/// evaluation cycle reads it and produces derived records; nothing in it is
/// ever mutated by the engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSettings {
    /// Currency in which portfolio totals are expressed.
    #[serde(default = "default_reporting_currency")]
    pub reporting_currency: String,

    pub cash_balance: Decimal,
    pub total_deposit: Decimal,

    #[serde(default)]
    pub risk_policy: RiskPolicy,

    #[serde(default)]
    pub holdings: Vec<Holding>,

    #[serde(default)]
    pub watchlist: Vec<WatchlistItem>,
}

/// A ticker being watched but not held.
///
/// Display-only: watchlist entries are never valued and never enter the
/// portfolio totals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub ticker: String,
    pub name: String,
    pub currency: String,
    #[serde(default)]
    pub comment: Option<String>,
}

fn default_reporting_currency() -> String {
    DEFAULT_REPORTING_CURRENCY.to_string()
}
