use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::holdings_errors::HoldingError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum InstrumentType {
    Stock,
    Etf,
}

impl InstrumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentType::Stock => "Stock",
            InstrumentType::Etf => "ETF",
        }
    }
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured portfolio position.
///
/// Immutable per evaluation cycle: each cycle derives a fresh `Valuation`
/// from the holding and never mutates it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub ticker: String,
    pub name: String,
    pub instrument_type: InstrumentType,

    /// Quote currency of `buy_price` and of prices fetched for this ticker.
    pub currency: String,
    pub units: Decimal,
    pub buy_price: Decimal,

    /// Descriptive investment horizon, e.g. "3-5 years".
    #[serde(default)]
    pub target_horizon: String,
}

impl Holding {
    /// Checks the invariants the valuator relies on.
    ///
    /// `buy_price > 0` in particular guarantees the profit/loss percentage
    /// is never a division by zero later on.
    pub fn validate(&self) -> Result<(), HoldingError> {
        if self.ticker.trim().is_empty() {
            return Err(HoldingError::EmptyTicker);
        }
        if self.currency.trim().is_empty() {
            return Err(HoldingError::MissingCurrency(self.ticker.clone()));
        }
        if self.units <= Decimal::ZERO {
            return Err(HoldingError::NonPositiveUnits(self.ticker.clone()));
        }
        if self.buy_price <= Decimal::ZERO {
            return Err(HoldingError::NonPositiveBuyPrice(self.ticker.clone()));
        }
        Ok(())
    }

    /// Cost basis in the quote currency.
    pub fn cost_basis_local(&self) -> Decimal {
        self.units * self.buy_price
    }
}
