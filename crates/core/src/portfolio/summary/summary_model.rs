use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Portfolio-level totals for one evaluation cycle, in the reporting currency.
///
/// Invariants: `invested = total_deposit - cash`,
/// `total_value = total_position_value + cash`,
/// `growth_pct = (total_value - total_deposit) / total_deposit * 100`.
///
/// `unpriced` lists the tickers whose value could not be determined this
/// cycle. Their positions are excluded from `total_position_value`, so a
/// non-empty list marks the totals as incomplete rather than letting them
/// read as exact.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub reporting_currency: String,
    pub total_position_value: Decimal,
    pub cash: Decimal,
    pub total_deposit: Decimal,
    pub invested: Decimal,
    pub total_value: Decimal,

    /// `None` when `total_deposit` is zero - growth against nothing is
    /// undefined, not an error.
    pub growth_pct: Option<Decimal>,

    pub unpriced: Vec<String>,
}

impl PortfolioSummary {
    pub fn has_unpriced_positions(&self) -> bool {
        !self.unpriced.is_empty()
    }

    /// Rounds the monetary fields for display, once, at the boundary.
    pub fn rounded_for_display(mut self) -> Self {
        let round = |d: Decimal| d.round_dp(DISPLAY_DECIMAL_PRECISION);

        self.total_position_value = round(self.total_position_value);
        self.cash = round(self.cash);
        self.total_deposit = round(self.total_deposit);
        self.invested = round(self.invested);
        self.total_value = round(self.total_value);
        self.growth_pct = self.growth_pct.map(round);
        self
    }
}
