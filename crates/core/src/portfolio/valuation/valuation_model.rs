use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::holdings::InstrumentType;
use crate::portfolio::recommendation::Recommendation;

/// Valued view of one position for a single evaluation cycle.
///
/// Recomputed fresh from the holding, its market snapshot, and the FX table
/// on every cycle; never persisted, never merged across cycles.
///
/// Monetary fields follow the local/base split: `_local` values are in the
/// holding's quote currency, `_base` values in the reporting currency. Any
/// `None` means the figure could not be determined this cycle. The
/// profit/loss percentage is computed from the quote-currency price pair, so
/// it stays meaningful even when the reporting-currency conversion is
/// unavailable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    // Position identity
    pub ticker: String,
    pub name: String,
    pub instrument_type: InstrumentType,
    pub quote_currency: String,
    pub target_horizon: String,
    pub units: Decimal,
    pub buy_price: Decimal,

    // Current prices
    pub current_price_local: Option<Decimal>,
    pub current_price_base: Option<Decimal>,
    pub fx_rate: Option<Decimal>,

    // Value and performance
    pub market_value: Option<Decimal>,
    pub cost_basis_local: Decimal,
    pub cost_basis_base: Option<Decimal>,
    pub profit_loss: Option<Decimal>,
    pub profit_loss_pct: Option<Decimal>,

    // Fundamentals carried through for display
    pub eps: Option<Decimal>,
    pub pe_ratio: Option<Decimal>,
    pub peg_ratio: Option<Decimal>,
    pub beta: Option<Decimal>,
    pub free_cash_flow: Option<Decimal>,
    pub revenue_growth_yoy: Option<Decimal>,
    pub market_cap: Option<Decimal>,

    pub recommendation: Recommendation,
    pub as_of: DateTime<Utc>,
}

impl Valuation {
    /// Whether the position's current value could not be determined.
    ///
    /// Unpriced positions stay listed but are excluded from aggregate sums.
    pub fn is_unpriced(&self) -> bool {
        self.market_value.is_none()
    }

    /// Rounds every monetary, percentage, and fundamental field for display.
    ///
    /// Rounding happens here once, at the boundary; all upstream arithmetic
    /// runs at full precision so errors never compound.
    pub fn rounded_for_display(mut self) -> Self {
        let round = |d: Decimal| d.round_dp(DISPLAY_DECIMAL_PRECISION);

        self.buy_price = round(self.buy_price);
        self.current_price_local = self.current_price_local.map(round);
        self.current_price_base = self.current_price_base.map(round);
        self.market_value = self.market_value.map(round);
        self.cost_basis_local = round(self.cost_basis_local);
        self.cost_basis_base = self.cost_basis_base.map(round);
        self.profit_loss = self.profit_loss.map(round);
        self.profit_loss_pct = self.profit_loss_pct.map(round);
        self.eps = self.eps.map(round);
        self.pe_ratio = self.pe_ratio.map(round);
        self.peg_ratio = self.peg_ratio.map(round);
        self.beta = self.beta.map(round);
        self.free_cash_flow = self.free_cash_flow.map(round);
        self.revenue_growth_yoy = self.revenue_growth_yoy.map(round);
        self.market_cap = self.market_cap.map(round);
        self
    }
}
