use log::warn;
use rust_decimal_macros::dec;

use super::valuation_model::Valuation;
use crate::fx::CurrencyConverter;
use crate::portfolio::holdings::Holding;
use crate::portfolio::recommendation::Recommendation;
use folioscope_market_data::MarketSnapshot;

/// Computes value, cost basis, and profit/loss for one holding.
///
/// Pure and synchronous: one holding plus one snapshot in, one valuation
/// out. Unknown inputs stay unknown in the output - a missing price or FX
/// rate leaves the affected fields `None` and the position flagged unpriced.
pub struct ValuationService {
    converter: CurrencyConverter,
}

impl ValuationService {
    pub fn new(converter: CurrencyConverter) -> Self {
        Self { converter }
    }

    pub fn reporting_currency(&self) -> &str {
        self.converter.reporting_currency()
    }

    pub fn converter(&self) -> &CurrencyConverter {
        &self.converter
    }

    /// Valuates `holding` against `snapshot`.
    ///
    /// The holding's declared quote currency governs conversion. A snapshot
    /// reporting a different currency is logged and otherwise ignored.
    ///
    /// The profit/loss percentage compares the quote-currency price pair
    /// directly, so it is computable whenever the price is known, FX rate or
    /// not, and is invariant under the choice of reporting currency.
    pub fn valuate(&self, holding: &Holding, snapshot: &MarketSnapshot) -> Valuation {
        let context = format!("Valuation [{} ({})]", holding.ticker, holding.instrument_type);

        if let Some(snapshot_currency) = &snapshot.currency {
            if snapshot_currency != &holding.currency {
                warn!(
                    "{}: holding currency ({}) differs from quote currency ({}). Using the holding's currency for conversion.",
                    context, holding.currency, snapshot_currency
                );
            }
        }

        let current_price_local = snapshot.price;
        if current_price_local.is_none() {
            warn!("{}: no current price. Position will be unpriced.", context);
        }

        let fx_rate = match self.converter.get_rate(&holding.currency) {
            Ok(rate) => Some(rate),
            Err(e) => {
                warn!(
                    "{}: cannot convert {} to {}: {}. Position will be unpriced.",
                    context,
                    holding.currency,
                    self.converter.reporting_currency(),
                    e
                );
                None
            }
        };

        let current_price_base = match (current_price_local, fx_rate) {
            (Some(price), Some(rate)) => Some(price * rate),
            _ => None,
        };

        let market_value = current_price_base.map(|price| holding.units * price);

        let cost_basis_local = holding.cost_basis_local();
        let cost_basis_base = fx_rate.map(|rate| cost_basis_local * rate);

        let profit_loss = match (market_value, cost_basis_base) {
            (Some(value), Some(cost)) => Some(value - cost),
            _ => None,
        };

        // Quote-currency price pair; buy_price > 0 is enforced at load time.
        let profit_loss_pct = current_price_local
            .map(|price| (price - holding.buy_price) / holding.buy_price * dec!(100));

        Valuation {
            ticker: holding.ticker.clone(),
            name: holding.name.clone(),
            instrument_type: holding.instrument_type,
            quote_currency: holding.currency.clone(),
            target_horizon: holding.target_horizon.clone(),
            units: holding.units,
            buy_price: holding.buy_price,
            current_price_local,
            current_price_base,
            fx_rate,
            market_value,
            cost_basis_local,
            cost_basis_base,
            profit_loss,
            profit_loss_pct,
            eps: snapshot.eps,
            pe_ratio: snapshot.pe_ratio,
            peg_ratio: snapshot.peg_ratio,
            beta: snapshot.beta,
            free_cash_flow: snapshot.free_cash_flow,
            revenue_growth_yoy: snapshot.revenue_growth_yoy,
            market_cap: snapshot.market_cap,
            recommendation: Recommendation::Hold,
            as_of: snapshot.as_of,
        }
    }
}
