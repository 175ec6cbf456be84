use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::summary_model::PortfolioSummary;
use crate::portfolio::valuation::Valuation;

/// Sums position values and cash into portfolio totals.
///
/// Valuations without a known value are excluded from the sum and surfaced
/// in `unpriced`; they are never coerced to zero and never dropped silently.
pub fn aggregate(
    valuations: &[Valuation],
    cash: Decimal,
    total_deposit: Decimal,
    reporting_currency: &str,
) -> PortfolioSummary {
    let mut total_position_value = Decimal::ZERO;
    let mut unpriced = Vec::new();

    for valuation in valuations {
        match valuation.market_value {
            Some(value) => total_position_value += value,
            None => unpriced.push(valuation.ticker.clone()),
        }
    }

    if !unpriced.is_empty() {
        warn!(
            "{} position(s) unpriced this cycle, excluded from totals: {}",
            unpriced.len(),
            unpriced.join(", ")
        );
    }

    let invested = total_deposit - cash;
    let total_value = total_position_value + cash;

    let growth_pct = if total_deposit.is_zero() {
        warn!("total deposit is zero, growth percentage is undefined");
        None
    } else {
        Some((total_value - total_deposit) / total_deposit * dec!(100))
    };

    PortfolioSummary {
        reporting_currency: reporting_currency.to_string(),
        total_position_value,
        cash,
        total_deposit,
        invested,
        total_value,
        growth_pct,
        unpriced,
    }
}
