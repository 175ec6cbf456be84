use crate::fx::fx_errors::FxError;
use crate::fx::fx_model::ExchangeRate;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Converts amounts from their quote currency into the reporting currency.
///
/// The table maps each quote currency to the value of 1 unit of it in the
/// reporting currency; conversion is multiplication, uniformly. A currency
/// without an entry fails closed: the lookup errors and the caller treats
/// the result as unknown - never as a rate of 1.0 or 0.
pub struct CurrencyConverter {
    reporting_currency: String,

    /// Currency -> value of one unit in the reporting currency.
    rates: HashMap<String, Decimal>,
}

impl CurrencyConverter {
    /// Builds a converter from a list of rate observations.
    ///
    /// Rates must target the reporting currency; a rate quoted against any
    /// other currency is rejected rather than silently misapplied. Zero and
    /// negative rates are rejected. When a currency appears more than once,
    /// the newest observation wins.
    pub fn new(
        reporting_currency: &str,
        exchange_rates: Vec<ExchangeRate>,
    ) -> Result<Self, FxError> {
        let mut dated_rates: HashMap<String, (DateTime<Utc>, Decimal)> = HashMap::new();

        for rate in exchange_rates {
            if rate.from_currency == rate.to_currency {
                continue;
            }

            if rate.to_currency != reporting_currency {
                return Err(FxError::WrongTargetCurrency {
                    from: rate.from_currency,
                    expected: reporting_currency.to_string(),
                    actual: rate.to_currency,
                });
            }

            if rate.rate <= Decimal::ZERO {
                return Err(FxError::InvalidRate(format!(
                    "{} for {}",
                    rate.rate,
                    rate.pair()
                )));
            }

            let entry = dated_rates
                .entry(rate.from_currency.clone())
                .or_insert((rate.timestamp, rate.rate));
            if rate.timestamp >= entry.0 {
                *entry = (rate.timestamp, rate.rate);
            }
        }

        Ok(CurrencyConverter {
            reporting_currency: reporting_currency.to_string(),
            rates: dated_rates
                .into_iter()
                .map(|(currency, (_, rate))| (currency, rate))
                .collect(),
        })
    }

    pub fn reporting_currency(&self) -> &str {
        &self.reporting_currency
    }

    /// Whether amounts in `currency` can be converted.
    pub fn has_rate(&self, currency: &str) -> bool {
        currency == self.reporting_currency || self.rates.contains_key(currency)
    }

    /// Rate for 1 unit of `from_currency` in the reporting currency.
    pub fn get_rate(&self, from_currency: &str) -> Result<Decimal, FxError> {
        if from_currency == self.reporting_currency {
            return Ok(Decimal::ONE);
        }

        self.rates
            .get(from_currency)
            .copied()
            .ok_or_else(|| {
                FxError::RateNotFound(format!(
                    "{}/{}",
                    from_currency, self.reporting_currency
                ))
            })
    }

    /// Converts `amount` from `from_currency` into the reporting currency.
    pub fn convert(&self, amount: Decimal, from_currency: &str) -> Result<Decimal, FxError> {
        if from_currency == self.reporting_currency {
            return Ok(amount);
        }

        Ok(amount * self.get_rate(from_currency)?)
    }
}
