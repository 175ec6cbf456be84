use chrono::{DateTime, Utc};
use folioscope_market_data::DataSource;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One exchange rate observation.
///
/// `rate` is the value of 1 unit of `from_currency` expressed in
/// `to_currency`, and is applied by multiplication only. The converter
/// rejects rates whose `to_currency` is not the reporting currency, so a
/// rate can never be applied in the wrong direction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub from_currency: String,
    pub to_currency: String,
    #[serde(serialize_with = "serialize_decimal_6")]
    pub rate: Decimal,
    pub source: DataSource,
    pub timestamp: DateTime<Utc>,
}

impl ExchangeRate {
    /// Pair label for logging, e.g. "EUR/CHF".
    pub fn pair(&self) -> String {
        format!("{}/{}", self.from_currency, self.to_currency)
    }
}

fn serialize_decimal_6<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let rounded = decimal.round_dp(6);
    serializer.serialize_str(&rounded.to_string())
}
