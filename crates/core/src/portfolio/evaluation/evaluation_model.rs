use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::InstrumentType;
use crate::portfolio::summary::PortfolioSummary;
use crate::portfolio::valuation::Valuation;
use crate::settings::WatchlistItem;

/// Everything one evaluation cycle produces, ready for rendering.
///
/// Derived and display-rounded; a new cycle replaces it wholesale.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEvaluation {
    pub as_of: DateTime<Utc>,
    pub reporting_currency: String,
    pub valuations: Vec<Valuation>,
    pub summary: PortfolioSummary,

    /// Echoed from configuration so the rendering layer can show the
    /// watchlist next to the positions. Watchlist entries carry no value.
    pub watchlist: Vec<WatchlistItem>,
}

impl PortfolioEvaluation {
    /// Groups valuations by instrument type for separate display tables.
    pub fn valuations_by_type(&self) -> BTreeMap<InstrumentType, Vec<&Valuation>> {
        let mut groups: BTreeMap<InstrumentType, Vec<&Valuation>> = BTreeMap::new();
        for valuation in &self.valuations {
            groups
                .entry(valuation.instrument_type)
                .or_default()
                .push(valuation);
        }
        groups
    }
}
