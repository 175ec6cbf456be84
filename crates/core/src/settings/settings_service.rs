use std::fs;
use std::path::Path;

use log::error;
use rust_decimal::Decimal;

use super::settings_model::PortfolioSettings;
use crate::errors::{Error, Result};
use crate::portfolio::holdings::Holding;

/// Result of loading a portfolio configuration.
///
/// Holdings that fail validation are fatal for that holding only: they are
/// removed from the settings and reported here, so one bad row never takes
/// down the rest of the portfolio.
#[derive(Debug, Clone)]
pub struct LoadedPortfolio {
    pub settings: PortfolioSettings,
    pub rejected: Vec<RejectedHolding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedHolding {
    pub ticker: String,
    pub reason: String,
}

/// Loads and validates portfolio configuration.
pub struct SettingsService;

impl SettingsService {
    pub fn load_from_path(path: &Path) -> Result<LoadedPortfolio> {
        let raw = fs::read_to_string(path).map_err(|e| Error::ConfigIO(e.to_string()))?;
        Self::load_from_str(&raw)
    }

    /// Parses a JSON configuration document.
    ///
    /// Portfolio-level problems (unparseable document, negative cash or
    /// deposit, malformed reporting currency, inverted risk policy) are
    /// fatal. Per-holding problems are isolated into `rejected`.
    pub fn load_from_str(raw: &str) -> Result<LoadedPortfolio> {
        let mut settings: PortfolioSettings =
            serde_json::from_str(raw).map_err(|e| Error::InvalidConfigValue(e.to_string()))?;

        Self::validate_portfolio(&settings)?;

        let (holdings, rejected) = Self::partition_holdings(std::mem::take(&mut settings.holdings));
        settings.holdings = holdings;

        Ok(LoadedPortfolio { settings, rejected })
    }

    fn validate_portfolio(settings: &PortfolioSettings) -> Result<()> {
        let currency = &settings.reporting_currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidConfigValue(format!(
                "reporting currency '{}' is not a 3-letter code",
                currency
            )));
        }

        if settings.cash_balance < Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "cash balance must not be negative, got {}",
                settings.cash_balance
            )));
        }

        if settings.total_deposit < Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "total deposit must not be negative, got {}",
                settings.total_deposit
            )));
        }

        settings.risk_policy.validate()
    }

    fn partition_holdings(holdings: Vec<Holding>) -> (Vec<Holding>, Vec<RejectedHolding>) {
        let mut valid = Vec::with_capacity(holdings.len());
        let mut rejected = Vec::new();

        for holding in holdings {
            match holding.validate() {
                Ok(()) => valid.push(holding),
                Err(e) => {
                    error!("Rejecting holding '{}': {}", holding.ticker, e);
                    rejected.push(RejectedHolding {
                        ticker: holding.ticker.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        (valid, rejected)
    }
}
