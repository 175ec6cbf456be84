use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::recommendation_constants::{
    DEFAULT_BETA_RISK_LIMIT, DEFAULT_GROWTH_MIN_REVENUE_PCT, DEFAULT_PEG_REVIEW_LIMIT,
    DEFAULT_STOP_LOSS_PCT, DEFAULT_TAKE_PROFIT_PCT,
};
use crate::errors::{Error, Result};

/// Categorical buy/sell recommendation for one position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    SellStopLoss,
    SellTakeProfit,
    ReviewHighPeg,
    RiskyHighVolatility,
    BuyGrowth,
    Hold,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::SellStopLoss => "SELL_STOP_LOSS",
            Recommendation::SellTakeProfit => "SELL_TAKE_PROFIT",
            Recommendation::ReviewHighPeg => "REVIEW_HIGH_PEG",
            Recommendation::RiskyHighVolatility => "RISKY_HIGH_VOLATILITY",
            Recommendation::BuyGrowth => "BUY_GROWTH",
            Recommendation::Hold => "HOLD",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-portfolio risk thresholds driving the classifier.
///
/// Each field overrides one rule's trigger; omitted fields fall back to the
/// defaults in `recommendation_constants`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskPolicy {
    #[serde(default = "default_stop_loss_pct")]
    pub stop_loss_pct: Decimal,

    #[serde(default = "default_take_profit_pct")]
    pub take_profit_pct: Decimal,

    #[serde(default = "default_peg_review_limit")]
    pub peg_review_limit: Decimal,

    #[serde(default = "default_beta_risk_limit")]
    pub beta_risk_limit: Decimal,

    #[serde(default = "default_growth_min_revenue_pct")]
    pub growth_min_revenue_pct: Decimal,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        RiskPolicy {
            stop_loss_pct: DEFAULT_STOP_LOSS_PCT,
            take_profit_pct: DEFAULT_TAKE_PROFIT_PCT,
            peg_review_limit: DEFAULT_PEG_REVIEW_LIMIT,
            beta_risk_limit: DEFAULT_BETA_RISK_LIMIT,
            growth_min_revenue_pct: DEFAULT_GROWTH_MIN_REVENUE_PCT,
        }
    }
}

impl RiskPolicy {
    /// A policy whose stop-loss is at or above its take-profit would make
    /// every position a sell; reject it at configuration time.
    pub fn validate(&self) -> Result<()> {
        if self.stop_loss_pct >= self.take_profit_pct {
            return Err(Error::InvalidConfigValue(format!(
                "stop-loss ({}) must be below take-profit ({})",
                self.stop_loss_pct, self.take_profit_pct
            )));
        }
        Ok(())
    }
}

fn default_stop_loss_pct() -> Decimal {
    DEFAULT_STOP_LOSS_PCT
}

fn default_take_profit_pct() -> Decimal {
    DEFAULT_TAKE_PROFIT_PCT
}

fn default_peg_review_limit() -> Decimal {
    DEFAULT_PEG_REVIEW_LIMIT
}

fn default_beta_risk_limit() -> Decimal {
    DEFAULT_BETA_RISK_LIMIT
}

fn default_growth_min_revenue_pct() -> Decimal {
    DEFAULT_GROWTH_MIN_REVENUE_PCT
}
