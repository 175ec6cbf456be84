use log::debug;
use rust_decimal::Decimal;

use super::recommendation_model::{Recommendation, RiskPolicy};
use crate::portfolio::valuation::Valuation;
use folioscope_market_data::MarketSnapshot;

/// Maps a valued position to a recommendation via ordered rule evaluation.
///
/// Rules run in strict order and the first match wins; capital protection
/// (stop-loss, take-profit) is checked before any opportunity signal. A rule
/// whose required input is unknown is skipped entirely - an unknown
/// fundamental neither triggers nor suppresses a recommendation.
pub struct RecommendationService {
    policy: RiskPolicy,
}

impl RecommendationService {
    pub fn new(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    pub fn classify(&self, valuation: &Valuation, snapshot: &MarketSnapshot) -> Recommendation {
        if let Some(profit_loss_pct) = valuation.profit_loss_pct {
            if profit_loss_pct <= self.policy.stop_loss_pct {
                return Recommendation::SellStopLoss;
            }
            if profit_loss_pct >= self.policy.take_profit_pct {
                return Recommendation::SellTakeProfit;
            }
        } else {
            debug!(
                "{}: profit/loss unknown, skipping stop-loss and take-profit rules",
                valuation.ticker
            );
        }

        if let Some(peg_ratio) = snapshot.peg_ratio {
            if peg_ratio > self.policy.peg_review_limit {
                return Recommendation::ReviewHighPeg;
            }
        }

        if let Some(beta) = snapshot.beta {
            if beta > self.policy.beta_risk_limit {
                return Recommendation::RiskyHighVolatility;
            }
        }

        if let (Some(eps), Some(revenue_growth)) = (snapshot.eps, snapshot.revenue_growth_yoy) {
            if eps > Decimal::ZERO && revenue_growth > self.policy.growth_min_revenue_pct {
                return Recommendation::BuyGrowth;
            }
        }

        Recommendation::Hold
    }
}
