use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};

use super::evaluation_model::PortfolioEvaluation;
use crate::errors::{Error, Result};
use crate::fx::{CurrencyConverter, ExchangeRate};
use crate::portfolio::holdings::Holding;
use crate::portfolio::recommendation::RecommendationService;
use crate::portfolio::summary::aggregate;
use crate::portfolio::valuation::{Valuation, ValuationService};
use crate::settings::PortfolioSettings;
use folioscope_market_data::{MarketSnapshot, SnapshotProvider};

#[async_trait]
pub trait EvaluationServiceTrait: Send + Sync {
    /// Runs one full evaluation cycle over the configured portfolio.
    async fn evaluate(&self) -> Result<PortfolioEvaluation>;

    /// Fetches a fresh snapshot for a single configured position and
    /// valuates it. Unlike the batch cycle, a fetch failure here propagates.
    async fn evaluate_position(&self, ticker: &str) -> Result<Valuation>;
}

/// Drives the engine: fetch snapshots, valuate, classify, aggregate.
///
/// The service holds no mutable state; every call recomputes from the
/// configured settings and whatever the provider returns, so it is safe to
/// run repeatedly or concurrently across independent portfolios. Retries
/// and snapshot caching belong to the provider, not here.
pub struct EvaluationService {
    provider: Arc<dyn SnapshotProvider>,
    settings: PortfolioSettings,
    valuation_service: ValuationService,
    recommendation_service: RecommendationService,
}

impl EvaluationService {
    /// Wires the engine up for one portfolio.
    ///
    /// Fails on an invalid holding or risk policy (the settings loader
    /// normally filters these, but hand-built settings reach this path) and
    /// on a malformed rate table. A quote currency with no rate is not an
    /// error: its positions will surface as unpriced each cycle.
    pub fn new(
        settings: PortfolioSettings,
        exchange_rates: Vec<ExchangeRate>,
        provider: Arc<dyn SnapshotProvider>,
    ) -> Result<Self> {
        settings.risk_policy.validate()?;
        for holding in &settings.holdings {
            holding.validate()?;
        }

        let converter = CurrencyConverter::new(&settings.reporting_currency, exchange_rates)?;

        for holding in &settings.holdings {
            if !converter.has_rate(&holding.currency) {
                warn!(
                    "No exchange rate for {}; positions quoted in it will be unpriced",
                    holding.currency
                );
            }
        }

        let recommendation_service = RecommendationService::new(settings.risk_policy.clone());

        Ok(Self {
            provider,
            settings,
            valuation_service: ValuationService::new(converter),
            recommendation_service,
        })
    }

    pub fn settings(&self) -> &PortfolioSettings {
        &self.settings
    }

    fn valuate_and_classify(&self, holding: &Holding, snapshot: &MarketSnapshot) -> Valuation {
        let mut valuation = self.valuation_service.valuate(holding, snapshot);
        valuation.recommendation = self.recommendation_service.classify(&valuation, snapshot);
        valuation
    }
}

#[async_trait]
impl EvaluationServiceTrait for EvaluationService {
    async fn evaluate(&self) -> Result<PortfolioEvaluation> {
        debug!(
            "Starting portfolio evaluation for {} holdings.",
            self.settings.holdings.len()
        );

        let symbols: Vec<String> = self
            .settings
            .holdings
            .iter()
            .map(|h| h.ticker.clone())
            .collect();
        let snapshots = self.provider.latest_snapshots(&symbols).await;

        let mut valuations = Vec::with_capacity(self.settings.holdings.len());
        for holding in &self.settings.holdings {
            let snapshot = snapshots
                .get(&holding.ticker)
                .cloned()
                .unwrap_or_else(|| MarketSnapshot::unavailable(&holding.ticker));
            valuations.push(self.valuate_and_classify(holding, &snapshot));
        }

        // Aggregate at full precision, then round everything once for display.
        let summary = aggregate(
            &valuations,
            self.settings.cash_balance,
            self.settings.total_deposit,
            &self.settings.reporting_currency,
        )
        .rounded_for_display();

        let valuations = valuations
            .into_iter()
            .map(Valuation::rounded_for_display)
            .collect();

        debug!("Finished portfolio evaluation.");

        Ok(PortfolioEvaluation {
            as_of: Utc::now(),
            reporting_currency: self.settings.reporting_currency.clone(),
            valuations,
            summary,
            watchlist: self.settings.watchlist.clone(),
        })
    }

    async fn evaluate_position(&self, ticker: &str) -> Result<Valuation> {
        let holding = self
            .settings
            .holdings
            .iter()
            .find(|h| h.ticker == ticker)
            .ok_or_else(|| {
                Error::InvalidConfigValue(format!("ticker '{}' is not part of the portfolio", ticker))
            })?;

        let snapshot = self.provider.latest_snapshot(&holding.ticker).await?;
        Ok(self
            .valuate_and_classify(holding, &snapshot)
            .rounded_for_display())
    }
}
