#[cfg(test)]
mod tests {
    use crate::fx::CurrencyConverter;
    use crate::portfolio::holdings::{Holding, InstrumentType};
    use crate::portfolio::recommendation::{Recommendation, RecommendationService, RiskPolicy};
    use crate::portfolio::valuation::{Valuation, ValuationService};
    use folioscope_market_data::MarketSnapshot;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn classifier() -> RecommendationService {
        RecommendationService::new(RiskPolicy::default())
    }

    fn holding(buy_price: Decimal) -> Holding {
        Holding {
            ticker: "PLTR.DE".to_string(),
            name: "Palantir Technologies".to_string(),
            instrument_type: InstrumentType::Stock,
            currency: "CHF".to_string(),
            units: dec!(2),
            buy_price,
            target_horizon: "1-2 years".to_string(),
        }
    }

    fn valuate(buy_price: Decimal, snapshot: &MarketSnapshot) -> Valuation {
        let service = ValuationService::new(CurrencyConverter::new("CHF", vec![]).unwrap());
        service.valuate(&holding(buy_price), snapshot)
    }

    fn snapshot_with_price(price: Decimal) -> MarketSnapshot {
        MarketSnapshot {
            price: Some(price),
            ..MarketSnapshot::unavailable("PLTR.DE")
        }
    }

    #[test]
    fn deep_loss_triggers_stop_loss() {
        // (65.00 - 79.72) / 79.72 * 100 ~ -18.47%, below the -15% default.
        let snapshot = snapshot_with_price(dec!(65.00));
        let valuation = valuate(dec!(79.72), &snapshot);

        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::SellStopLoss
        );
    }

    #[test]
    fn stop_loss_precedes_the_volatility_rule() {
        // -20% with beta 3: capital protection wins over the beta flag.
        let snapshot = MarketSnapshot {
            beta: Some(dec!(3)),
            ..snapshot_with_price(dec!(80))
        };
        let valuation = valuate(dec!(100), &snapshot);
        assert_eq!(valuation.profit_loss_pct, Some(dec!(-20)));

        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::SellStopLoss
        );
    }

    #[test]
    fn take_profit_precedes_the_growth_rule() {
        // ~26.4% gain on a stock that also qualifies as a growth buy.
        let snapshot = MarketSnapshot {
            eps: Some(dec!(1.2)),
            revenue_growth_yoy: Some(dec!(15)),
            ..snapshot_with_price(dec!(15.50))
        };
        let valuation = valuate(dec!(12.26), &snapshot);
        assert_eq!(
            valuation.profit_loss_pct.map(|p| p.round_dp(3)),
            Some(dec!(26.427))
        );

        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::SellTakeProfit
        );
    }

    #[test]
    fn high_peg_is_flagged_for_review() {
        let snapshot = MarketSnapshot {
            peg_ratio: Some(dec!(3.5)),
            ..snapshot_with_price(dec!(100))
        };
        let valuation = valuate(dec!(100), &snapshot);

        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::ReviewHighPeg
        );
    }

    #[test]
    fn unknown_peg_never_triggers_the_review_rule() {
        // PEG unknown, small gain, tame beta, negative EPS: falls through to HOLD.
        let snapshot = MarketSnapshot {
            beta: Some(dec!(1)),
            eps: Some(dec!(-1)),
            ..snapshot_with_price(dec!(105))
        };
        let valuation = valuate(dec!(100), &snapshot);
        assert_eq!(valuation.profit_loss_pct, Some(dec!(5)));

        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::Hold
        );
    }

    #[test]
    fn high_beta_is_flagged_as_risky() {
        let snapshot = MarketSnapshot {
            beta: Some(dec!(2.4)),
            ..snapshot_with_price(dec!(100))
        };
        let valuation = valuate(dec!(100), &snapshot);

        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::RiskyHighVolatility
        );
    }

    #[test]
    fn profitable_growth_is_a_buy() {
        let snapshot = MarketSnapshot {
            eps: Some(dec!(1.2)),
            revenue_growth_yoy: Some(dec!(15)),
            ..snapshot_with_price(dec!(105))
        };
        let valuation = valuate(dec!(100), &snapshot);

        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::BuyGrowth
        );
    }

    #[test]
    fn growth_needs_both_eps_and_revenue_to_be_known() {
        let snapshot = MarketSnapshot {
            eps: Some(dec!(1.2)),
            ..snapshot_with_price(dec!(105))
        };
        let valuation = valuate(dec!(100), &snapshot);

        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::Hold
        );
    }

    #[test]
    fn unknown_profit_loss_skips_the_sell_rules() {
        // No price: the stop-loss and take-profit rules cannot fire, but a
        // known fundamental further down the order still can.
        let snapshot = MarketSnapshot {
            peg_ratio: Some(dec!(4)),
            ..MarketSnapshot::unavailable("PLTR.DE")
        };
        let valuation = valuate(dec!(79.72), &snapshot);
        assert_eq!(valuation.profit_loss_pct, None);

        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::ReviewHighPeg
        );
    }

    #[test]
    fn equal_prices_hold_at_exactly_zero_percent() {
        let snapshot = snapshot_with_price(dec!(79.72));
        let valuation = valuate(dec!(79.72), &snapshot);
        assert_eq!(valuation.profit_loss_pct, Some(dec!(0)));

        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::Hold
        );
    }

    #[test]
    fn thresholds_are_inclusive_at_the_boundary() {
        let snapshot = snapshot_with_price(dec!(85));
        let valuation = valuate(dec!(100), &snapshot);
        assert_eq!(valuation.profit_loss_pct, Some(dec!(-15)));
        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::SellStopLoss
        );

        let snapshot = snapshot_with_price(dec!(125));
        let valuation = valuate(dec!(100), &snapshot);
        assert_eq!(valuation.profit_loss_pct, Some(dec!(25)));
        assert_eq!(
            classifier().classify(&valuation, &snapshot),
            Recommendation::SellTakeProfit
        );
    }

    #[test]
    fn custom_policy_overrides_the_default_thresholds() {
        let policy = RiskPolicy {
            stop_loss_pct: dec!(-5),
            ..RiskPolicy::default()
        };
        let classifier = RecommendationService::new(policy);

        let snapshot = snapshot_with_price(dec!(94));
        let valuation = valuate(dec!(100), &snapshot);

        assert_eq!(
            classifier.classify(&valuation, &snapshot),
            Recommendation::SellStopLoss
        );
    }

    #[test]
    fn inverted_policy_fails_validation() {
        let policy = RiskPolicy {
            stop_loss_pct: dec!(30),
            take_profit_pct: dec!(25),
            ..RiskPolicy::default()
        };

        assert!(policy.validate().is_err());
        assert!(RiskPolicy::default().validate().is_ok());
    }
}
