use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Stop-loss trigger: sell once a position has lost this much, in percent.
pub const DEFAULT_STOP_LOSS_PCT: Decimal = dec!(-15);

/// Take-profit trigger: sell once a position has gained this much, in percent.
pub const DEFAULT_TAKE_PROFIT_PCT: Decimal = dec!(25);

/// PEG ratio above which a position is flagged for review.
pub const DEFAULT_PEG_REVIEW_LIMIT: Decimal = dec!(3);

/// Beta above which a position is flagged as high volatility.
pub const DEFAULT_BETA_RISK_LIMIT: Decimal = dec!(2);

/// Minimum year-over-year revenue growth (percent) for a growth buy signal.
pub const DEFAULT_GROWTH_MIN_REVENUE_PCT: Decimal = dec!(10);
