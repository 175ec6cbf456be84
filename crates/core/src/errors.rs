//! Core error types for the valuation engine.
//!
//! Missing market data is NOT an error: unknown values travel as `None`
//! through the valuation pipeline and surface as unpriced positions. The
//! variants here cover what genuinely fails - bad configuration, bad rates,
//! and provider-level fetch failures propagated from the market data crate.

use thiserror::Error;

use crate::fx::FxError;
use crate::portfolio::holdings::HoldingError;
use folioscope_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Invalid holding: {0}")]
    Holding(#[from] HoldingError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

// === From implementations for common error types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
