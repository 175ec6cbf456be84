use thiserror::Error;

/// Validation errors for configured holdings.
///
/// Raised at configuration-load time, never during valuation. A failing
/// holding is fatal for that holding only, not for the whole portfolio.
#[derive(Error, Debug)]
pub enum HoldingError {
    #[error("ticker must not be empty")]
    EmptyTicker,

    #[error("'{0}' has a non-positive unit count")]
    NonPositiveUnits(String),

    #[error("'{0}' has a non-positive buy price")]
    NonPositiveBuyPrice(String),

    #[error("'{0}' has no quote currency")]
    MissingCurrency(String),
}
