use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("No exchange rate available for {0}")]
    RateNotFound(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    #[error("Exchange rate for {from} targets '{actual}' but the reporting currency is '{expected}'")]
    WrongTargetCurrency {
        from: String,
        expected: String,
        actual: String,
    },
}
