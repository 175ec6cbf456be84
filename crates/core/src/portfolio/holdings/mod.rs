//! Holdings module - the configured portfolio positions.

mod holdings_errors;
mod holdings_model;

pub use holdings_errors::HoldingError;
pub use holdings_model::{Holding, InstrumentType};
