//! Valuation module - per-position value, cost basis, and profit/loss.

mod valuation_model;
mod valuation_service;

pub use valuation_model::Valuation;
pub use valuation_service::ValuationService;
