//! Settings module - portfolio configuration model and loader.

mod settings_model;
mod settings_service;

pub use settings_model::{PortfolioSettings, WatchlistItem};
pub use settings_service::{LoadedPortfolio, RejectedHolding, SettingsService};
