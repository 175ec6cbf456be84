//! Market data domain models.

mod snapshot;
mod types;

pub use snapshot::MarketSnapshot;
pub use types::DataSource;
