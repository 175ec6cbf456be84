//! Shared market data types.

use serde::{Deserialize, Serialize};

/// Data source identifiers
pub const DATA_SOURCE_YAHOO: &str = "YAHOO";
pub const DATA_SOURCE_MANUAL: &str = "MANUAL";

/// Represents the source of market data.
///
/// The data source is tracked with each snapshot so consumers can see where
/// a figure came from and treat manual entries differently if they choose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSource {
    /// Yahoo Finance - comprehensive global coverage
    Yahoo,
    /// Manual entry by user
    #[default]
    Manual,
}

impl DataSource {
    /// Returns the string identifier for this data source.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Yahoo => DATA_SOURCE_YAHOO,
            DataSource::Manual => DATA_SOURCE_MANUAL,
        }
    }
}

impl From<DataSource> for String {
    fn from(source: DataSource) -> Self {
        source.as_str().to_string()
    }
}

impl From<&str> for DataSource {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            DATA_SOURCE_YAHOO => DataSource::Yahoo,
            _ => DataSource::Manual,
        }
    }
}
