//! Folioscope Market Data Crate
//!
//! This crate defines the provider-facing seam through which market data
//! reaches the valuation engine.
//!
//! # Overview
//!
//! The engine consumes already-resolved [`MarketSnapshot`] records; it never
//! performs I/O itself. Everything that talks to the outside world implements
//! [`SnapshotProvider`] and lives behind that trait:
//!
//! ```text
//! +------------------+     +------------------+
//! |   Domain Layer   | --> | SnapshotProvider |  (trait, async)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  MarketSnapshot  |  (price + fundamentals)
//!                          +------------------+
//! ```
//!
//! A field the provider could not obtain is `None`, never zero. A symbol the
//! provider cannot serve at all degrades to [`MarketSnapshot::unavailable`],
//! so a single bad ticker never poisons a batch fetch.
//!
//! # Core Types
//!
//! - [`MarketSnapshot`] - point-in-time price and fundamentals for one symbol
//! - [`DataSource`] - where a snapshot came from
//! - [`SnapshotProvider`] - trait implemented by data sources
//! - [`ManualProvider`] - in-memory provider for manually priced portfolios
//! - [`MarketDataError`] - fetch-level failure taxonomy

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{DataSource, MarketSnapshot};
pub use provider::{ManualProvider, SnapshotProvider};
