//! Peerfolio Market Data - quote models and providers.
//!
//! This crate defines the `QuoteProvider` trait consumed by the domain core,
//! together with an Alpha Vantage HTTP implementation and a deterministic
//! fixture provider for demos and tests.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::QuoteSummary;
pub use provider::{AlphaVantageProvider, FixtureProvider, QuoteProvider};
