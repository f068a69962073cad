//! Quote provider implementations.

mod alpha_vantage;
mod fixture;
mod traits;

pub use alpha_vantage::AlphaVantageProvider;
pub use fixture::FixtureProvider;
pub use traits::QuoteProvider;
