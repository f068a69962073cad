//! Error types for market data operations.

use thiserror::Error;

/// Errors returned by quote providers.
///
/// The domain core treats every variant the same way: "no usable price",
/// recovered by its default-price policy. The variants exist so providers can
/// log and callers can distinguish throttling from genuinely unknown symbols.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The HTTP request itself failed (network, TLS, timeout).
    #[error("Network request failed: {0}")]
    Network(String),

    /// The provider answered with an explicit error message.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider is throttling us (Alpha Vantage free tier: 5 calls/min).
    #[error("Rate limited by provider: {0}")]
    RateLimited(String),

    /// The response parsed, but contained no quote for the symbol.
    #[error("No quote data available for symbol '{0}'")]
    NoData(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for MarketDataError {
    fn from(err: reqwest::Error) -> Self {
        MarketDataError::Network(err.to_string())
    }
}
