//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::QuoteSummary;

/// Trait for quote sources.
///
/// Implement this to add a new quote backend. The contract the domain core
/// relies on: `get_quote` either returns a summary with a positive price or
/// fails with a `MarketDataError`. Callers apply their own fallback policy on
/// failure; providers must not invent prices.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider ("ALPHA_VANTAGE", "FIXTURE", ...).
    /// Used for logging.
    fn id(&self) -> &'static str;

    /// Fetch the current quote and descriptive metadata for a symbol.
    async fn get_quote(&self, symbol: &str) -> Result<QuoteSummary, MarketDataError>;
}
