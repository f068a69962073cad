//! Deterministic quote provider for demos and tests.
//!
//! Serves the same canned dataset the original demo fell back to when the
//! live API was unreachable or throttled: a handful of well-known tickers
//! with fixed prices, and a generic $100 entry for anything else.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::errors::MarketDataError;
use crate::models::QuoteSummary;
use crate::provider::QuoteProvider;

const PROVIDER_ID: &str = "FIXTURE";

/// Quote provider backed by an in-memory table of canned quotes.
pub struct FixtureProvider {
    quotes: HashMap<String, QuoteSummary>,
}

impl FixtureProvider {
    /// Provider pre-loaded with the demo dataset (AAPL, CRM, SNOW).
    pub fn new() -> Self {
        let mut provider = Self {
            quotes: HashMap::new(),
        };
        provider.insert(demo_quote(
            "AAPL",
            "Apple Inc.",
            dec!(189.50),
            dec!(2.35),
            dec!(1.26),
            "Technology company that designs and manufactures consumer electronics, software, and online services.",
            "2.95T",
            Some(dec!(29.8)),
            dec!(191.20),
            dec!(186.80),
            "45.2M",
        ));
        provider.insert(demo_quote(
            "CRM",
            "Salesforce Inc.",
            dec!(245.80),
            dec!(-3.20),
            dec!(-1.29),
            "Cloud-based software company providing customer relationship management services.",
            "241.2B",
            Some(dec!(45.2)),
            dec!(249.10),
            dec!(243.50),
            "2.8M",
        ));
        provider.insert(demo_quote(
            "SNOW",
            "Snowflake Inc.",
            dec!(156.40),
            dec!(8.90),
            dec!(6.03),
            "Cloud computing company providing data warehouse-as-a-service.",
            "52.1B",
            None,
            dec!(158.90),
            dec!(147.50),
            "4.1M",
        ));
        provider
    }

    /// Empty provider; combine with `with_quote` for targeted test setups.
    pub fn empty() -> Self {
        Self {
            quotes: HashMap::new(),
        }
    }

    /// Adds or replaces a canned quote.
    pub fn with_quote(mut self, summary: QuoteSummary) -> Self {
        self.insert(summary);
        self
    }

    fn insert(&mut self, summary: QuoteSummary) {
        self.quotes.insert(summary.symbol.clone(), summary);
    }
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_quote(
    symbol: &str,
    name: &str,
    price: Decimal,
    change: Decimal,
    change_percent: Decimal,
    description: &str,
    market_cap: &str,
    pe_ratio: Option<Decimal>,
    high: Decimal,
    low: Decimal,
    volume: &str,
) -> QuoteSummary {
    QuoteSummary {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        change_percent,
        description: description.to_string(),
        market_cap: market_cap.to_string(),
        pe_ratio,
        high,
        low,
        volume: volume.to_string(),
    }
}

#[async_trait]
impl QuoteProvider for FixtureProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<QuoteSummary, MarketDataError> {
        if let Some(summary) = self.quotes.get(symbol) {
            return Ok(summary.clone());
        }
        // Unknown symbols still quote at a flat $100, matching the demo's
        // generic fallback entry.
        let mut summary = QuoteSummary::with_price(symbol, &format!("{} Inc.", symbol), dec!(100.00));
        summary.description = "Stock information not available".to_string();
        Ok(summary)
    }
}
