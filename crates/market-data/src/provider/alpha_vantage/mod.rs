//! Alpha Vantage quote provider.
//!
//! Fetches the current quote via the GLOBAL_QUOTE endpoint and descriptive
//! metadata via the OVERVIEW endpoint. Responses are cached in memory for
//! five minutes because the free tier allows only 5 API calls per minute.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::errors::MarketDataError;
use crate::models::{format_market_cap, format_volume, QuoteSummary};
use crate::provider::QuoteProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";
const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Alpha Vantage quote provider with a per-symbol response cache.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    cache: RwLock<HashMap<String, CachedQuote>>,
}

struct CachedQuote {
    summary: QuoteSummary,
    fetched_at: Instant,
}

// ============================================================================
// Response structures for the Alpha Vantage API
// ============================================================================

#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    symbol: Option<String>,
    #[serde(rename = "03. high")]
    high: Option<String>,
    #[serde(rename = "04. low")]
    low: Option<String>,
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "06. volume")]
    volume: Option<String>,
    #[serde(rename = "09. change")]
    change: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OverviewResponse {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "MarketCapitalization")]
    market_cap: Option<String>,
    #[serde(rename = "PERatio")]
    pe_ratio: Option<String>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
}

impl AlphaVantageProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key: api_key.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    async fn cached_quote(&self, symbol: &str) -> Option<QuoteSummary> {
        let cache = self.cache.read().await;
        cache
            .get(symbol)
            .filter(|entry| entry.fetched_at.elapsed() < CACHE_TTL)
            .map(|entry| entry.summary.clone())
    }

    async fn fetch_json(&self, function: &str, symbol: &str) -> Result<String, MarketDataError> {
        let url = format!(
            "{}?function={}&symbol={}&apikey={}",
            BASE_URL, function, symbol, self.api_key
        );
        let response = self.client.get(&url).send().await?;
        Ok(response.text().await?)
    }
}

/// Decodes a GLOBAL_QUOTE body, surfacing throttling and provider errors.
fn decode_global_quote(body: &str) -> Result<GlobalQuote, MarketDataError> {
    let response: GlobalQuoteResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::Parse(e.to_string()))?;

    if let Some(message) = response.error_message {
        return Err(MarketDataError::Provider(message));
    }
    if let Some(note) = response.note.or(response.information) {
        return Err(MarketDataError::RateLimited(note));
    }
    response
        .global_quote
        .ok_or_else(|| MarketDataError::Parse("missing 'Global Quote' object".to_string()))
}

/// Decodes an OVERVIEW body. Overview errors are not fatal to a quote; the
/// caller substitutes empty metadata.
fn decode_overview(body: &str) -> Result<OverviewResponse, MarketDataError> {
    let response: OverviewResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::Parse(e.to_string()))?;

    if let Some(message) = response.error_message {
        return Err(MarketDataError::Provider(message));
    }
    if let Some(note) = response.note {
        return Err(MarketDataError::RateLimited(note));
    }
    Ok(response)
}

fn parse_decimal(field: Option<&str>) -> Option<Decimal> {
    field.and_then(|s| Decimal::from_str(s.trim()).ok())
}

/// Combines the two endpoint responses into a `QuoteSummary`.
fn build_summary(
    symbol: &str,
    quote: &GlobalQuote,
    overview: Option<&OverviewResponse>,
) -> Result<QuoteSummary, MarketDataError> {
    let price = parse_decimal(quote.price.as_deref())
        .filter(|p| p.is_sign_positive() && !p.is_zero())
        .ok_or_else(|| MarketDataError::NoData(symbol.to_string()))?;

    let name = overview
        .and_then(|o| o.name.clone())
        .unwrap_or_else(|| format!("{} Inc.", symbol));
    let description = overview
        .and_then(|o| o.description.clone())
        .unwrap_or_else(|| format!("{} stock information", symbol));
    let market_cap = overview
        .and_then(|o| o.market_cap.as_deref())
        .map(format_market_cap)
        .unwrap_or_else(|| "N/A".to_string());
    let pe_ratio = overview.and_then(|o| parse_decimal(o.pe_ratio.as_deref()));

    let change_percent = quote
        .change_percent
        .as_deref()
        .map(|s| s.trim_end_matches('%'))
        .and_then(|s| Decimal::from_str(s.trim()).ok())
        .unwrap_or(Decimal::ZERO);

    Ok(QuoteSummary {
        symbol: quote
            .symbol
            .clone()
            .unwrap_or_else(|| symbol.to_string()),
        name,
        price,
        change: parse_decimal(quote.change.as_deref()).unwrap_or(Decimal::ZERO),
        change_percent,
        description,
        market_cap,
        pe_ratio,
        high: parse_decimal(quote.high.as_deref()).unwrap_or(price),
        low: parse_decimal(quote.low.as_deref()).unwrap_or(price),
        volume: quote
            .volume
            .as_deref()
            .map(format_volume)
            .unwrap_or_else(|| "N/A".to_string()),
    })
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<QuoteSummary, MarketDataError> {
        if let Some(summary) = self.cached_quote(symbol).await {
            debug!("Serving cached quote for {}", symbol);
            return Ok(summary);
        }

        let quote_body = self.fetch_json("GLOBAL_QUOTE", symbol).await?;
        let quote = decode_global_quote(&quote_body)?;

        // Metadata is best-effort: a throttled or missing overview still
        // yields a usable quote.
        let overview = match self.fetch_json("OVERVIEW", symbol).await {
            Ok(body) => match decode_overview(&body) {
                Ok(overview) => Some(overview),
                Err(e) => {
                    warn!("Overview lookup for {} failed: {}", symbol, e);
                    None
                }
            },
            Err(e) => {
                warn!("Overview request for {} failed: {}", symbol, e);
                None
            }
        };

        let summary = build_summary(symbol, &quote, overview.as_ref())?;

        let mut cache = self.cache.write().await;
        cache.insert(
            symbol.to_string(),
            CachedQuote {
                summary: summary.clone(),
                fetched_at: Instant::now(),
            },
        );

        Ok(summary)
    }
}
