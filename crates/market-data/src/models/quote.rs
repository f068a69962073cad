use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current quote plus descriptive metadata for one instrument.
///
/// This is the shape the transfer workflow and stock detail views consume:
/// a live price and enough context to render a quote card.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub symbol: String,
    pub name: String,
    /// Last traded price. Providers must only return positive prices.
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub description: String,
    /// Human-formatted market capitalization ("2.95T", "241.2B", "N/A").
    pub market_cap: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<Decimal>,
    pub high: Decimal,
    pub low: Decimal,
    /// Human-formatted trading volume ("45.2M", "N/A").
    pub volume: String,
}

impl QuoteSummary {
    /// Minimal summary for a symbol with a known price and nothing else.
    pub fn with_price(symbol: &str, name: &str, price: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change: Decimal::ZERO,
            change_percent: Decimal::ZERO,
            description: format!("{} stock information", symbol),
            market_cap: "N/A".to_string(),
            pe_ratio: None,
            high: price,
            low: price,
            volume: "N/A".to_string(),
        }
    }
}

/// Formats a raw market capitalization figure into a short display string.
pub fn format_market_cap(raw: &str) -> String {
    if raw.is_empty() || raw == "None" {
        return "N/A".to_string();
    }
    match raw.parse::<f64>() {
        Ok(n) if n >= 1e12 => format!("{:.2}T", n / 1e12),
        Ok(n) if n >= 1e9 => format!("{:.2}B", n / 1e9),
        Ok(n) if n >= 1e6 => format!("{:.2}M", n / 1e6),
        Ok(_) => raw.to_string(),
        Err(_) => "N/A".to_string(),
    }
}

/// Formats a raw share volume into a short display string.
pub fn format_volume(raw: &str) -> String {
    if raw.is_empty() {
        return "N/A".to_string();
    }
    match raw.parse::<f64>() {
        Ok(n) if n >= 1e6 => format!("{:.1}M", n / 1e6),
        Ok(n) if n >= 1e3 => format!("{:.1}K", n / 1e3),
        Ok(_) => raw.to_string(),
        Err(_) => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn with_price_fills_defaults() {
        let quote = QuoteSummary::with_price("AAPL", "Apple Inc.", dec!(189.50));
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, dec!(189.50));
        assert_eq!(quote.high, dec!(189.50));
        assert_eq!(quote.volume, "N/A");
        assert!(quote.pe_ratio.is_none());
    }

    #[test]
    fn market_cap_formatting() {
        assert_eq!(format_market_cap("2950000000000"), "2.95T");
        assert_eq!(format_market_cap("241200000000"), "241.20B");
        assert_eq!(format_market_cap("52100000"), "52.10M");
        assert_eq!(format_market_cap("None"), "N/A");
        assert_eq!(format_market_cap(""), "N/A");
    }

    #[test]
    fn volume_formatting() {
        assert_eq!(format_volume("45200000"), "45.2M");
        assert_eq!(format_volume("2800"), "2.8K");
        assert_eq!(format_volume("999"), "999");
        assert_eq!(format_volume(""), "N/A");
    }
}
