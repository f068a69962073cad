//! Display-ready view models for portfolio screens.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One lot row as the holdings screen renders it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LotView {
    pub shares: Decimal,
    pub date: NaiveDate,
    /// Formatted dollars, e.g. `"$7,000.00"`.
    pub cost_basis: String,
    pub current_value: String,
    /// Formatted percentage, e.g. `"+10%"`, `"0%"`.
    pub return_pct: String,
    /// Tailwind text color class, matching the web frontend's convention.
    pub return_color: String,
}

/// One holding row with its expanded lot detail.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
    pub symbol: String,
    pub name: String,
    pub total_shares: Decimal,
    pub total_value: String,
    pub total_return: String,
    pub total_return_color: String,
    pub lots: Vec<LotView>,
}

/// The portfolio banner: overall value plus per-holding rows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Rounded to 2 decimal places.
    pub total_value: Decimal,
    pub holdings: Vec<HoldingView>,
}
