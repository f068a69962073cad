//! Pure valuation functions over ledger snapshots.
//!
//! Nothing here mutates the ledger; callers pass the snapshot they already
//! hold. Currency is rounded to 2 places only at this display boundary.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::ledger::{Holding, Lot};
use crate::portfolio::valuation_model::{HoldingView, LotView, PortfolioSummary};
use crate::utils::format_usd;

/// Total portfolio value across all holdings.
///
/// Per holding: the sum of its lots' current values when lots exist,
/// otherwise `total_shares * reference_price`.
pub fn total_portfolio_value(holdings: &[Holding]) -> Decimal {
    holdings
        .iter()
        .map(Holding::market_value)
        .sum::<Decimal>()
        .round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// Maps a holding to its display row, lots expanded.
pub fn project_holding(holding: &Holding) -> HoldingView {
    let lots: Vec<LotView> = holding.lots.iter().map(project_lot).collect();
    let total_value = holding.market_value();
    let total_cost: Decimal = holding.lots.iter().map(Lot::cost_basis).sum();
    let (total_return, total_return_color) = if holding.lots.is_empty() {
        // Seeded holdings carry no cost basis to measure against.
        ("0%".to_string(), NEUTRAL_COLOR.to_string())
    } else {
        format_return(total_cost, total_value)
    };

    HoldingView {
        symbol: holding.symbol.clone(),
        name: holding.name.clone(),
        total_shares: holding.total_shares,
        total_value: format_usd(total_value),
        total_return,
        total_return_color,
        lots,
    }
}

/// Overall value plus per-holding rows, as the feed and profile banners
/// consume it.
pub fn portfolio_summary(holdings: &[Holding]) -> PortfolioSummary {
    PortfolioSummary {
        total_value: total_portfolio_value(holdings),
        holdings: holdings.iter().map(project_holding).collect(),
    }
}

fn project_lot(lot: &Lot) -> LotView {
    let (return_pct, return_color) = format_return(lot.cost_basis(), lot.current_value());
    LotView {
        shares: lot.shares,
        date: lot.date,
        cost_basis: format_usd(lot.cost_basis()),
        current_value: format_usd(lot.current_value()),
        return_pct,
        return_color,
    }
}

const GAIN_COLOR: &str = "text-green-500";
const NEUTRAL_COLOR: &str = "text-gray-500";
const LOSS_COLOR: &str = "text-red-500";

/// Percentage return of `current` over `cost`, with its display color.
fn format_return(cost: Decimal, current: Decimal) -> (String, String) {
    if cost <= Decimal::ZERO {
        return ("0%".to_string(), NEUTRAL_COLOR.to_string());
    }
    let pct = ((current - cost) / cost * Decimal::ONE_HUNDRED)
        .round_dp(DISPLAY_DECIMAL_PRECISION)
        .normalize();
    if pct.is_zero() {
        ("0%".to_string(), NEUTRAL_COLOR.to_string())
    } else if pct.is_sign_positive() {
        (format!("+{}%", pct), GAIN_COLOR.to_string())
    } else {
        (format!("{}%", pct), LOSS_COLOR.to_string())
    }
}
