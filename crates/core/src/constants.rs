use rust_decimal::Decimal;

/// Decimal precision for share quantities.
///
/// Shares are rounded to 4 places at lot creation so repeated partial-dollar
/// purchases do not compound rounding error.
pub const SHARE_DECIMAL_PRECISION: u32 = 4;

/// Decimal precision for currency display.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Execution price substituted when no live quote is available.
///
/// Fixed at $1/share so the dollar amount and the share count are numerically
/// equal when the quote lookup fails.
pub const DEFAULT_EXECUTION_PRICE: Decimal = Decimal::ONE;

/// Display name used when no stock name can be resolved for a symbol.
pub const FALLBACK_STOCK_NAME: &str = "TBD";
