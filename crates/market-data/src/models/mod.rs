//! Market data models.

mod quote;

pub use quote::{format_market_cap, format_volume, QuoteSummary};
