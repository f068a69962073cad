//! Portfolio module - read-only valuation projections over ledger snapshots.

mod valuation_model;
mod valuation_service;


pub use valuation_model::{HoldingView, LotView, PortfolioSummary};
pub use valuation_service::{portfolio_summary, project_holding, total_portfolio_value};
