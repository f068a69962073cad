//! Peerfolio Core - domain entities and services for the social-investing demo.
//!
//! This crate owns the session ledger (holdings with cost-basis lots and the
//! transaction feed), the money-transfer confirmation workflow, and the pure
//! portfolio valuation projections. Quote lookup is consumed through the
//! `QuoteProvider` trait from `peerfolio-market-data`.

pub mod constants;
pub mod demo;
pub mod errors;
pub mod ledger;
pub mod portfolio;
pub mod transfers;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
