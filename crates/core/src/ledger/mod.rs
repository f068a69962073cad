//! Ledger module - the session's system of record.

mod ledger_model;
mod ledger_store;

#[cfg(test)]
mod ledger_store_tests;

pub use ledger_model::{Holding, Lot, Transaction, TransactionKind};
pub use ledger_store::{LedgerStore, LedgerStoreTrait};
