//! In-memory ledger store.
//!
//! Single source of truth for holdings and transactions during a session.
//! All mutation goes through the store; readers get snapshots and must
//! tolerate the data changing between reads. There is one logical writer
//! (the transfer workflow's committing transition), so the lock exists for
//! atomicity of `upsert_lot`, not for contention.

use log::debug;
use rust_decimal::Decimal;
use std::sync::{PoisonError, RwLock};

use crate::constants::SHARE_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};
use crate::ledger::ledger_model::{Holding, Lot, Transaction};

/// Contract for the session ledger.
pub trait LedgerStoreTrait: Send + Sync {
    /// Snapshot of current holdings, in insertion order.
    fn holdings(&self) -> Vec<Holding>;

    /// Snapshot of transactions, most recent first.
    fn transactions(&self) -> Vec<Transaction>;

    /// Appends a lot to the holding for `symbol`, creating the holding on
    /// first sight of the symbol. `total_shares` is re-rounded to 4 places
    /// after the append.
    fn upsert_lot(&self, symbol: &str, name: &str, lot: Lot) -> Result<()>;

    /// Prepends a transaction. Rejects non-positive amounts and empty
    /// symbols, leaving the list unchanged.
    fn record_transaction(&self, txn: Transaction) -> Result<()>;
}

#[derive(Default)]
struct LedgerState {
    holdings: Vec<Holding>,
    transactions: Vec<Transaction>,
}

/// In-memory ledger. Created once per session, dropped on logout.
#[derive(Default)]
pub struct LedgerStore {
    state: RwLock<LedgerState>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a lot-less holding valued at `reference_price`. Demo setup only;
    /// accepted transfers always come with a lot.
    pub fn seed_holding(
        &self,
        symbol: &str,
        name: &str,
        total_shares: Decimal,
        reference_price: Decimal,
    ) -> Result<()> {
        let symbol = normalize_symbol(symbol)?;
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.holdings.iter().any(|h| h.symbol == symbol) {
            return Err(ValidationError::InvalidInput(format!(
                "Holding '{}' is already seeded",
                symbol
            ))
            .into());
        }
        state.holdings.push(Holding {
            symbol,
            name: name.to_string(),
            total_shares,
            reference_price,
            lots: Vec::new(),
        });
        Ok(())
    }
}

fn normalize_symbol(symbol: &str) -> std::result::Result<String, ValidationError> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptySymbol);
    }
    Ok(trimmed.to_uppercase())
}

impl LedgerStoreTrait for LedgerStore {
    fn holdings(&self) -> Vec<Holding> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.holdings.clone()
    }

    fn transactions(&self) -> Vec<Transaction> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.transactions.clone()
    }

    fn upsert_lot(&self, symbol: &str, name: &str, lot: Lot) -> Result<()> {
        let symbol = normalize_symbol(symbol)?;

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        match state.holdings.iter_mut().find(|h| h.symbol == symbol) {
            Some(holding) => {
                holding.total_shares =
                    (holding.total_shares + lot.shares).round_dp(SHARE_DECIMAL_PRECISION);
                holding.lots.push(lot);
                debug!(
                    "Appended lot to {}: {} lots, {} total shares",
                    holding.symbol,
                    holding.lots.len(),
                    holding.total_shares
                );
            }
            None => {
                debug!("Creating holding {} from first lot", symbol);
                state.holdings.push(Holding {
                    symbol,
                    name: name.to_string(),
                    total_shares: lot.shares,
                    // Last price this instrument was seen at.
                    reference_price: lot.execution_price,
                    lots: vec![lot],
                });
            }
        }
        Ok(())
    }

    fn record_transaction(&self, txn: Transaction) -> Result<()> {
        if txn.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(txn.amount).into());
        }
        if txn.symbol.trim().is_empty() {
            return Err(ValidationError::EmptySymbol.into());
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.transactions.insert(0, txn);
        Ok(())
    }
}
