//! The money-transfer-to-investment workflow.
//!
//! Drives one transfer from composition through recipient confirmation to a
//! committed lot + transaction pair. The state transition (not a lock) guards
//! against re-entrant accepts: taking the pending transfer out of the state
//! before committing makes a second accept a no-op.

use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use peerfolio_market_data::{QuoteProvider, QuoteSummary};

use crate::constants::{DEFAULT_EXECUTION_PRICE, FALLBACK_STOCK_NAME};
use crate::errors::{Result, ValidationError};
use crate::ledger::{LedgerStoreTrait, Lot, Transaction, TransactionKind};
use crate::transfers::transfer_model::{
    CounterpartyKind, PendingTransfer, StockSelection, TransferDraft, TransferReceipt,
    TransferState,
};

/// One transfer's workflow instance. Create a fresh one per transfer.
pub struct TransferWorkflow {
    ledger: Arc<dyn LedgerStoreTrait>,
    quotes: Arc<dyn QuoteProvider>,
    state: TransferState,
}

impl TransferWorkflow {
    pub fn new(ledger: Arc<dyn LedgerStoreTrait>, quotes: Arc<dyn QuoteProvider>) -> Self {
        Self {
            ledger,
            quotes,
            state: TransferState::Composing,
        }
    }

    pub fn state(&self) -> &TransferState {
        &self.state
    }

    /// Validates a draft and moves the workflow to `PendingConfirmation`.
    ///
    /// On validation failure the workflow stays in `Composing` so the user
    /// can edit the draft and retry.
    pub fn propose(&mut self, draft: TransferDraft) -> Result<&PendingTransfer> {
        if self.state != TransferState::Composing {
            return Err(ValidationError::InvalidInput(
                "Transfer has already been proposed".to_string(),
            )
            .into());
        }

        require_field("amount", &draft.amount)?;
        require_field("symbol", &draft.symbol)?;
        require_field("recipient", &draft.recipient.name)?;
        require_field("brokerageAccount", &draft.brokerage_account)?;
        require_field("fundingAccount", &draft.funding_account)?;

        let amount = Decimal::from_str(draft.amount.trim())
            .map_err(|_| ValidationError::InvalidAmount(draft.amount.clone()))?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(amount).into());
        }

        let pending = PendingTransfer {
            sender: draft.sender,
            recipient: draft.recipient,
            amount,
            original_symbol: draft.symbol.trim().to_uppercase(),
            original_name: draft.stock_name,
            quoted_price: draft.quoted_price,
            brokerage_account: draft.brokerage_account,
        };
        self.state = TransferState::PendingConfirmation(pending);

        match &self.state {
            TransferState::PendingConfirmation(pending) => Ok(pending),
            _ => unreachable!("state was just set"),
        }
    }

    /// The recipient turned the transfer down, or the confirmation dialog was
    /// closed. Complete no-op on the ledger; the pending transfer is dropped.
    pub fn decline(&mut self) {
        match self.state {
            TransferState::Composing | TransferState::PendingConfirmation(_) => {
                debug!("Transfer declined before commit; ledger untouched");
                self.state = TransferState::Cancelled;
            }
            _ => {
                warn!("Decline ignored: transfer already committing or finished");
            }
        }
    }

    /// The recipient accepted, optionally redirecting the money into a
    /// different instrument.
    ///
    /// Returns `Ok(Some(receipt))` for the accept that commits, and
    /// `Ok(None)` for duplicate or out-of-order accepts (a double-click must
    /// apply exactly one lot and one transaction). Once committing starts it
    /// runs to completion.
    pub async fn accept(
        &mut self,
        selection: Option<StockSelection>,
    ) -> Result<Option<TransferReceipt>> {
        let pending = match std::mem::replace(&mut self.state, TransferState::Committing) {
            TransferState::PendingConfirmation(pending) => pending,
            other => {
                debug!("Accept ignored: transfer is not awaiting confirmation");
                self.state = other;
                return Ok(None);
            }
        };

        let symbol = resolve_symbol(&selection, &pending);
        let quote = match self.quotes.get_quote(&symbol).await {
            Ok(quote) => Some(quote),
            Err(e) => {
                // Quote failure is "no data", not an error: fall back to the
                // default execution price below.
                debug!("Quote lookup for {} failed ({}); applying fallback", symbol, e);
                None
            }
        };
        let name = resolve_name(&selection, &pending, &symbol, quote.as_ref());
        let execution_price = resolve_execution_price(&pending, &symbol, quote.as_ref());

        let today = Utc::now().date_naive();
        let lot = Lot::new(pending.amount, execution_price, today)?;
        let shares = lot.shares;

        self.ledger.upsert_lot(&symbol, &name, lot)?;

        let kind = match pending.recipient.kind {
            CounterpartyKind::Personal => TransactionKind::Received,
            CounterpartyKind::Friend => TransactionKind::Sent,
        };
        let txn = Transaction::new(
            kind,
            pending.amount,
            symbol.clone(),
            name.clone(),
            pending.sender.clone(),
            pending.recipient.name.clone(),
            pending.brokerage_account.clone(),
            shares,
            Utc::now(),
        );
        let transaction_id = txn.id.clone();
        self.ledger.record_transaction(txn)?;

        let receipt = TransferReceipt {
            transaction_id,
            symbol,
            stock_name: name,
            amount: pending.amount,
            execution_price,
            shares,
            date: today,
        };
        self.state = TransferState::Completed(receipt.clone());
        Ok(Some(receipt))
    }
}

fn require_field(name: &str, value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(name.to_string()));
    }
    Ok(())
}

/// Final symbol: the recipient's override wins over the proposer's choice.
/// A blank override falls back to the original symbol.
fn resolve_symbol(selection: &Option<StockSelection>, pending: &PendingTransfer) -> String {
    selection
        .as_ref()
        .map(|s| s.symbol.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .unwrap_or_else(|| pending.original_symbol.clone())
}

/// Final display name, in priority order: the override's name, the proposer's
/// hint (only while the symbol is unchanged), the live quote's name, then the
/// "TBD" placeholder.
fn resolve_name(
    selection: &Option<StockSelection>,
    pending: &PendingTransfer,
    symbol: &str,
    quote: Option<&QuoteSummary>,
) -> String {
    if let Some(name) = selection.as_ref().and_then(|s| s.name.clone()) {
        return name;
    }
    if symbol == pending.original_symbol {
        if let Some(name) = pending.original_name.clone() {
            return name;
        }
    }
    if let Some(quote) = quote {
        return quote.name.clone();
    }
    FALLBACK_STOCK_NAME.to_string()
}

/// Execution price, in priority order: a live quote for the final symbol, the
/// compose-time quote (only while the symbol is unchanged), then the $1 demo
/// default.
fn resolve_execution_price(
    pending: &PendingTransfer,
    symbol: &str,
    quote: Option<&QuoteSummary>,
) -> Decimal {
    if let Some(quote) = quote {
        if quote.price > Decimal::ZERO {
            return quote.price;
        }
    }
    if symbol == pending.original_symbol {
        if let Some(price) = pending.quoted_price.filter(|p| *p > Decimal::ZERO) {
            return price;
        }
    }
    DEFAULT_EXECUTION_PRICE
}
