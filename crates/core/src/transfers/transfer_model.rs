//! Transfer workflow models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the money lands in the user's own account or a friend's.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CounterpartyKind {
    /// The session user's personal account; an accepted transfer shows as
    /// `received`.
    Personal,
    /// A friend's account; an accepted transfer shows as `sent`.
    Friend,
}

/// The recipient of a transfer, as classified by the identity layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Counterparty {
    pub name: String,
    pub kind: CounterpartyKind,
}

impl Counterparty {
    pub fn personal(name: impl Into<String>) -> Self {
        Counterparty {
            name: name.into(),
            kind: CounterpartyKind::Personal,
        }
    }

    pub fn friend(name: impl Into<String>) -> Self {
        Counterparty {
            name: name.into(),
            kind: CounterpartyKind::Friend,
        }
    }
}

/// Everything the composing screen collects. Amount arrives as the raw user
/// text and is parsed at proposal time.
#[derive(Debug, Clone)]
pub struct TransferDraft {
    pub sender: String,
    pub recipient: Counterparty,
    pub amount: String,
    pub symbol: String,
    /// Display name for the symbol, if the composer resolved one.
    pub stock_name: Option<String>,
    /// Live price captured while composing, if the quote lookup succeeded.
    pub quoted_price: Option<Decimal>,
    pub brokerage_account: String,
    pub funding_account: String,
}

/// A validated transfer awaiting the recipient's decision.
///
/// Ephemeral: discarded on decline, consumed by the commit.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTransfer {
    pub sender: String,
    pub recipient: Counterparty,
    pub amount: Decimal,
    pub original_symbol: String,
    pub original_name: Option<String>,
    pub quoted_price: Option<Decimal>,
    pub brokerage_account: String,
}

/// The instrument the recipient picked at the confirmation step, when they
/// chose to redirect the money away from the proposed stock.
#[derive(Debug, Clone, PartialEq)]
pub struct StockSelection {
    pub symbol: String,
    pub name: Option<String>,
}

impl StockSelection {
    pub fn new(symbol: impl Into<String>) -> Self {
        StockSelection {
            symbol: symbol.into(),
            name: None,
        }
    }

    pub fn named(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        StockSelection {
            symbol: symbol.into(),
            name: Some(name.into()),
        }
    }
}

/// Summary of a committed transfer, returned from a successful accept.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferReceipt {
    pub transaction_id: String,
    pub symbol: String,
    pub stock_name: String,
    pub amount: Decimal,
    pub execution_price: Decimal,
    pub shares: Decimal,
    pub date: NaiveDate,
}

/// Workflow lifecycle.
///
/// `Cancelled` and `Completed` are terminal; a new transfer starts a fresh
/// workflow in `Composing`.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferState {
    Composing,
    PendingConfirmation(PendingTransfer),
    Committing,
    Completed(TransferReceipt),
    Cancelled,
}

impl TransferState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferState::Completed(_) | TransferState::Cancelled)
    }
}
