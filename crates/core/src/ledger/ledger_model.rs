//! Ledger domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::SHARE_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};

/// One discrete acquisition event: the outcome of a single accepted transfer.
///
/// A lot's economics are fixed at creation. In this scope lots do not
/// mark-to-market, so a lot's current value equals `amount_usd`; display
/// strings are derived by the valuation projector, not stored here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: String,
    /// `amount_usd / execution_price`, rounded to 4 decimal places.
    pub shares: Decimal,
    /// Calendar date of acquisition.
    pub date: NaiveDate,
    /// Exact dollars committed to this lot.
    pub amount_usd: Decimal,
    /// Price used to convert dollars to shares. Always positive; a missing
    /// quote is replaced by the default price before a lot is built.
    pub execution_price: Decimal,
}

impl Lot {
    /// Builds a lot from committed dollars and an execution price.
    pub fn new(amount_usd: Decimal, execution_price: Decimal, date: NaiveDate) -> Result<Self> {
        if amount_usd <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(amount_usd).into());
        }
        if execution_price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice(execution_price).into());
        }
        Ok(Lot {
            id: Uuid::new_v4().to_string(),
            shares: (amount_usd / execution_price).round_dp(SHARE_DECIMAL_PRECISION),
            date,
            amount_usd,
            execution_price,
        })
    }

    /// The lot's value today. No mark-to-market in this scope, so it equals
    /// the dollars originally committed.
    pub fn current_value(&self) -> Decimal {
        self.amount_usd
    }

    /// The lot's cost basis: the dollars originally committed.
    pub fn cost_basis(&self) -> Decimal {
        self.amount_usd
    }
}

/// Aggregate position in one instrument, composed of zero or more lots.
///
/// Invariant: whenever `lots` is non-empty, `total_shares` equals the sum of
/// the lots' shares rounded to 4 decimal places. Lot-less holdings exist only
/// for seeded demo positions, which are valued at `total_shares *
/// reference_price`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Uppercase ticker; unique key within the holdings collection.
    pub symbol: String,
    pub name: String,
    pub total_shares: Decimal,
    /// Last-known display price. Informational only once lots exist.
    pub reference_price: Decimal,
    /// Insertion order is acquisition order.
    pub lots: Vec<Lot>,
}

impl Holding {
    /// Current market value: the sum of lot values, or the reference-price
    /// fallback for lot-less holdings. Unrounded; display code rounds.
    pub fn market_value(&self) -> Decimal {
        if self.lots.is_empty() {
            self.total_shares * self.reference_price
        } else {
            self.lots.iter().map(Lot::current_value).sum()
        }
    }
}

/// Direction of a transfer relative to the session user.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    /// Money went to a friend's account.
    Sent,
    /// Money landed in the user's personal account.
    Received,
}

/// Immutable record of one money movement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub symbol: String,
    pub stock_name: String,
    pub sender: String,
    pub recipient: String,
    pub brokerage_account: String,
    pub shares: Decimal,
    pub date: DateTime<Utc>,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: TransactionKind,
        amount: Decimal,
        symbol: impl Into<String>,
        stock_name: impl Into<String>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        brokerage_account: impl Into<String>,
        shares: Decimal,
        date: DateTime<Utc>,
    ) -> Self {
        Transaction {
            id: Uuid::new_v4().to_string(),
            kind,
            amount,
            symbol: symbol.into(),
            stock_name: stock_name.into(),
            sender: sender.into(),
            recipient: recipient.into(),
            brokerage_account: brokerage_account.into(),
            shares,
            date,
        }
    }
}
