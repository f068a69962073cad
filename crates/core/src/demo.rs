//! Demo dataset: the hardcoded world the demo app runs in.
//!
//! A personal account, two friends, a small searchable stock directory, and
//! a seeded ledger so the feed and portfolio screens have something to show
//! before the first transfer.

use chrono::TimeZone;
use chrono::Utc;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::ledger::{LedgerStore, LedgerStoreTrait, Transaction, TransactionKind};
use crate::transfers::Counterparty;

/// The session user's display name.
pub const DEMO_SENDER: &str = "Tommy O.";

/// The searchable ticker directory, `(symbol, name)` pairs.
pub const STOCK_DIRECTORY: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc"),
    ("GOOGL", "Alphabet Inc"),
    ("MSFT", "Microsoft Corp"),
    ("AMZN", "Amazon.com Inc"),
    ("TSLA", "Tesla Inc"),
    ("META", "Meta Platforms Inc"),
    ("NVDA", "NVIDIA Corporation"),
    ("NFLX", "Netflix Inc"),
    ("CRM", "Salesforce Inc"),
    ("ORCL", "Oracle Corporation"),
    ("ADBE", "Adobe Inc"),
    ("INTC", "Intel Corporation"),
];

/// Resolves a display name from the directory.
pub fn lookup_stock_name(symbol: &str) -> Option<&'static str> {
    let symbol = symbol.trim().to_uppercase();
    STOCK_DIRECTORY
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, name)| *name)
}

/// The user's own account as a transfer recipient.
pub fn personal_account() -> Counterparty {
    Counterparty::personal("Your Personal Account")
}

/// The demo friends list.
pub fn demo_friends() -> Vec<Counterparty> {
    vec![
        Counterparty::friend("Sarah M."),
        Counterparty::friend("Mike R."),
    ]
}

/// Brokerage account labels selectable for a recipient.
pub fn brokerage_accounts(recipient: &Counterparty) -> Vec<&'static str> {
    match recipient.name.as_str() {
        "Sarah M." => vec!["Personal Brokerage", "Emma's UTMA"],
        "Mike R." => vec!["Personal Brokerage", "401k Rollover"],
        _ => vec!["Personal Brokerage", "College 529 Plan"],
    }
}

/// A ledger seeded with the demo's starting holdings and feed entries.
pub fn seed_ledger() -> Result<LedgerStore> {
    let store = LedgerStore::new();
    store.seed_holding("AAPL", "Apple Inc.", dec!(2), dec!(180))?;
    store.seed_holding("TSLA", "Tesla Inc.", dec!(1), dec!(260))?;

    // Two historical feed entries; recorded oldest first so the newer one
    // lists first.
    store.record_transaction(Transaction::new(
        TransactionKind::Received,
        dec!(35),
        "TSLA",
        "Tesla Inc",
        "Mike R.",
        DEMO_SENDER,
        "Personal Brokerage",
        dec!(0.083),
        Utc.with_ymd_and_hms(2025, 6, 22, 16, 45, 0).unwrap(),
    ))?;
    store.record_transaction(Transaction::new(
        TransactionKind::Sent,
        dec!(50),
        "AAPL",
        "Apple Inc",
        DEMO_SENDER,
        "Sarah M.",
        "Sarah's Roth IRA",
        dec!(0.271),
        Utc.with_ymd_and_hms(2025, 6, 23, 12, 0, 0).unwrap(),
    ))?;
    Ok(store)
}
