use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::constants::SHARE_DECIMAL_PRECISION;
use crate::errors::{Error, ValidationError};
use crate::ledger::{LedgerStore, LedgerStoreTrait, Lot, Transaction, TransactionKind};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 23).unwrap()
}

fn txn(amount: rust_decimal::Decimal, symbol: &str) -> Transaction {
    Transaction::new(
        TransactionKind::Received,
        amount,
        symbol,
        "Apple Inc.",
        "Mike R.",
        "Tommy O.",
        "Personal Brokerage",
        dec!(0.5),
        Utc.with_ymd_and_hms(2025, 6, 23, 12, 0, 0).unwrap(),
    )
}

#[test]
fn upsert_creates_holding_on_first_sight() {
    let store = LedgerStore::new();
    let lot = Lot::new(dec!(50), dec!(25), date()).unwrap();
    store.upsert_lot("aapl", "Apple Inc.", lot).unwrap();

    let holdings = store.holdings();
    assert_eq!(holdings.len(), 1);
    assert_eq!(holdings[0].symbol, "AAPL");
    assert_eq!(holdings[0].name, "Apple Inc.");
    assert_eq!(holdings[0].total_shares, dec!(2));
    assert_eq!(holdings[0].reference_price, dec!(25));
    assert_eq!(holdings[0].lots.len(), 1);
}

#[test]
fn total_shares_matches_rounded_lot_sum_after_any_sequence() {
    let store = LedgerStore::new();
    // Awkward prices so individual share counts carry all four places.
    let purchases = [
        (dec!(50), dec!(189.50)),
        (dec!(35), dec!(260.10)),
        (dec!(12.34), dec!(99.99)),
        (dec!(200), dec!(3.33)),
        (dec!(1), dec!(7)),
    ];
    for (amount, price) in purchases {
        let lot = Lot::new(amount, price, date()).unwrap();
        store.upsert_lot("NVDA", "NVIDIA Corporation", lot).unwrap();
    }

    let holding = &store.holdings()[0];
    assert_eq!(holding.lots.len(), purchases.len());
    let lot_sum: rust_decimal::Decimal = holding.lots.iter().map(|l| l.shares).sum();
    assert_eq!(
        holding.total_shares,
        lot_sum.round_dp(SHARE_DECIMAL_PRECISION)
    );
}

#[test]
fn upsert_appends_in_acquisition_order() {
    let store = LedgerStore::new();
    let first = Lot::new(dec!(100), dec!(100), date()).unwrap();
    let second = Lot::new(dec!(200), dec!(100), date()).unwrap();
    let first_id = first.id.clone();
    let second_id = second.id.clone();

    store.upsert_lot("AAPL", "Apple Inc.", first).unwrap();
    store.upsert_lot("AAPL", "Apple Inc.", second).unwrap();

    let holding = &store.holdings()[0];
    assert_eq!(holding.lots[0].id, first_id);
    assert_eq!(holding.lots[1].id, second_id);
    assert_eq!(holding.total_shares, dec!(3));
}

#[test]
fn upsert_rejects_empty_symbol() {
    let store = LedgerStore::new();
    let lot = Lot::new(dec!(50), dec!(25), date()).unwrap();
    let err = store.upsert_lot("   ", "Nameless", lot).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::EmptySymbol)
    ));
    assert!(store.holdings().is_empty());
}

#[test]
fn transactions_are_most_recent_first() {
    let store = LedgerStore::new();
    let t1 = txn(dec!(50), "AAPL");
    let t2 = txn(dec!(35), "TSLA");
    let t1_id = t1.id.clone();
    let t2_id = t2.id.clone();

    store.record_transaction(t1).unwrap();
    store.record_transaction(t2).unwrap();

    let listed = store.transactions();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, t2_id);
    assert_eq!(listed[1].id, t1_id);
}

#[test]
fn zero_amount_transaction_is_rejected_and_list_unchanged() {
    let store = LedgerStore::new();
    store.record_transaction(txn(dec!(50), "AAPL")).unwrap();

    let err = store.record_transaction(txn(dec!(0), "AAPL")).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::NonPositiveAmount(_))
    ));
    assert_eq!(store.transactions().len(), 1);

    let err = store.record_transaction(txn(dec!(-5), "AAPL")).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::NonPositiveAmount(_))
    ));
    assert_eq!(store.transactions().len(), 1);
}

#[test]
fn empty_symbol_transaction_is_rejected() {
    let store = LedgerStore::new();
    let err = store.record_transaction(txn(dec!(50), "")).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::EmptySymbol)
    ));
    assert!(store.transactions().is_empty());
}

#[test]
fn seeded_holding_cannot_be_seeded_twice() {
    let store = LedgerStore::new();
    store
        .seed_holding("AAPL", "Apple Inc.", dec!(2), dec!(180))
        .unwrap();
    assert!(store
        .seed_holding("AAPL", "Apple Inc.", dec!(2), dec!(180))
        .is_err());
    assert_eq!(store.holdings().len(), 1);
}

#[test]
fn seeded_holding_accepts_later_lots() {
    let store = LedgerStore::new();
    store
        .seed_holding("TSLA", "Tesla Inc.", dec!(1), dec!(260))
        .unwrap();

    let lot = Lot::new(dec!(130), dec!(260), date()).unwrap();
    store.upsert_lot("TSLA", "Tesla Inc.", lot).unwrap();

    let holding = &store.holdings()[0];
    // Seeded shares plus the new lot's half share.
    assert_eq!(holding.total_shares, dec!(1.5));
    assert_eq!(holding.lots.len(), 1);
}
