//! End-to-end session: seeded demo ledger, one declined transfer, two
//! accepted transfers, and the portfolio views that follow.

use rust_decimal_macros::dec;
use std::sync::Arc;

use peerfolio_core::demo;
use peerfolio_core::ledger::{LedgerStoreTrait, TransactionKind};
use peerfolio_core::portfolio::{portfolio_summary, total_portfolio_value};
use peerfolio_core::transfers::{
    Counterparty, StockSelection, TransferDraft, TransferWorkflow,
};
use peerfolio_market_data::FixtureProvider;

fn draft(amount: &str, symbol: &str, recipient: Counterparty) -> TransferDraft {
    TransferDraft {
        sender: demo::DEMO_SENDER.to_string(),
        recipient,
        amount: amount.to_string(),
        symbol: symbol.to_string(),
        stock_name: demo::lookup_stock_name(symbol).map(str::to_string),
        quoted_price: None,
        brokerage_account: "Personal Brokerage".to_string(),
        funding_account: "checking-001".to_string(),
    }
}

#[tokio::test]
async fn full_session_flow() {
    let ledger = Arc::new(demo::seed_ledger().unwrap());
    let quotes = Arc::new(FixtureProvider::new());

    // Seeded state: AAPL + TSLA at reference prices.
    assert_eq!(total_portfolio_value(&ledger.holdings()), dec!(620.00));
    assert_eq!(ledger.transactions().len(), 2);

    // A declined transfer leaves everything as it was.
    let mut declined = TransferWorkflow::new(ledger.clone(), quotes.clone());
    declined
        .propose(draft("75", "NVDA", Counterparty::friend("Mike R.")))
        .unwrap();
    declined.decline();
    assert_eq!(total_portfolio_value(&ledger.holdings()), dec!(620.00));
    assert_eq!(ledger.transactions().len(), 2);

    // Send $50 to Sarah; the fixture quotes AAPL at $189.50.
    let mut to_sarah = TransferWorkflow::new(ledger.clone(), quotes.clone());
    to_sarah
        .propose(draft("50", "AAPL", Counterparty::friend("Sarah M.")))
        .unwrap();
    let receipt = to_sarah.accept(None).await.unwrap().unwrap();
    assert_eq!(receipt.execution_price, dec!(189.50));
    assert_eq!(receipt.shares, dec!(0.2639));

    // The AAPL holding now has a lot, so it values by lots: the seeded
    // reference valuation is superseded by the $50 cost basis.
    let holdings = ledger.holdings();
    let aapl = holdings.iter().find(|h| h.symbol == "AAPL").unwrap();
    assert_eq!(aapl.lots.len(), 1);
    assert_eq!(total_portfolio_value(&holdings), dec!(310.00));

    // Receive $35 into the personal account, redirected to CRM at the
    // confirmation step.
    let mut to_self = TransferWorkflow::new(ledger.clone(), quotes.clone());
    to_self
        .propose(draft("35", "TSLA", demo::personal_account()))
        .unwrap();
    let receipt = to_self
        .accept(Some(StockSelection::named("CRM", "Salesforce Inc.")))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(receipt.symbol, "CRM");
    assert_eq!(receipt.execution_price, dec!(245.80));

    let txns = ledger.transactions();
    assert_eq!(txns.len(), 4);
    assert_eq!(txns[0].symbol, "CRM");
    assert_eq!(txns[0].kind, TransactionKind::Received);
    assert_eq!(txns[1].symbol, "AAPL");
    assert_eq!(txns[1].kind, TransactionKind::Sent);

    // CRM was created implicitly and shows up in the summary rows.
    let summary = portfolio_summary(&ledger.holdings());
    assert_eq!(summary.holdings.len(), 3);
    let crm = summary.holdings.iter().find(|h| h.symbol == "CRM").unwrap();
    assert_eq!(crm.name, "Salesforce Inc.");
    assert_eq!(crm.total_value, "$35.00");
    assert_eq!(summary.total_value, dec!(345.00));
}
