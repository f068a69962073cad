//! Transfers module - the send-money-to-invest confirmation workflow.

mod transfer_model;
mod transfer_workflow;


pub use transfer_model::{
    Counterparty, CounterpartyKind, PendingTransfer, StockSelection, TransferDraft,
    TransferReceipt, TransferState,
};
pub use transfer_workflow::TransferWorkflow;
