//! Application layer containing the payment-application logic.
//!
//! `InvoiceProcessor` is the entry point. It validates, looks the invoice up,
//! decides what the payment does to it, applies tax and persists the result.
//! Every collaborator is injected so it can be swapped in tests.

pub mod config;
pub mod processor;
pub mod tax;
pub mod validation;
