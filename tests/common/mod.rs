#![allow(dead_code)]

use invoice_payments::application::config::TaxConfiguration;
use invoice_payments::application::processor::InvoiceProcessor;
use invoice_payments::domain::invoice::Invoice;
use invoice_payments::domain::ports::InvoiceStore;
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceStore;
use std::io::Write;
use tempfile::NamedTempFile;

/// Builds a processor over a fresh in-memory store seeded with `invoices`.
/// The returned store shares state with the processor.
pub async fn seeded_processor(invoices: Vec<Invoice>) -> (InvoiceProcessor, InMemoryInvoiceStore) {
    let store = InMemoryInvoiceStore::new();
    for invoice in invoices {
        store.save(invoice).await.unwrap();
    }
    let processor = InvoiceProcessor::with_defaults(
        Box::new(store.clone()),
        Box::new(TaxConfiguration::default()),
    );
    (processor, store)
}

pub fn invoices_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

pub fn payments_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "reference, amount").unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}
