use clap::Parser;
use invoice_payments::application::config::{DEFAULT_TAX_RATE, TaxConfiguration};
use invoice_payments::application::processor::InvoiceProcessor;
use invoice_payments::domain::ports::InvoiceStoreBox;
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceStore;
#[cfg(feature = "storage-rocksdb")]
use invoice_payments::infrastructure::rocksdb::RocksDBStore;
use invoice_payments::interfaces::csv::outcome_writer::OutcomeWriter;
use invoice_payments::interfaces::csv::payment_reader::PaymentReader;
use invoice_payments::interfaces::json::{InvoiceLoader, InvoiceWriter};
use invoice_payments::telemetry;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with the invoices to pay against
    invoices: PathBuf,

    /// Payments CSV file (`reference,amount`)
    payments: PathBuf,

    /// Tax rate applied to payments
    #[arg(long, env = "INVOICE_TAX_RATE", default_value_t = DEFAULT_TAX_RATE)]
    tax_rate: Decimal,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Write the final state of every invoice to this JSON file
    #[arg(long)]
    invoices_out: Option<PathBuf>,
}

fn open_store(db_path: Option<PathBuf>) -> Result<InvoiceStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => Ok(Box::new(RocksDBStore::open(path)?)),
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            warn!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature \
                 is not enabled. Falling back to In-Memory storage."
            );
            Ok(Box::new(InMemoryInvoiceStore::new()))
        }
        None => Ok(Box::new(InMemoryInvoiceStore::new())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let tax = TaxConfiguration::new(cli.tax_rate)?;
    let store = open_store(cli.db_path)?;

    // Invoices already in a persistent store keep their recorded state.
    let file = File::open(&cli.invoices).into_diagnostic()?;
    for invoice in InvoiceLoader::new(BufReader::new(file)).invoices()? {
        if store.get(&invoice.reference).await?.is_none() {
            debug!(reference = %invoice.reference, "loading invoice");
            store.save(invoice).await?;
        }
    }

    let processor = InvoiceProcessor::with_defaults(store, Box::new(tax));

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    let file = File::open(&cli.payments).into_diagnostic()?;
    let reader = PaymentReader::new(file);
    for payment_result in reader.payments() {
        match payment_result {
            Ok(payment) => match processor.process_payment(payment.clone()).await {
                Ok(outcome) => writer.write_outcome(&payment, outcome)?,
                Err(e) => warn!(error = %e, "failed to process payment"),
            },
            Err(e) => warn!(error = %e, "failed to read payment"),
        }
    }
    writer.flush()?;

    let invoices = processor.into_results().await?;
    info!(count = invoices.len(), "processing finished");

    if let Some(path) = cli.invoices_out {
        let file = File::create(path).into_diagnostic()?;
        InvoiceWriter::new(BufWriter::new(file)).write_invoices(invoices)?;
    }

    Ok(())
}
