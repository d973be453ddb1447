use miette::Diagnostic;
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug, Diagnostic)]
pub enum PaymentError {
    #[error("There is no invoice matching this payment (reference '{0}')")]
    #[diagnostic(code(invoice::not_found))]
    InvoiceNotFound(String),

    #[error("Payment amount cannot be negative: {0}")]
    #[diagnostic(code(payment::negative_amount))]
    NegativePaymentAmount(Decimal),

    #[error("Payment reference cannot be empty")]
    #[diagnostic(code(payment::empty_reference))]
    EmptyPaymentReference,

    #[error("Invoice '{reference}' amount cannot be negative: {amount}")]
    #[diagnostic(code(invoice::negative_amount))]
    NegativeInvoiceAmount { reference: String, amount: Decimal },

    #[error("Invoice '{0}' is in an invalid state: it has an amount of 0 and it has payments")]
    #[diagnostic(
        code(invoice::corrupted),
        help("a zero-amount invoice must never carry payment history")
    )]
    CorruptedInvoice(String),

    #[error("Invoice '{0}' balance is out of range")]
    #[diagnostic(
        code(invoice::balance_overflow),
        help("the stored amounts are too large or inconsistent to settle")
    )]
    BalanceOverflow(String),

    #[error("Unsupported billing type: '{0}'")]
    #[diagnostic(code(invoice::unsupported_billing_type))]
    UnsupportedBillingType(String),

    #[error("Invalid tax rate: {0}")]
    #[diagnostic(code(config::tax_rate), help("the tax rate must lie between 0 and 1"))]
    InvalidTaxRate(String),

    #[error("CSV error: {0}")]
    #[diagnostic(code(io::csv))]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(io::json))]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(io::io))]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(internal))]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for PaymentError {
    fn from(e: rocksdb::Error) -> Self {
        PaymentError::InternalError(Box::new(e))
    }
}
