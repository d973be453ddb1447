use super::invoice::Invoice;
use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Lookup-by-reference persistence for invoices.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Returns `Ok(None)` when no invoice is stored under `reference`.
    async fn get(&self, reference: &str) -> Result<Option<Invoice>>;
    /// Upserts by reference. Invoices with an empty reference are ignored.
    async fn save(&self, invoice: Invoice) -> Result<()>;
    async fn all_invoices(&self) -> Result<Vec<Invoice>>;
}

pub type InvoiceStoreBox = Box<dyn InvoiceStore>;
pub type InvoiceStoreFactory = Box<dyn Fn() -> InvoiceStoreBox + Send + Sync>;

/// Structural pre-condition checks run before any invoice is touched.
pub trait PaymentValidator: Send + Sync {
    fn validate_payment(&self, payment: &Payment) -> Result<()>;
    fn validate_invoice(&self, invoice: &Invoice) -> Result<()>;
}

/// Recomputes `tax_amount` on an invoice after a payment has been applied.
pub trait TaxPolicy: Send + Sync {
    fn apply_tax(&self, invoice: &mut Invoice, payment_amount: Decimal) -> Result<()>;
}

/// Source of the tax rate. Queried on every tax computation.
pub trait TaxRateProvider: Send + Sync {
    fn tax_rate(&self) -> Decimal;
}

pub type PaymentValidatorBox = Box<dyn PaymentValidator>;
pub type TaxPolicyBox = Box<dyn TaxPolicy>;
pub type TaxRateProviderBox = Box<dyn TaxRateProvider>;
