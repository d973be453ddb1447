use crate::domain::invoice::{BillingType, Invoice};
use crate::domain::ports::{TaxPolicy, TaxRateProviderBox};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;

/// Default tax policy.
///
/// Standard invoices are taxed on the whole amount paid so far, so the tax is
/// recomputed from scratch. Commercial invoices accrue tax per payment.
pub struct TaxCalculator {
    rates: TaxRateProviderBox,
}

impl TaxCalculator {
    pub fn new(rates: TaxRateProviderBox) -> Self {
        Self { rates }
    }
}

impl TaxPolicy for TaxCalculator {
    fn apply_tax(&self, invoice: &mut Invoice, payment_amount: Decimal) -> Result<()> {
        let rate = self.rates.tax_rate();
        let tax = match invoice.billing_type {
            BillingType::Standard => invoice.amount_paid.checked_mul(rate),
            BillingType::Commercial => payment_amount
                .checked_mul(rate)
                .and_then(|accrued| invoice.tax_amount.checked_add(accrued)),
        };
        invoice.tax_amount =
            tax.ok_or_else(|| PaymentError::BalanceOverflow(invoice.reference.clone()))?;
        Ok(())
    }
}
