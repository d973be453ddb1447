use crate::application::tax::TaxCalculator;
use crate::application::validation::PreconditionValidator;
use crate::domain::invoice::Invoice;
use crate::domain::outcome::PaymentOutcome;
use crate::domain::payment::Payment;
use crate::domain::ports::{
    InvoiceStoreBox, PaymentValidatorBox, TaxPolicyBox, TaxRateProviderBox,
};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

/// Applies incoming payments to stored invoices.
///
/// `InvoiceProcessor` owns its store, validator and tax policy. Each call to
/// [`process_payment`](Self::process_payment) runs to completion on its own; callers
/// submitting payments for the same reference concurrently must serialize them.
pub struct InvoiceProcessor {
    store: InvoiceStoreBox,
    tax_policy: TaxPolicyBox,
    validator: PaymentValidatorBox,
}

impl InvoiceProcessor {
    /// Creates a new `InvoiceProcessor` from explicit collaborators.
    ///
    /// # Arguments
    ///
    /// * `store` - Where invoices are looked up and saved.
    /// * `tax_policy` - Recomputes tax once a payment is applied.
    /// * `validator` - Pre-condition checks for payments and invoices.
    pub fn new(
        store: InvoiceStoreBox,
        tax_policy: TaxPolicyBox,
        validator: PaymentValidatorBox,
    ) -> Self {
        Self {
            store,
            tax_policy,
            validator,
        }
    }

    /// Wires the default `TaxCalculator` and `PreconditionValidator`.
    pub fn with_defaults(store: InvoiceStoreBox, rates: TaxRateProviderBox) -> Self {
        Self::new(
            store,
            Box::new(TaxCalculator::new(rates)),
            Box::new(PreconditionValidator),
        )
    }

    /// Records `payment` against the invoice it references.
    ///
    /// Business rejections (overpayment, nothing owed, already paid) come back as
    /// `Ok` outcomes and leave the invoice untouched. Errors are returned before
    /// anything is persisted.
    #[instrument(skip_all, fields(reference = %payment.reference, amount = %payment.amount))]
    pub async fn process_payment(&self, payment: Payment) -> Result<PaymentOutcome> {
        self.validator.validate_payment(&payment)?;

        let mut invoice = self
            .store
            .get(&payment.reference)
            .await?
            .ok_or_else(|| PaymentError::InvoiceNotFound(payment.reference.clone()))?;

        self.validator.validate_invoice(&invoice)?;

        let outcome = self.evaluate(&mut invoice, payment)?;

        self.store.save(invoice).await?;
        Ok(outcome)
    }

    /// Consumes the processor and returns every stored invoice.
    pub async fn into_results(self) -> Result<Vec<Invoice>> {
        self.store.all_invoices().await
    }

    fn evaluate(&self, invoice: &mut Invoice, payment: Payment) -> Result<PaymentOutcome> {
        if invoice.total_amount.is_zero() {
            if invoice.has_payments() {
                return Err(PaymentError::CorruptedInvoice(invoice.reference.clone()));
            }
            let outcome = PaymentOutcome::NoPaymentNeeded;
            warn!(%outcome, "payment not applied");
            return Ok(outcome);
        }

        // Checked before the overpayment rule on purpose.
        if invoice.is_fully_paid()? {
            let outcome = PaymentOutcome::AlreadyFullyPaid;
            warn!(%outcome, "payment not applied");
            return Ok(outcome);
        }

        let had_payments = invoice.has_payments();
        let outstanding = if had_payments {
            invoice.remaining_amount()?
        } else {
            invoice.total_amount
        };

        if payment.amount > outstanding {
            let outcome = if had_payments {
                PaymentOutcome::ExceedsRemainingBalance
            } else {
                PaymentOutcome::ExceedsInvoiceAmount
            };
            warn!(%outcome, %outstanding, "payment not applied");
            return Ok(outcome);
        }

        self.apply(invoice, payment, had_payments)
    }

    fn apply(
        &self,
        invoice: &mut Invoice,
        payment: Payment,
        had_payments: bool,
    ) -> Result<PaymentOutcome> {
        // A zero first payment leaves amount_paid at 0, so the next one is still "initial".
        let subsequent = had_payments && invoice.amount_paid > Decimal::ZERO;
        let amount = payment.amount;
        invoice.payments.push(payment);

        let outcome = if subsequent {
            invoice.amount_paid = invoice
                .amount_paid
                .checked_add(amount)
                .ok_or_else(|| PaymentError::BalanceOverflow(invoice.reference.clone()))?;
            self.tax_policy.apply_tax(invoice, amount)?;
            if invoice.remaining_amount()?.is_zero() {
                PaymentOutcome::FinalPartialPayment
            } else {
                PaymentOutcome::AnotherPartialPayment
            }
        } else {
            invoice.amount_paid = amount;
            self.tax_policy.apply_tax(invoice, amount)?;
            if amount == invoice.total_amount {
                PaymentOutcome::FullyPaid
            } else {
                PaymentOutcome::PartiallyPaid
            }
        };

        info!(
            amount_paid = %invoice.amount_paid,
            tax_amount = %invoice.tax_amount,
            outcome = %outcome,
            "payment applied"
        );
        Ok(outcome)
    }
}
