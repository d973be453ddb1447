use crate::domain::invoice::Invoice;
use crate::domain::payment::Payment;
use crate::domain::ports::PaymentValidator;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;

/// Rejects malformed payments and invoices before any state is touched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreconditionValidator;

impl PaymentValidator for PreconditionValidator {
    fn validate_payment(&self, payment: &Payment) -> Result<()> {
        if payment.amount < Decimal::ZERO {
            return Err(PaymentError::NegativePaymentAmount(payment.amount));
        }
        if payment.reference.trim().is_empty() {
            return Err(PaymentError::EmptyPaymentReference);
        }
        Ok(())
    }

    fn validate_invoice(&self, invoice: &Invoice) -> Result<()> {
        if invoice.total_amount < Decimal::ZERO {
            return Err(PaymentError::NegativeInvoiceAmount {
                reference: invoice.reference.clone(),
                amount: invoice.total_amount,
            });
        }
        Ok(())
    }
}
