use std::fmt;

/// The business decision reached for a payment.
///
/// These are successful results, not errors: a rejected overpayment leaves the
/// invoice untouched but is still a well-formed answer. The rendered strings
/// are part of the public contract and callers may match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentOutcome {
    NoPaymentNeeded,
    AlreadyFullyPaid,
    ExceedsRemainingBalance,
    ExceedsInvoiceAmount,
    FullyPaid,
    PartiallyPaid,
    FinalPartialPayment,
    AnotherPartialPayment,
}

impl PaymentOutcome {
    pub const ALL: [PaymentOutcome; 8] = [
        PaymentOutcome::NoPaymentNeeded,
        PaymentOutcome::AlreadyFullyPaid,
        PaymentOutcome::ExceedsRemainingBalance,
        PaymentOutcome::ExceedsInvoiceAmount,
        PaymentOutcome::FullyPaid,
        PaymentOutcome::PartiallyPaid,
        PaymentOutcome::FinalPartialPayment,
        PaymentOutcome::AnotherPartialPayment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentOutcome::NoPaymentNeeded => "no payment needed",
            PaymentOutcome::AlreadyFullyPaid => "invoice was already fully paid",
            PaymentOutcome::ExceedsRemainingBalance => {
                "the payment is greater than the partial amount remaining"
            }
            PaymentOutcome::ExceedsInvoiceAmount => {
                "the payment is greater than the invoice amount"
            }
            PaymentOutcome::FullyPaid => "invoice is now fully paid",
            PaymentOutcome::PartiallyPaid => "invoice is now partially paid",
            PaymentOutcome::FinalPartialPayment => {
                "final partial payment received, invoice is now fully paid"
            }
            PaymentOutcome::AnotherPartialPayment => {
                "another partial payment received, still not fully paid"
            }
        }
    }

    /// Whether the payment was appended to the invoice.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            PaymentOutcome::FullyPaid
                | PaymentOutcome::PartiallyPaid
                | PaymentOutcome::FinalPartialPayment
                | PaymentOutcome::AnotherPartialPayment
        )
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
