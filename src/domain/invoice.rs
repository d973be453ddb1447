use super::payment::Payment;
use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects how tax accrues on an invoice.
///
/// Only the two listed types exist. Any other label is rejected when the
/// value is parsed, so every `Invoice` in memory carries a supported type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BillingType {
    #[default]
    Standard,
    Commercial,
}

impl BillingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingType::Standard => "standard",
            BillingType::Commercial => "commercial",
        }
    }
}

impl FromStr for BillingType {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(BillingType::Standard),
            "commercial" => Ok(BillingType::Commercial),
            _ => Err(PaymentError::UnsupportedBillingType(s.to_string())),
        }
    }
}

impl TryFrom<String> for BillingType {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BillingType> for String {
    fn from(value: BillingType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for BillingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A previously billed invoice that payments are applied against.
///
/// `amount_paid` mirrors the sum of `payments` and `tax_amount` is derived by
/// the tax policy; neither is meant to be set by callers after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub reference: String,
    pub total_amount: Decimal,
    #[serde(default)]
    pub amount_paid: Decimal,
    #[serde(default)]
    pub tax_amount: Decimal,
    #[serde(default)]
    pub billing_type: BillingType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub payments: Vec<Payment>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Payment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Payment>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Invoice {
    /// Creates an unpaid invoice.
    pub fn new(
        reference: impl Into<String>,
        total_amount: Decimal,
        billing_type: BillingType,
    ) -> Self {
        Self {
            reference: reference.into(),
            total_amount,
            amount_paid: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            billing_type,
            payments: Vec::new(),
        }
    }

    /// Creates an invoice that already carries a payment history.
    ///
    /// `amount_paid` is taken from the history so the two never disagree.
    ///
    /// # Panics
    ///
    /// Panics if the payment amounts overflow when summed.
    pub fn with_payments(
        reference: impl Into<String>,
        total_amount: Decimal,
        billing_type: BillingType,
        payments: Vec<Payment>,
    ) -> Self {
        let mut invoice = Self::new(reference, total_amount, billing_type);
        invoice.amount_paid = payments.iter().map(|p| p.amount).sum();
        invoice.payments = payments;
        invoice
    }

    pub fn has_payments(&self) -> bool {
        !self.payments.is_empty()
    }

    /// Sum of every payment recorded so far.
    pub fn payments_total(&self) -> Result<Decimal, PaymentError> {
        self.payments
            .iter()
            .try_fold(Decimal::ZERO, |sum, p| sum.checked_add(p.amount))
            .ok_or_else(|| PaymentError::BalanceOverflow(self.reference.clone()))
    }

    /// What is still owed on the principal, based on `amount_paid`.
    pub fn remaining_amount(&self) -> Result<Decimal, PaymentError> {
        self.total_amount
            .checked_sub(self.amount_paid)
            .ok_or_else(|| PaymentError::BalanceOverflow(self.reference.clone()))
    }

    pub fn is_fully_paid(&self) -> Result<bool, PaymentError> {
        if !self.has_payments() {
            return Ok(false);
        }
        let paid = self.payments_total()?;
        Ok(!paid.is_zero() && paid == self.total_amount)
    }
}
