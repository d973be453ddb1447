use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single payment event aimed at the invoice identified by `reference`.
///
/// Several partial payments may share the same reference. A payment is never
/// mutated once it has been appended to an invoice's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub reference: String,
    pub amount: Decimal,
}

impl Payment {
    pub fn new(reference: impl Into<String>, amount: Decimal) -> Self {
        Self {
            reference: reference.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_csv_deserialization_trims_fields() {
        let csv = "reference, amount\n test-ref , 2.50";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());

        let payment: Payment = reader
            .deserialize()
            .next()
            .unwrap()
            .expect("Failed to deserialize payment");

        assert_eq!(payment, Payment::new("test-ref", dec!(2.50)));
    }
}
