use crate::domain::invoice::Invoice;
use crate::error::Result;
use std::io::{Read, Write};

/// Loads invoices from a JSON array.
///
/// Missing `amount_paid`, `tax_amount`, `billing_type` and `payments` fields
/// take their defaults; an unknown billing type fails the whole load.
pub struct InvoiceLoader<R: Read> {
    source: R,
}

impl<R: Read> InvoiceLoader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn invoices(self) -> Result<Vec<Invoice>> {
        Ok(serde_json::from_reader(self.source)?)
    }
}

/// Writes invoices as a pretty-printed JSON array, sorted by reference.
pub struct InvoiceWriter<W: Write> {
    sink: W,
}

impl<W: Write> InvoiceWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_invoices(mut self, mut invoices: Vec<Invoice>) -> Result<()> {
        invoices.sort_by(|a, b| a.reference.cmp(&b.reference));
        serde_json::to_writer_pretty(&mut self.sink, &invoices)?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::BillingType;
    use crate::error::PaymentError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_invoices() {
        let json = r#"[
            {"reference": "a", "total_amount": "10", "amount_paid": "5",
             "billing_type": "commercial", "payments": [{"reference": "a", "amount": "5"}]},
            {"reference": "b", "total_amount": 0}
        ]"#;
        let invoices = InvoiceLoader::new(json.as_bytes()).invoices().unwrap();

        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].billing_type, BillingType::Commercial);
        assert_eq!(invoices[0].payments_total().unwrap(), dec!(5));
        assert!(invoices[1].total_amount.is_zero());
    }

    #[test]
    fn test_load_invoices_rejects_garbage() {
        assert!(matches!(
            InvoiceLoader::new("{not json".as_bytes()).invoices(),
            Err(PaymentError::Json(_))
        ));
    }

    #[test]
    fn test_write_invoices_sorted() {
        let mut buffer = Vec::new();
        InvoiceWriter::new(&mut buffer)
            .write_invoices(vec![
                Invoice::new("b", dec!(1), BillingType::Standard),
                Invoice::new("a", dec!(2), BillingType::Standard),
            ])
            .unwrap();

        let written = InvoiceLoader::new(buffer.as_slice()).invoices().unwrap();
        assert_eq!(written[0].reference, "a");
        assert_eq!(written[1].reference, "b");
    }
}
