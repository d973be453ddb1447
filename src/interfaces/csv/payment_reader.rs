use crate::domain::payment::Payment;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads payments from a CSV source with a `reference,amount` header.
///
/// Whitespace around fields is trimmed and record lengths are not enforced, so
/// a malformed row surfaces as an `Err` item instead of aborting the stream.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one payment per row.
    pub fn payments(self) -> impl Iterator<Item = Result<Payment>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "reference, amount\ninv-1, 1.0\ninv-2, 0.5";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<Payment>> = reader.payments().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.reference, "inv-1");
        assert_eq!(first.amount, dec!(1.0));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "reference, amount\ninv-1, lots\ninv-1, 2";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<Payment>> = reader.payments().collect();

        assert!(matches!(results[0], Err(PaymentError::Csv(_))));
        assert!(results[1].is_ok());
    }
}
