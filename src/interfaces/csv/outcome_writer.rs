use crate::domain::outcome::PaymentOutcome;
use crate::domain::payment::Payment;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    reference: &'a str,
    amount: Decimal,
    outcome: &'a str,
}

/// Writes one `reference,amount,outcome` row per processed payment.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcome(&mut self, payment: &Payment, outcome: PaymentOutcome) -> Result<()> {
        self.writer.serialize(OutcomeRecord {
            reference: &payment.reference,
            amount: payment.amount,
            outcome: outcome.as_str(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_outcomes_are_quoted_when_needed() {
        let mut buffer = Vec::new();
        {
            let mut writer = OutcomeWriter::new(&mut buffer);
            let first = Payment::new("inv-1", dec!(2.5));
            let second = Payment::new("inv-1", dec!(7.5));
            writer
                .write_outcome(&first, PaymentOutcome::PartiallyPaid)
                .unwrap();
            writer
                .write_outcome(&second, PaymentOutcome::FinalPartialPayment)
                .unwrap();
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("reference,amount,outcome"));
        assert_eq!(lines.next(), Some("inv-1,2.5,invoice is now partially paid"));
        assert_eq!(
            lines.next(),
            Some("inv-1,7.5,\"final partial payment received, invoice is now fully paid\"")
        );
    }
}
