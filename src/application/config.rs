use crate::domain::ports::TaxRateProvider;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, RwLock};

pub const DEFAULT_TAX_RATE: Decimal = dec!(0.14);

fn check_rate(rate: Decimal) -> Result<Decimal> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(PaymentError::InvalidTaxRate(rate.to_string()));
    }
    Ok(rate)
}

/// Fixed tax rate, `DEFAULT_TAX_RATE` unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxConfiguration {
    rate: Decimal,
}

impl TaxConfiguration {
    pub fn new(rate: Decimal) -> Result<Self> {
        Ok(Self {
            rate: check_rate(rate)?,
        })
    }
}

impl Default for TaxConfiguration {
    fn default() -> Self {
        Self {
            rate: DEFAULT_TAX_RATE,
        }
    }
}

impl TaxRateProvider for TaxConfiguration {
    fn tax_rate(&self) -> Decimal {
        self.rate
    }
}

/// A tax rate that can be changed while payments are being processed.
///
/// Clones share the same value; a `set_rate` is visible to the next
/// `tax_rate` call on any clone.
#[derive(Debug, Clone)]
pub struct SharedTaxRate {
    rate: Arc<RwLock<Decimal>>,
}

impl SharedTaxRate {
    pub fn new(rate: Decimal) -> Result<Self> {
        Ok(Self {
            rate: Arc::new(RwLock::new(check_rate(rate)?)),
        })
    }

    pub fn set_rate(&self, rate: Decimal) -> Result<()> {
        let rate = check_rate(rate)?;
        let mut guard = self.rate.write().unwrap_or_else(|e| e.into_inner());
        *guard = rate;
        Ok(())
    }
}

impl TaxRateProvider for SharedTaxRate {
    fn tax_rate(&self) -> Decimal {
        *self.rate.read().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate() {
        assert_eq!(TaxConfiguration::default().tax_rate(), dec!(0.14));
    }

    #[test]
    fn test_rate_bounds() {
        assert!(TaxConfiguration::new(dec!(0)).is_ok());
        assert!(TaxConfiguration::new(dec!(1)).is_ok());
        assert!(matches!(
            TaxConfiguration::new(dec!(-0.01)),
            Err(PaymentError::InvalidTaxRate(_))
        ));
        assert!(matches!(
            SharedTaxRate::new(dec!(1.5)),
            Err(PaymentError::InvalidTaxRate(_))
        ));
    }

    #[test]
    fn test_shared_rate_updates_are_visible_to_clones() {
        let rate = SharedTaxRate::new(dec!(0.14)).unwrap();
        let view = rate.clone();
        rate.set_rate(dec!(0.2)).unwrap();
        assert_eq!(view.tax_rate(), dec!(0.2));

        assert!(rate.set_rate(dec!(2)).is_err());
        assert_eq!(view.tax_rate(), dec!(0.2));
    }
}
