//! Withholding tax schedules applied to investment yield at a hypothetical withdrawal

mod income;
mod transaction;

pub use income::{income_tax_rate, IncomeTaxSchedule, TaxBracket};
pub use transaction::{transaction_tax_rate, TRANSACTION_TAX_WINDOW_DAYS};

use serde::{Deserialize, Serialize};

/// Tax withheld from a gross yield if it were withdrawn after a given holding period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WithholdingBreakdown {
    pub transaction_tax: f64,
    pub income_tax: f64,
    /// Yield left after both taxes, floored at zero
    pub net_yield: f64,
}

impl WithholdingBreakdown {
    /// Transactional tax comes off the yield first; income tax is charged on what remains.
    pub fn compute(gross_yield: f64, days: u32, schedule: &IncomeTaxSchedule) -> Self {
        if gross_yield <= 0.0 {
            return Self::default();
        }
        let transaction_tax = gross_yield * transaction_tax_rate(days);
        let taxable_base = (gross_yield - transaction_tax).max(0.0);
        let income_tax = taxable_base * schedule.rate_for_days(days);
        Self {
            transaction_tax,
            income_tax,
            net_yield: (gross_yield - transaction_tax - income_tax).max(0.0),
        }
    }

    pub fn total(&self) -> f64 {
        self.transaction_tax + self.income_tax
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_yield_no_tax() {
        let schedule = IncomeTaxSchedule::regressive();
        assert_eq!(WithholdingBreakdown::compute(0.0, 10, &schedule), WithholdingBreakdown::default());
        assert_eq!(WithholdingBreakdown::compute(-5.0, 400, &schedule).total(), 0.0);
    }

    #[test]
    fn test_income_tax_only_after_window() {
        let schedule = IncomeTaxSchedule::regressive();
        let w = WithholdingBreakdown::compute(100.0, 31, &schedule);
        assert_eq!(w.transaction_tax, 0.0);
        assert_relative_eq!(w.income_tax, 22.5, epsilon = 1e-12);
        assert_relative_eq!(w.net_yield, 77.5, epsilon = 1e-12);
    }

    #[test]
    fn test_income_tax_on_base_after_transaction_tax() {
        let schedule = IncomeTaxSchedule::regressive();
        // day 15: transactional rate 15/29
        let w = WithholdingBreakdown::compute(29.0, 15, &schedule);
        assert_relative_eq!(w.transaction_tax, 15.0, epsilon = 1e-12);
        assert_relative_eq!(w.income_tax, 14.0 * 0.225, epsilon = 1e-12);
        assert_relative_eq!(w.net_yield, 14.0 * 0.775, epsilon = 1e-12);
    }

    #[test]
    fn test_first_day_consumes_whole_yield() {
        let w = WithholdingBreakdown::compute(50.0, 1, &IncomeTaxSchedule::regressive());
        assert_relative_eq!(w.transaction_tax, 50.0, epsilon = 1e-12);
        assert_eq!(w.income_tax, 0.0);
        assert_eq!(w.net_yield, 0.0);
    }
}
