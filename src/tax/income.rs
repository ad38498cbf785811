//! Regressive income tax table keyed by holding period in days

use serde::{Deserialize, Serialize};

/// One tier of the table: applies while `days <= max_days` (`None` = open-ended)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub max_days: Option<u32>,
    pub rate: f64,
}

/// Income tax brackets ordered by ascending upper bound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl IncomeTaxSchedule {
    /// Regressive table over holding duration: longer holds are taxed less
    pub fn regressive() -> Self {
        Self {
            brackets: vec![
                TaxBracket { max_days: Some(180), rate: 0.225 },
                TaxBracket { max_days: Some(360), rate: 0.200 },
                TaxBracket { max_days: Some(720), rate: 0.175 },
                TaxBracket { max_days: None, rate: 0.150 },
            ],
        }
    }

    /// Rate for a holding period of `days` whole days (upper bounds inclusive)
    pub fn rate_for_days(&self, days: u32) -> f64 {
        self.brackets
            .iter()
            .find(|b| b.max_days.map_or(true, |max| days <= max))
            .or_else(|| self.brackets.last())
            .map(|b| b.rate)
            .unwrap_or(0.0)
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

impl Default for IncomeTaxSchedule {
    fn default() -> Self {
        Self::regressive()
    }
}

/// Income tax rate from the regressive table
pub fn income_tax_rate(days: u32) -> f64 {
    IncomeTaxSchedule::regressive().rate_for_days(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(income_tax_rate(0), 0.225);
        assert_eq!(income_tax_rate(1), 0.225);
        assert_eq!(income_tax_rate(180), 0.225);
        assert_eq!(income_tax_rate(181), 0.200);
        assert_eq!(income_tax_rate(360), 0.200);
        assert_eq!(income_tax_rate(361), 0.175);
        assert_eq!(income_tax_rate(720), 0.175);
        assert_eq!(income_tax_rate(721), 0.150);
        assert_eq!(income_tax_rate(u32::MAX), 0.150);
    }

    #[test]
    fn test_rate_never_increases_with_duration() {
        let schedule = IncomeTaxSchedule::default();
        let mut prev = schedule.rate_for_days(0);
        for days in 1..=1000 {
            let rate = schedule.rate_for_days(days);
            assert!(rate <= prev, "rate increased at day {}", days);
            prev = rate;
        }
    }

    #[test]
    fn test_bounded_table_falls_back_to_last_tier() {
        let schedule = IncomeTaxSchedule {
            brackets: vec![
                TaxBracket { max_days: Some(30), rate: 0.3 },
                TaxBracket { max_days: Some(60), rate: 0.1 },
            ],
        };
        assert_eq!(schedule.rate_for_days(45), 0.1);
        assert_eq!(schedule.rate_for_days(90), 0.1);
    }
}
