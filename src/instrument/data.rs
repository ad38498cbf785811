//! Savings instrument parameters as supplied by the caller

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::rates::{effective_annual_rate, effective_monthly_rate};

/// Parameters of an index-linked savings instrument
///
/// Treated as a value object: the engine never mutates or stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentParameters {
    /// Annual index rate in percent (10.65 = 10.65% p.a.)
    pub index_rate_annual: f64,

    /// Percentage of the index paid by the instrument (110 = 110% of the index)
    pub percent_of_index: f64,

    /// Opening principal
    pub principal: f64,

    /// Fixed contribution made at the start of every month
    pub monthly_contribution: f64,

    /// Date the instrument starts accruing
    pub start_date: NaiveDate,

    /// Whether withdrawal taxes are estimated at each projected month
    pub apply_withholding: bool,
}

impl InstrumentParameters {
    pub fn new(
        index_rate_annual: f64,
        percent_of_index: f64,
        principal: f64,
        monthly_contribution: f64,
        start_date: NaiveDate,
        apply_withholding: bool,
    ) -> Self {
        Self {
            index_rate_annual,
            percent_of_index,
            principal,
            monthly_contribution,
            start_date,
            apply_withholding,
        }
    }

    /// Reject negative or non-finite monetary amounts.
    ///
    /// Rates are not checked here; they are clamped during conversion.
    pub fn validate(&self) -> EngineResult<()> {
        check_amount("principal", self.principal)?;
        check_amount("monthly_contribution", self.monthly_contribution)?;
        Ok(())
    }

    /// Effective annual rate (decimal)
    pub fn annual_rate(&self) -> f64 {
        effective_annual_rate(self.index_rate_annual, self.percent_of_index)
    }

    /// Effective monthly rate (decimal)
    pub fn monthly_rate(&self) -> f64 {
        effective_monthly_rate(self.annual_rate())
    }
}

fn check_amount(field: &'static str, value: f64) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::NonFiniteInput { field });
    }
    if value < 0.0 {
        return Err(EngineError::NegativeAmount { field, value: value.to_string() });
    }
    Ok(())
}

/// A stored instrument: identity and display fields around its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentRecord {
    pub id: u32,
    pub name: String,
    pub institution: String,
    pub parameters: InstrumentParameters,
}
