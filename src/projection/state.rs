//! Running state carried between projected months

use crate::instrument::InstrumentParameters;

/// Gross compounding state of an instrument during projection
///
/// Only the gross balance and contributions carry forward; withholding is
/// recomputed fresh at every month and never deducted from `balance`.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Last completed projection month (0 before the first month)
    pub month: u32,

    /// Gross balance including compounded growth
    pub balance: f64,

    /// Principal plus all contributions made so far
    pub total_contributions: f64,
}

impl ProjectionState {
    /// Initialize state from instrument parameters at the start date
    pub fn from_parameters(params: &InstrumentParameters) -> Self {
        Self {
            month: 0,
            balance: params.principal,
            total_contributions: params.principal,
        }
    }

    /// Step one month: contribute at the start of the month, then compound
    pub fn advance_month(&mut self, contribution: f64, monthly_rate: f64) {
        self.month += 1;

        if contribution > 0.0 {
            self.balance += contribution;
            self.total_contributions += contribution;
        }

        self.balance *= 1.0 + monthly_rate;
    }

    /// Growth over contributions, floored at zero
    pub fn gross_yield(&self) -> f64 {
        (self.balance - self.total_contributions).max(0.0)
    }
}
