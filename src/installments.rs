//! Splitting a lump expense into dated monthly installments

use chrono::NaiveDate;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calendar::advance_months;
use crate::error::{EngineError, EngineResult};

/// Decimal places of the currency's smallest unit
const CENTS_DP: u32 = 2;

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENTS_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// One dated installment of a split expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentLine {
    /// Position in the plan (1-indexed)
    pub sequence: u32,

    /// Total number of installments in the plan
    pub count: u32,

    pub due_date: NaiveDate,
    pub amount: Decimal,
}

impl InstallmentLine {
    /// Ledger description, e.g. "Parcela 2/10 - Notebook" ("Parcela 2/10" when blank)
    pub fn label(&self, description: &str) -> String {
        let description = description.trim();
        if description.is_empty() {
            format!("Parcela {}/{}", self.sequence, self.count)
        } else {
            format!("Parcela {}/{} - {}", self.sequence, self.count, description)
        }
    }

    pub fn is_last(&self) -> bool {
        self.sequence == self.count
    }
}

/// Split `total` into `count` monthly installments starting at `first_due_date`.
///
/// The first `count - 1` lines carry the rounded equal share; the last one absorbs
/// the rounding remainder, so the lines always add up to `total` (rounded to cents).
/// `count` must be at least 2.
pub fn amortize(total: Decimal, count: u32, first_due_date: NaiveDate) -> EngineResult<Vec<InstallmentLine>> {
    if count < 2 {
        return Err(EngineError::InvalidInstallmentCount { count });
    }
    if total.is_sign_negative() && !total.is_zero() {
        return Err(EngineError::NegativeAmount { field: "total", value: total.to_string() });
    }

    let total = round_cents(total);
    let n = Decimal::from(count);
    let out_of_range = || EngineError::AmountOutOfRange { value: total.to_string() };
    let base = round_cents(total / n);
    let remainder = base
        .checked_mul(n)
        .and_then(|spread| total.checked_sub(spread))
        .map(round_cents)
        .ok_or_else(out_of_range)?;
    let last = base.checked_add(remainder).ok_or_else(out_of_range)?;
    debug!(
        "Splitting {} into {} installments of {} (remainder {}) from {}",
        total, count, base, remainder, first_due_date
    );

    (1..=count)
        .map(|sequence| -> EngineResult<InstallmentLine> {
            let amount = if sequence == count { last } else { base };
            Ok(InstallmentLine {
                sequence,
                count,
                due_date: advance_months(first_due_date, sequence - 1)?,
                amount,
            })
        })
        .collect()
}

/// A caller's request to split an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    pub total: Decimal,
    pub count: u32,
    pub first_due_date: NaiveDate,
}

impl InstallmentPlan {
    pub fn new(total: Decimal, count: u32, first_due_date: NaiveDate) -> Self {
        Self { total, count, first_due_date }
    }

    /// Whether the plan actually splits the expense
    pub fn is_split(&self) -> bool {
        self.count >= 2
    }

    /// Installment lines, or `None` when `count <= 1` (record the expense as-is)
    pub fn split(&self) -> EngineResult<Option<Vec<InstallmentLine>>> {
        if !self.is_split() {
            return Ok(None);
        }
        amortize(self.total, self.count, self.first_due_date).map(Some)
    }
}
