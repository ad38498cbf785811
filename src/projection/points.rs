//! Projection output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Snapshot of an instrument at the end of one projected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Start date advanced by `month` whole months
    pub reference_date: NaiveDate,

    /// Projection month (1-indexed)
    pub month: u32,

    /// Principal plus contributions made through this month
    pub total_contributions: f64,

    /// Balance including compounded growth
    pub gross_balance: f64,

    /// Gross balance minus contributions, floored at zero
    pub gross_yield: f64,

    // Hypothetical withholding if cashed out at this point
    pub transaction_tax: f64,
    pub income_tax: f64,

    /// What would remain after withholding
    pub net_balance: f64,
}

impl ProjectionPoint {
    pub fn total_tax(&self) -> f64 {
        self.transaction_tax + self.income_tax
    }
}

/// Complete projection result for one instrument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Effective annual rate used (decimal)
    pub annual_rate: f64,

    /// Effective monthly rate used (decimal)
    pub monthly_rate: f64,

    /// Monthly points, ordered by month ascending
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    pub fn new(annual_rate: f64, monthly_rate: f64) -> Self {
        Self {
            annual_rate,
            monthly_rate,
            points: Vec::new(),
        }
    }

    /// Add a projection point
    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Get summary statistics at the horizon
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.points.last();

        ProjectionSummary {
            months: self.points.len() as u32,
            final_date: last.map(|p| p.reference_date),
            total_contributions: last.map(|p| p.total_contributions).unwrap_or(0.0),
            final_gross_balance: last.map(|p| p.gross_balance).unwrap_or(0.0),
            final_gross_yield: last.map(|p| p.gross_yield).unwrap_or(0.0),
            final_total_tax: last.map(|p| p.total_tax()).unwrap_or(0.0),
            final_net_balance: last.map(|p| p.net_balance).unwrap_or(0.0),
        }
    }

    pub fn into_points(self) -> Vec<ProjectionPoint> {
        self.points
    }
}

/// Horizon figures for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub final_date: Option<NaiveDate>,
    pub total_contributions: f64,
    pub final_gross_balance: f64,
    pub final_gross_yield: f64,
    pub final_total_tax: f64,
    pub final_net_balance: f64,
}
