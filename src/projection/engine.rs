//! Month-by-month balance projection with point-in-time withholding estimates

use log::{debug, trace};

use super::points::{ProjectionPoint, ProjectionResult};
use super::state::ProjectionState;
use crate::calendar::{advance_months, elapsed_days};
use crate::error::{EngineError, EngineResult};
use crate::instrument::InstrumentParameters;
use crate::tax::{IncomeTaxSchedule, WithholdingBreakdown};

/// Default number of months projected
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of months to project
    pub horizon_months: u32,

    /// Income tax table used for withholding estimates
    pub income_tax: IncomeTaxSchedule,
}

impl ProjectionConfig {
    pub fn with_horizon(horizon_months: u32) -> Self {
        Self {
            horizon_months,
            ..Default::default()
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            income_tax: IncomeTaxSchedule::regressive(),
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run projection for a single instrument
    pub fn project(&self, params: &InstrumentParameters) -> EngineResult<ProjectionResult> {
        if self.config.horizon_months < 1 {
            return Err(EngineError::InvalidHorizon { months: self.config.horizon_months });
        }
        params.validate()?;
        // The last reference date bounds every earlier one
        advance_months(params.start_date, self.config.horizon_months)?;

        let annual_rate = params.annual_rate();
        let monthly_rate = params.monthly_rate();
        debug!(
            "Projecting {} months from {}: annual {:.6}, monthly {:.8}, withholding {}",
            self.config.horizon_months, params.start_date, annual_rate, monthly_rate, params.apply_withholding
        );

        let mut result = ProjectionResult::new(annual_rate, monthly_rate);
        let mut state = ProjectionState::from_parameters(params);

        for _month in 1..=self.config.horizon_months {
            state.advance_month(params.monthly_contribution, monthly_rate);

            let point = self.calculate_point(params, &state)?;
            trace!(
                "Month {:>3} {}: gross {:.2}, net {:.2}",
                point.month, point.reference_date, point.gross_balance, point.net_balance
            );
            result.add_point(point);
        }

        Ok(result)
    }

    /// Snapshot the state, estimating withholding as if cashed out now
    fn calculate_point(&self, params: &InstrumentParameters, state: &ProjectionState) -> EngineResult<ProjectionPoint> {
        let reference_date = advance_months(params.start_date, state.month)?;
        let days = elapsed_days(params.start_date, reference_date);
        let gross_yield = state.gross_yield();

        let withholding = if params.apply_withholding {
            WithholdingBreakdown::compute(gross_yield, days, &self.config.income_tax)
        } else {
            WithholdingBreakdown::default()
        };

        let net_balance = if params.apply_withholding && gross_yield > 0.0 {
            state.total_contributions + withholding.net_yield
        } else {
            state.balance
        };

        Ok(ProjectionPoint {
            reference_date,
            month: state.month,
            total_contributions: state.total_contributions,
            gross_balance: state.balance,
            gross_yield,
            transaction_tax: withholding.transaction_tax,
            income_tax: withholding.income_tax,
            net_balance,
        })
    }
}

/// Project `horizon_months` points for an instrument with the default tax table
pub fn project(params: &InstrumentParameters, horizon_months: u32) -> EngineResult<Vec<ProjectionPoint>> {
    ProjectionEngine::new(ProjectionConfig::with_horizon(horizon_months))
        .project(params)
        .map(ProjectionResult::into_points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn instrument(index: f64, principal: f64, contribution: f64, withholding: bool) -> InstrumentParameters {
        InstrumentParameters::new(index, 100.0, principal, contribution, ymd(2025, 1, 31), withholding)
    }

    #[test]
    fn test_projection_length_and_months() {
        let points = project(&instrument(10.65, 1000.0, 100.0, true), 24).unwrap();
        assert_eq!(points.len(), 24);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.month, i as u32 + 1);
        }
    }

    #[test]
    fn test_zero_rate_principal_only() {
        let points = project(&instrument(0.0, 1000.0, 0.0, true), 12).unwrap();
        assert_eq!(points.len(), 12);
        for p in &points {
            assert_eq!(p.gross_balance, 1000.0);
            assert_eq!(p.gross_yield, 0.0);
            assert_eq!(p.total_tax(), 0.0);
            assert_eq!(p.net_balance, 1000.0);
        }
    }

    #[test]
    fn test_zero_rate_contributions_only() {
        let points = project(&instrument(0.0, 0.0, 100.0, false), 3).unwrap();
        let contributions: Vec<f64> = points.iter().map(|p| p.total_contributions).collect();
        let balances: Vec<f64> = points.iter().map(|p| p.gross_balance).collect();
        assert_eq!(contributions, vec![100.0, 200.0, 300.0]);
        assert_eq!(balances, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_reference_dates_clamp_to_month_end() {
        let points = project(&instrument(10.0, 1000.0, 0.0, false), 3).unwrap();
        assert_eq!(points[0].reference_date, ymd(2025, 2, 28));
        assert_eq!(points[1].reference_date, ymd(2025, 3, 31));
        assert_eq!(points[2].reference_date, ymd(2025, 4, 30));
    }

    #[test]
    fn test_compounding_matches_closed_form() {
        let params = instrument(12.0, 1000.0, 0.0, false);
        let points = project(&params, 12).unwrap();
        assert_relative_eq!(points[11].gross_balance, 1120.0, epsilon = 1e-9);
        assert_relative_eq!(points[11].gross_yield, 120.0, epsilon = 1e-9);
        assert_eq!(points[11].net_balance, points[11].gross_balance);
    }

    #[test]
    fn test_contribution_compounds_in_its_month() {
        let params = instrument(12.0, 0.0, 100.0, false);
        let monthly = params.monthly_rate();
        let points = project(&params, 2).unwrap();
        assert_relative_eq!(points[0].gross_balance, 100.0 * (1.0 + monthly), epsilon = 1e-9);
        assert_relative_eq!(
            points[1].gross_balance,
            (100.0 * (1.0 + monthly) + 100.0) * (1.0 + monthly),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_withholding_disabled_net_equals_gross() {
        let points = project(&instrument(10.65, 5000.0, 200.0, false), 24).unwrap();
        for p in &points {
            assert_eq!(p.transaction_tax, 0.0);
            assert_eq!(p.income_tax, 0.0);
            assert_eq!(p.net_balance, p.gross_balance);
        }
    }

    #[test]
    fn test_withholding_uses_elapsed_days() {
        let points = project(&instrument(10.65, 10_000.0, 0.0, true), 25).unwrap();

        // Month 1 (Jan 31 -> Feb 28) is 28 days: inside the transactional window
        let first = &points[0];
        assert_relative_eq!(first.transaction_tax, first.gross_yield * 2.0 / 29.0, epsilon = 1e-9);
        assert_relative_eq!(
            first.income_tax,
            (first.gross_yield - first.transaction_tax) * 0.225,
            epsilon = 1e-9
        );

        // Month 2 onwards: no transactional tax
        assert_eq!(points[1].transaction_tax, 0.0);

        // Month 6 is Jul 31 (181 days): second bracket
        let m6 = &points[5];
        assert_relative_eq!(m6.income_tax, m6.gross_yield * 0.20, epsilon = 1e-9);
        // Month 5 is Jun 30 (150 days): first bracket
        let m5 = &points[4];
        assert_relative_eq!(m5.income_tax, m5.gross_yield * 0.225, epsilon = 1e-9);
        // Month 25 is past 720 days
        let m25 = &points[24];
        assert_relative_eq!(m25.income_tax, m25.gross_yield * 0.15, epsilon = 1e-9);

        for p in &points {
            assert_relative_eq!(
                p.net_balance,
                p.total_contributions + p.gross_yield - p.total_tax(),
                epsilon = 1e-9
            );
            assert!(p.net_balance <= p.gross_balance);
        }
    }

    #[test]
    fn test_tax_never_reduces_carried_balance() {
        let taxed = project(&instrument(10.65, 2000.0, 150.0, true), 36).unwrap();
        let untaxed = project(&instrument(10.65, 2000.0, 150.0, false), 36).unwrap();
        for (a, b) in taxed.iter().zip(&untaxed) {
            assert_eq!(a.gross_balance, b.gross_balance);
            assert_eq!(a.total_contributions, b.total_contributions);
        }
    }

    #[test]
    fn test_invalid_horizon_rejected() {
        let err = project(&instrument(10.0, 100.0, 0.0, false), 0).unwrap_err();
        assert_eq!(err, EngineError::InvalidHorizon { months: 0 });
    }

    #[test]
    fn test_unrepresentable_horizon_rejected() {
        let err = project(&instrument(10.0, 100.0, 0.0, false), u32::MAX).unwrap_err();
        assert!(matches!(err, EngineError::DateOutOfRange { months: u32::MAX, .. }));
    }

    #[test]
    fn test_negative_principal_rejected() {
        let err = project(&instrument(10.0, -100.0, 0.0, false), 12).unwrap_err();
        assert!(matches!(err, EngineError::NegativeAmount { field: "principal", .. }));
    }

    #[test]
    fn test_negative_rate_behaves_as_zero() {
        let negative = project(&instrument(-3.0, 1000.0, 50.0, true), 6).unwrap();
        let zero = project(&instrument(0.0, 1000.0, 50.0, true), 6).unwrap();
        assert_eq!(negative, zero);
    }

    #[test]
    fn test_summary() {
        let engine = ProjectionEngine::new(ProjectionConfig::with_horizon(12));
        let result = engine.project(&instrument(12.0, 1000.0, 0.0, true)).unwrap();
        let summary = result.summary();

        assert_eq!(summary.months, 12);
        assert_eq!(summary.final_date, Some(ymd(2026, 1, 31)));
        assert_eq!(summary.total_contributions, 1000.0);
        assert_relative_eq!(summary.final_gross_balance, 1120.0, epsilon = 1e-9);
        // 365 days held: 17.5% bracket
        assert_relative_eq!(summary.final_total_tax, 120.0 * 0.175, epsilon = 1e-9);
        assert_relative_eq!(summary.final_net_balance, 1000.0 + 120.0 * 0.825, epsilon = 1e-9);
    }
}
