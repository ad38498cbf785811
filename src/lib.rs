//! Savings Engine - Balance projection and installment amortization for personal finance
//!
//! This library provides:
//! - Effective annual/monthly rate conversion for index-linked savings
//! - Regressive income tax and early-withdrawal transactional tax tables
//! - Month-by-month balance projection with "cash out now" net estimates
//! - Splitting an expense into dated installments that sum exactly to the total
//! - Calendar-safe month stepping shared by both paths

pub mod error;
pub mod calendar;
pub mod rates;
pub mod tax;
pub mod instrument;
pub mod projection;
pub mod installments;
pub mod scenario;
pub mod format;

// Re-export commonly used types
pub use error::{EngineError, EngineResult};
pub use calendar::advance_months;
pub use rates::{effective_annual_rate, effective_monthly_rate};
pub use tax::{income_tax_rate, transaction_tax_rate, IncomeTaxSchedule};
pub use instrument::{InstrumentParameters, InstrumentRecord};
pub use projection::{project, ProjectionConfig, ProjectionEngine, ProjectionPoint, ProjectionResult};
pub use installments::{amortize, InstallmentLine, InstallmentPlan};
pub use scenario::ScenarioRunner;
