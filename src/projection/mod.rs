//! Projection engine for savings instrument balances

mod state;
mod engine;
mod points;

pub use state::ProjectionState;
pub use engine::{project, ProjectionConfig, ProjectionEngine, DEFAULT_HORIZON_MONTHS};
pub use points::{ProjectionPoint, ProjectionResult, ProjectionSummary};
