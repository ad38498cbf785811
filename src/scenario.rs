//! Scenario runner for batch projections
//!
//! Holds one base configuration and evaluates many instruments or horizons
//! against it. Projections share no state, so batches run in parallel.

use rayon::prelude::*;

use crate::error::EngineResult;
use crate::instrument::InstrumentParameters;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Batch projection runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.run_batch(&instruments);
/// let by_horizon = runner.run_horizons(&params, &[12, 24, 60]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create runner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a pre-built configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { base_config: config }
    }

    /// Run a single projection
    pub fn run(&self, params: &InstrumentParameters) -> EngineResult<ProjectionResult> {
        ProjectionEngine::new(self.base_config.clone()).project(params)
    }

    /// Run projections for many instruments; results keep the input order
    pub fn run_batch(&self, instruments: &[InstrumentParameters]) -> Vec<EngineResult<ProjectionResult>> {
        let engine = ProjectionEngine::new(self.base_config.clone());
        instruments.par_iter().map(|p| engine.project(p)).collect()
    }

    /// Run one instrument over several horizons
    pub fn run_horizons(&self, params: &InstrumentParameters, horizons: &[u32]) -> Vec<EngineResult<ProjectionResult>> {
        horizons
            .par_iter()
            .map(|&horizon_months| {
                let config = ProjectionConfig {
                    horizon_months,
                    ..self.base_config.clone()
                };
                ProjectionEngine::new(config).project(params)
            })
            .collect()
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.base_config
    }

    pub fn config_mut(&mut self) -> &mut ProjectionConfig {
        &mut self.base_config
    }
}
