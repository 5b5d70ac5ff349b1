use crate::workflow::config::{ElementKind, WorkflowConfig};
use crate::workflow::edge_cases::EdgeCaseOutcome;
use crate::workflow::runner::{ComparisonResult, WorkflowResult};
use matcore::EngineConfig;
use serde::Serialize;

/// One line of the run report.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub element: ElementKind,
    pub engine: EngineConfig,
    pub edge_cases: Vec<EdgeCaseOutcome>,
    pub comparisons: Vec<ComparisonResult>,
}

impl RunReport {
    pub fn new(config: &WorkflowConfig, result: &WorkflowResult) -> Self {
        Self {
            seed: config.seed,
            element: config.element,
            engine: config.engine,
            edge_cases: result.edge_cases.clone(),
            comparisons: result.comparisons.clone(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.edge_cases.iter().all(|outcome| outcome.passed)
            && self.comparisons.iter().all(|comparison| comparison.matches)
    }
}
