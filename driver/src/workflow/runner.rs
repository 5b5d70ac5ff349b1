use crate::generator::random::{GeneratedElement, MatrixGenerator};
use crate::workflow::config::{ElementKind, WorkflowConfig};
use crate::workflow::edge_cases::{run_case, standard_cases, EdgeCaseOutcome};
use anyhow::Context;
use matcore::ingest::read_matrix;
use matcore::telemetry::LogObserver;
use matcore::{transpose, Matrix, Multiplier, ParallelEngine, SequentialEngine};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Timing of one sequential/concurrent pair on random square operands.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub size: usize,
    pub sequential_secs: f64,
    pub concurrent_secs: f64,
    pub matches: bool,
}

pub struct WorkflowResult {
    pub edge_cases: Vec<EdgeCaseOutcome>,
    pub comparisons: Vec<ComparisonResult>,
}

pub struct Runner {
    config: WorkflowConfig,
    sequential: SequentialEngine,
    parallel: ParallelEngine,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> anyhow::Result<Self> {
        let observer = Arc::new(LogObserver::new());
        let parallel = ParallelEngine::with_observer(config.engine, observer.clone())
            .context("building parallel engine")?;
        Ok(Self {
            sequential: SequentialEngine::with_observer(observer),
            parallel,
            config,
        })
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let edge_cases = if self.config.edge_cases {
            standard_cases()
                .iter()
                .map(|case| run_case(case, &self.parallel))
                .collect()
        } else {
            Vec::new()
        };

        let mut generator = MatrixGenerator::new(self.config.seed);
        let comparisons = self
            .config
            .sizes
            .iter()
            .map(|&size| match self.config.element {
                ElementKind::Int => self.compare::<i64>(&mut generator, size),
                ElementKind::Float => self.compare::<f64>(&mut generator, size),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(WorkflowResult {
            edge_cases,
            comparisons,
        })
    }

    fn compare<T: GeneratedElement>(
        &self,
        generator: &mut MatrixGenerator,
        size: usize,
    ) -> anyhow::Result<ComparisonResult> {
        let a: Matrix<T> = generator.square(size)?;
        let b: Matrix<T> = generator.square(size)?;

        let start = Instant::now();
        let sequential = self
            .sequential
            .multiply(&a, &b)
            .with_context(|| format!("sequential multiply at size {}", size))?;
        let sequential_secs = start.elapsed().as_secs_f64();

        let start = Instant::now();
        let concurrent = self
            .parallel
            .multiply(&a, &b)
            .with_context(|| format!("concurrent multiply at size {}", size))?;
        let concurrent_secs = start.elapsed().as_secs_f64();

        Ok(ComparisonResult {
            size,
            sequential_secs,
            concurrent_secs,
            matches: sequential == concurrent,
        })
    }

    /// Multiplies two matrix files and renders the product.
    pub fn multiply_files(&self, lhs: &Path, rhs: &Path) -> anyhow::Result<String> {
        match self.config.element {
            ElementKind::Int => self.multiply_files_as::<i64>(lhs, rhs),
            ElementKind::Float => self.multiply_files_as::<f64>(lhs, rhs),
        }
    }

    fn multiply_files_as<T: GeneratedElement + std::str::FromStr>(
        &self,
        lhs: &Path,
        rhs: &Path,
    ) -> anyhow::Result<String> {
        let a: Matrix<T> =
            read_matrix(lhs).with_context(|| format!("loading A from {}", lhs.display()))?;
        let b: Matrix<T> =
            read_matrix(rhs).with_context(|| format!("loading B from {}", rhs.display()))?;
        let product = self.parallel.multiply(&a, &b).context("multiplying A and B")?;
        Ok(product.to_string())
    }

    /// Transposes a matrix file and renders the result.
    pub fn transpose_file(&self, path: &Path) -> anyhow::Result<String> {
        match self.config.element {
            ElementKind::Int => self.transpose_file_as::<i64>(path),
            ElementKind::Float => self.transpose_file_as::<f64>(path),
        }
    }

    fn transpose_file_as<T: GeneratedElement + std::str::FromStr>(
        &self,
        path: &Path,
    ) -> anyhow::Result<String> {
        let matrix: Matrix<T> =
            read_matrix(path).with_context(|| format!("loading {}", path.display()))?;
        Ok(transpose(&matrix).to_string())
    }
}
