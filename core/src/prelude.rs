use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::matrix::{Dimensions, Element, Matrix};
use crate::processing::partition::{Granularity, WorkUnit};

/// Default bound on simultaneously active workers.
pub const DEFAULT_MAX_WORKERS: usize = 8;

/// Shared configuration for the parallel engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_workers: usize,
    pub granularity: Granularity,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
            granularity: Granularity::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_workers(max_workers: usize) -> Self {
        Self {
            max_workers,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> MatrixResult<()> {
        if self.max_workers == 0 {
            return Err(MatrixError::InvalidWorkerCount);
        }
        Ok(())
    }
}

/// Identifies which operand a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    A,
    B,
    Matrix,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => write!(f, "A"),
            Operand::B => write!(f, "B"),
            Operand::Matrix => write!(f, "matrix"),
        }
    }
}

/// Common error type for validation and engine setup.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("{operand} is empty")]
    EmptyMatrix { operand: Operand },
    #[error("{operand} is not rectangular: row {row} has length {found}, expected {expected}")]
    RaggedMatrix {
        operand: Operand,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("incompatible dimensions: A has {cols_a} columns, B has {rows_b} rows")]
    IncompatibleDimensions { cols_a: usize, rows_b: usize },
    #[error("max_workers must be positive")]
    InvalidWorkerCount,
    #[error("{unit} cannot be bound to a {dims} result in row-major order")]
    UnassignableUnit { unit: WorkUnit, dims: Dimensions },
    #[error("worker pool failure: {0}")]
    WorkerPool(String),
}

pub type MatrixResult<T> = Result<T, MatrixError>;

/// Trait implemented by every multiplication engine.
pub trait Multiplier {
    fn name(&self) -> &'static str;
    fn multiply<T: Element>(&self, lhs: &Matrix<T>, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>>;
}
