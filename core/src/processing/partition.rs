//! Decomposition of the output cell space into independent work units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::math::matrix::{Dimensions, Matrix};
use crate::math::validate::validate_compatible;
use crate::prelude::MatrixResult;

/// Size of the slice each work unit owns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One unit per output cell.
    Cell,
    /// One unit per output row.
    #[default]
    Row,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Cell => write!(f, "cell"),
            Granularity::Row => write!(f, "row"),
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cell" => Ok(Granularity::Cell),
            "row" => Ok(Granularity::Row),
            other => Err(format!("unknown granularity {:?} (expected cell or row)", other)),
        }
    }
}

/// Indices of the output region a single worker owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkUnit {
    Cell { row: usize, col: usize },
    Row(usize),
}

impl WorkUnit {
    /// Number of output cells covered when the output has `cols` columns.
    pub fn cells(&self, cols: usize) -> usize {
        match self {
            WorkUnit::Cell { .. } => 1,
            WorkUnit::Row(_) => cols,
        }
    }
}

impl fmt::Display for WorkUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkUnit::Cell { row, col } => write!(f, "cell ({}, {})", row, col),
            WorkUnit::Row(row) => write!(f, "row {}", row),
        }
    }
}

/// Covers every cell of `output` exactly once, in row-major order.
pub fn partition(output: Dimensions, granularity: Granularity) -> Vec<WorkUnit> {
    match granularity {
        Granularity::Row => (0..output.rows).map(WorkUnit::Row).collect(),
        Granularity::Cell => (0..output.rows)
            .flat_map(|row| (0..output.cols).map(move |col| WorkUnit::Cell { row, col }))
            .collect(),
    }
}

/// Partitions the output of `lhs * rhs` after checking the pair is compatible.
pub fn partition_operands<T>(
    lhs: &Matrix<T>,
    rhs: &Matrix<T>,
    granularity: Granularity,
) -> MatrixResult<Vec<WorkUnit>> {
    let output = validate_compatible(lhs, rhs)?;
    Ok(partition(output, granularity))
}
