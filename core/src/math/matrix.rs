use std::fmt;

use ndarray::{Array2, ArrayView1, ArrayView2, LinalgScalar};
use serde::{Deserialize, Serialize};

use crate::math::validate;
use crate::prelude::{MatrixError, MatrixResult, Operand};

/// Numeric cell type accepted by the engines.
///
/// Any primitive integer or float qualifies; the accumulation uses the
/// type's own `+` and `*`. Integer overflow therefore panics in debug builds
/// and wraps in release builds, on whichever thread computes the cell.
pub trait Element: LinalgScalar + Send + Sync + fmt::Debug {}

impl<T> Element for T where T: LinalgScalar + Send + Sync + fmt::Debug {}

/// Row/column extent of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Immutable, non-empty, rectangular grid of numeric cells.
///
/// Every constructor validates its input, so a `Matrix` value always has at
/// least one row and one column. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Array2<T>,
}

impl<T: Element> Matrix<T> {
    /// Builds a matrix from literal rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> MatrixResult<Self> {
        Self::from_rows_labeled(rows, Operand::Matrix)
    }

    /// Builds a matrix from literal rows, tagging failures with `operand`.
    pub fn from_rows_labeled(rows: Vec<Vec<T>>, operand: Operand) -> MatrixResult<Self> {
        let dims = validate::validate_rows(&rows, operand)?;
        let data = Array2::from_shape_fn((dims.rows, dims.cols), |(i, j)| rows[i][j]);
        Ok(Self { data })
    }

    /// Wraps an existing array, rejecting zero rows or columns.
    pub fn from_array(data: Array2<T>) -> MatrixResult<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(MatrixError::EmptyMatrix {
                operand: Operand::Matrix,
            });
        }
        if data.is_standard_layout() {
            Ok(Self { data })
        } else {
            Ok(Self {
                data: data.as_standard_layout().into_owned(),
            })
        }
    }

    /// The `n`x`n` identity matrix.
    pub fn identity(n: usize) -> MatrixResult<Self> {
        if n == 0 {
            return Err(MatrixError::EmptyMatrix {
                operand: Operand::Matrix,
            });
        }
        Ok(Self {
            data: Array2::eye(n),
        })
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.data.get((row, col)).copied()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }
}

impl<T> Matrix<T> {
    /// Wraps an array already known to be non-empty and standard layout.
    pub(crate) fn from_validated(data: Array2<T>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Self { data }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn dims(&self) -> Dimensions {
        Dimensions::new(self.rows(), self.cols())
    }

    /// Row `i` as a view. Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> ArrayView1<'_, T> {
        self.data.row(i)
    }

    pub fn as_array(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    pub fn into_array(self) -> Array2<T> {
        self.data
    }
}

/// One row per line, cells separated by a single space.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.outer_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
