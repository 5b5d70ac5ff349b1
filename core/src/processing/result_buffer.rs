use ndarray::{Array2, ArrayView2, ArrayViewMut1};

use crate::math::matrix::{Dimensions, Element, Matrix};
use crate::prelude::{MatrixError, MatrixResult};
use crate::processing::partition::WorkUnit;
use crate::processing::sequential::dot_cell;

/// Zero-initialized output grid owned by a single multiplication call.
pub struct ResultBuffer<T> {
    data: Array2<T>,
}

/// Exclusive write access to the cells of one work unit.
pub enum Assignment<'a, T> {
    Cell { row: usize, col: usize, cell: &'a mut T },
    Row { row: usize, cells: ArrayViewMut1<'a, T> },
}

impl<T: Element> ResultBuffer<T> {
    pub fn zeroed(dims: Dimensions) -> Self {
        Self {
            data: Array2::zeros((dims.rows, dims.cols)),
        }
    }

    pub fn dims(&self) -> Dimensions {
        Dimensions::new(self.data.nrows(), self.data.ncols())
    }

    /// Binds each unit to the disjoint slice of the grid it owns.
    ///
    /// Units must be of one kind and in strictly increasing row-major order,
    /// which is what `partition` yields. A unit outside the grid, out of
    /// order, or of the other kind is `UnassignableUnit`.
    pub fn assignments(
        &mut self,
        units: &[WorkUnit],
    ) -> MatrixResult<Vec<Assignment<'_, T>>> {
        let dims = self.dims();
        let unassignable = |unit: WorkUnit| MatrixError::UnassignableUnit { unit, dims };
        match units.first() {
            None => Ok(Vec::new()),
            Some(WorkUnit::Row(_)) => {
                let mut targets = self.data.outer_iter_mut().enumerate();
                units
                    .iter()
                    .map(|&unit| match unit {
                        WorkUnit::Row(row) => targets
                            .find(|(index, _)| *index == row)
                            .map(|(_, cells)| Assignment::Row { row, cells })
                            .ok_or_else(|| unassignable(unit)),
                        WorkUnit::Cell { .. } => Err(unassignable(unit)),
                    })
                    .collect()
            }
            Some(WorkUnit::Cell { .. }) => {
                let mut targets = self.data.indexed_iter_mut();
                units
                    .iter()
                    .map(|&unit| match unit {
                        WorkUnit::Cell { row, col } => targets
                            .find(|(index, _)| *index == (row, col))
                            .map(|(_, cell)| Assignment::Cell { row, col, cell })
                            .ok_or_else(|| unassignable(unit)),
                        WorkUnit::Row(_) => Err(unassignable(unit)),
                    })
                    .collect()
            }
        }
    }

    /// Hands the finished grid over as an immutable matrix.
    pub fn into_matrix(self) -> MatrixResult<Matrix<T>> {
        Matrix::from_array(self.data)
    }
}

impl<'a, T: Element> Assignment<'a, T> {
    pub fn unit(&self) -> WorkUnit {
        match self {
            Assignment::Cell { row, col, .. } => WorkUnit::Cell {
                row: *row,
                col: *col,
            },
            Assignment::Row { row, .. } => WorkUnit::Row(*row),
        }
    }

    /// Writes every owned cell and returns the unit that was completed.
    pub fn compute(self, lhs: ArrayView2<'_, T>, rhs: ArrayView2<'_, T>) -> WorkUnit {
        let unit = self.unit();
        match self {
            Assignment::Cell { row, col, cell } => {
                *cell = dot_cell(lhs, rhs, row, col);
            }
            Assignment::Row { row, mut cells } => {
                for (col, cell) in cells.iter_mut().enumerate() {
                    *cell = dot_cell(lhs, rhs, row, col);
                }
            }
        }
        unit
    }
}
