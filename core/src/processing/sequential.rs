use std::sync::Arc;
use std::time::Instant;

use ndarray::{Array2, ArrayView2};

use crate::math::matrix::{Element, Matrix};
use crate::math::validate::validate_compatible;
use crate::prelude::{MatrixResult, Multiplier};
use crate::processing::partition::WorkUnit;
use crate::telemetry::observer::{MultiplyObserver, NoopObserver};

/// Dot product of row `row` of `lhs` with column `col` of `rhs`.
///
/// Accumulates from zero with `k` ascending. Both engines go through this
/// function so their results agree bit for bit. Arithmetic is the element
/// type's own: no widening or overflow checks beyond what `+` and `*` do.
pub(crate) fn dot_cell<T: Element>(
    lhs: ArrayView2<'_, T>,
    rhs: ArrayView2<'_, T>,
    row: usize,
    col: usize,
) -> T {
    lhs.row(row)
        .iter()
        .zip(rhs.column(col).iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Reference triple-loop multiplication.
pub fn multiply<T: Element>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    SequentialEngine::new().multiply(lhs, rhs)
}

/// Single-threaded engine; the baseline the parallel engine is checked against.
pub struct SequentialEngine {
    observer: Arc<dyn MultiplyObserver>,
}

impl SequentialEngine {
    pub fn new() -> Self {
        Self::with_observer(Arc::new(NoopObserver))
    }

    pub fn with_observer(observer: Arc<dyn MultiplyObserver>) -> Self {
        Self { observer }
    }
}

impl Default for SequentialEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for SequentialEngine {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn multiply<T: Element>(&self, lhs: &Matrix<T>, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        let output = validate_compatible(lhs, rhs)?;
        let started = Instant::now();
        self.observer
            .multiplication_started(self.name(), lhs.dims(), rhs.dims());

        let (a, b) = (lhs.as_array(), rhs.as_array());
        let mut result = Array2::zeros((output.rows, output.cols));
        for i in 0..output.rows {
            for j in 0..output.cols {
                result[[i, j]] = dot_cell(a, b, i, j);
            }
            self.observer.unit_completed(&WorkUnit::Row(i));
        }

        self.observer
            .multiplication_finished(self.name(), output, started.elapsed());
        Ok(Matrix::from_validated(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Dimensions;
    use crate::prelude::MatrixError;
    use crate::telemetry::metrics::MetricsRecorder;
    use approx::assert_relative_eq;

    #[test]
    fn multiplies_two_by_two() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn multiplies_one_by_one() {
        let a = Matrix::from_rows(vec![vec![2]]).unwrap();
        let b = Matrix::from_rows(vec![vec![3]]).unwrap();
        assert_eq!(multiply(&a, &b).unwrap().to_rows(), vec![vec![6]]);
    }

    #[test]
    fn row_times_column_collapses_to_scalar() {
        let a = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
        let b = Matrix::from_rows(vec![vec![3], vec![4]]).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.dims(), Dimensions::new(1, 1));
        assert_eq!(c.get(0, 0), Some(11));
    }

    #[test]
    fn float_products_accumulate_plainly() {
        let a = Matrix::from_rows(vec![vec![0.5, 1.5], vec![2.0, -1.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![4.0], vec![0.25]]).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_relative_eq!(c.get(0, 0).unwrap(), 2.375);
        assert_relative_eq!(c.get(1, 0).unwrap(), 7.75);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn integer_overflow_uses_native_arithmetic() {
        let a = Matrix::from_rows(vec![vec![i64::MAX, 1]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1], vec![1]]).unwrap();
        let _ = multiply(&a, &b);
    }

    #[test]
    fn rejects_incompatible_pair_before_computing() {
        let metrics = Arc::new(MetricsRecorder::new());
        let engine = SequentialEngine::with_observer(metrics.clone());
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7, 8], vec![9, 10]]).unwrap();
        assert_eq!(
            engine.multiply(&a, &b),
            Err(MatrixError::IncompatibleDimensions {
                cols_a: 3,
                rows_b: 2
            })
        );
        assert_eq!(metrics.snapshot().started, 0);
    }

    #[test]
    fn observer_sees_one_unit_per_row() {
        let metrics = Arc::new(MetricsRecorder::new());
        let engine = SequentialEngine::with_observer(metrics.clone());
        let a = Matrix::from_rows(vec![vec![1, 0]; 3]).unwrap();
        let b = Matrix::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap();
        engine.multiply(&a, &b).unwrap();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.started, 1);
        assert_eq!(snapshot.finished, 1);
        assert_eq!(snapshot.units, 3);
    }
}
