//! Shape checks that run before any multiplication starts.

use crate::math::matrix::{Dimensions, Element, Matrix};
use crate::prelude::{MatrixError, MatrixResult, Operand};

/// Checks that `rows` is non-empty and rectangular.
///
/// Reports the first row whose length differs from row 0.
pub fn validate_rows<T>(rows: &[Vec<T>], operand: Operand) -> MatrixResult<Dimensions> {
    let expected = match rows.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(MatrixError::EmptyMatrix { operand }),
    };

    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(MatrixError::RaggedMatrix {
            operand,
            row,
            expected,
            found,
        });
    }

    Ok(Dimensions::new(rows.len(), expected))
}

/// Re-checks a constructed matrix.
pub fn validate<T>(matrix: &Matrix<T>, operand: Operand) -> MatrixResult<Dimensions> {
    let dims = matrix.dims();
    if dims.rows == 0 || dims.cols == 0 {
        return Err(MatrixError::EmptyMatrix { operand });
    }
    Ok(dims)
}

/// Checks that `lhs * rhs` is defined and returns the output shape.
pub fn validate_compatible<T>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> MatrixResult<Dimensions> {
    let a = validate(lhs, Operand::A)?;
    let b = validate(rhs, Operand::B)?;
    if a.cols != b.rows {
        return Err(MatrixError::IncompatibleDimensions {
            cols_a: a.cols,
            rows_b: b.rows,
        });
    }
    Ok(Dimensions::new(a.rows, b.cols))
}

/// Builds both operands of a product from literal rows.
///
/// Checks A, then B, then their compatibility, and stops at the first
/// failure.
pub fn validate_operands<T: Element>(
    lhs: Vec<Vec<T>>,
    rhs: Vec<Vec<T>>,
) -> MatrixResult<(Matrix<T>, Matrix<T>)> {
    let a = Matrix::from_rows_labeled(lhs, Operand::A)?;
    let b = Matrix::from_rows_labeled(rhs, Operand::B)?;
    validate_compatible(&a, &b)?;
    Ok((a, b))
}
