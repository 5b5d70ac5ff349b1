use log::debug;

use crate::math::matrix::{Element, Matrix};

/// Swaps rows and columns, allocating a fresh row-major matrix.
pub fn transpose<T: Element>(matrix: &Matrix<T>) -> Matrix<T> {
    let flipped = matrix.as_array().t().as_standard_layout().into_owned();
    debug!("transposed {} matrix", matrix.dims());
    Matrix::from_validated(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Dimensions;

    #[test]
    fn transpose_swaps_indices() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let t = transpose(&m);
        assert_eq!(t.dims(), Dimensions::new(3, 2));
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                assert_eq!(t.get(j, i), m.get(i, j));
            }
        }
    }

    #[test]
    fn transpose_twice_is_identity() {
        let m = Matrix::from_rows(vec![vec![1.5, -2.0], vec![0.0, 4.25], vec![9.0, 1.0]]).unwrap();
        assert_eq!(transpose(&transpose(&m)), m);
    }

    #[test]
    fn transpose_of_single_row_is_column() {
        let m = Matrix::from_rows(vec![vec![7, 8, 9]]).unwrap();
        assert_eq!(transpose(&m).to_rows(), vec![vec![7], vec![8], vec![9]]);
    }
}
