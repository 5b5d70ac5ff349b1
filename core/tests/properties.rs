use matcore::{
    multiply, multiply_concurrently, transpose, validate_operands, Dimensions, EngineConfig,
    Granularity, Matrix, MatrixError, Multiplier, Operand, ParallelEngine,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<i64> {
    let data = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(1..=10)).collect())
        .collect();
    Matrix::from_rows(data).unwrap()
}

fn assert_engines_agree(a: &Matrix<i64>, b: &Matrix<i64>, worker_bounds: &[usize]) {
    let expected = multiply(a, b).unwrap();
    for &max_workers in worker_bounds {
        assert_eq!(
            multiply_concurrently(a, b, max_workers).unwrap(),
            expected,
            "max_workers = {max_workers}"
        );
    }
}

#[test]
fn concurrent_result_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(7);
    for (m, n, p) in [(1, 1, 1), (3, 4, 5), (9, 2, 7), (16, 16, 16)] {
        let a = random_matrix(&mut rng, m, n);
        let b = random_matrix(&mut rng, n, p);
        assert_engines_agree(&a, &b, &[1, 2, 8, m * p]);
    }
}

#[test]
fn granularity_does_not_change_the_result() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = random_matrix(&mut rng, 12, 9);
    let b = random_matrix(&mut rng, 9, 14);
    let cell = ParallelEngine::new(EngineConfig {
        max_workers: 4,
        granularity: Granularity::Cell,
    })
    .unwrap();
    let row = ParallelEngine::new(EngineConfig {
        max_workers: 4,
        granularity: Granularity::Row,
    })
    .unwrap();
    assert_eq!(cell.multiply(&a, &b).unwrap(), row.multiply(&a, &b).unwrap());
}

#[test]
fn float_results_are_identical_across_engines() {
    let mut rng = StdRng::seed_from_u64(3);
    let data = |rng: &mut StdRng, rows: usize, cols: usize| -> Vec<Vec<f64>> {
        (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(-1.0..1.0)).collect())
            .collect()
    };
    let a = Matrix::from_rows(data(&mut rng, 20, 33)).unwrap();
    let b = Matrix::from_rows(data(&mut rng, 33, 17)).unwrap();
    let sequential = multiply(&a, &b).unwrap();
    let parallel = multiply_concurrently(&a, &b, 5).unwrap();
    for i in 0..sequential.rows() {
        for j in 0..sequential.cols() {
            let (s, p) = (sequential.get(i, j).unwrap(), parallel.get(i, j).unwrap());
            assert_eq!(s.to_bits(), p.to_bits());
        }
    }
}

#[test]
fn multiplication_is_associative() {
    let mut rng = StdRng::seed_from_u64(19);
    let a = random_matrix(&mut rng, 4, 6);
    let b = random_matrix(&mut rng, 6, 3);
    let c = random_matrix(&mut rng, 3, 5);
    let left = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
    let right = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();
    assert_eq!(left, right);
}

#[test]
fn identity_leaves_matrix_unchanged() {
    let mut rng = StdRng::seed_from_u64(23);
    let a = random_matrix(&mut rng, 5, 8);
    let right = Matrix::identity(8).unwrap();
    let left = Matrix::identity(5).unwrap();
    assert_eq!(multiply(&a, &right).unwrap(), a);
    assert_eq!(multiply(&left, &a).unwrap(), a);
    assert_eq!(multiply_concurrently(&a, &right, 3).unwrap(), a);
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(29);
    for (rows, cols) in [(1, 1), (1, 9), (9, 1), (6, 4)] {
        let a = random_matrix(&mut rng, rows, cols);
        assert_eq!(transpose(&a).dims(), Dimensions::new(cols, rows));
        assert_eq!(transpose(&transpose(&a)), a);
    }
}

#[test]
fn product_shape_is_rows_of_a_by_cols_of_b() {
    let mut rng = StdRng::seed_from_u64(31);
    let a = random_matrix(&mut rng, 7, 2);
    let b = random_matrix(&mut rng, 2, 11);
    assert_eq!(multiply(&a, &b).unwrap().dims(), Dimensions::new(7, 11));
    assert_eq!(
        multiply_concurrently(&a, &b, 8).unwrap().dims(),
        Dimensions::new(7, 11)
    );
}

#[test]
fn empty_operands_are_rejected() {
    let err = validate_operands::<i64>(vec![], vec![]).unwrap_err();
    assert_eq!(err, MatrixError::EmptyMatrix { operand: Operand::A });
}

#[test]
fn ragged_operand_is_rejected() {
    let err = validate_operands(vec![vec![1, 2], vec![3]], vec![vec![1, 1], vec![1, 1]])
        .unwrap_err();
    assert_eq!(
        err,
        MatrixError::RaggedMatrix {
            operand: Operand::A,
            row: 1,
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn incompatible_operands_are_rejected() {
    let err = validate_operands(
        vec![vec![1, 2, 3], vec![4, 5, 6]],
        vec![vec![7, 8], vec![9, 10]],
    )
    .unwrap_err();
    assert_eq!(
        err,
        MatrixError::IncompatibleDimensions {
            cols_a: 3,
            rows_b: 2
        }
    );
}

#[test]
fn known_small_products() {
    let (a, b) = validate_operands(vec![vec![2]], vec![vec![3]]).unwrap();
    assert_eq!(multiply_concurrently(&a, &b, 8).unwrap().to_rows(), vec![vec![6]]);

    let (a, b) =
        validate_operands(vec![vec![1, 2], vec![3, 4]], vec![vec![5, 6], vec![7, 8]]).unwrap();
    let expected = vec![vec![19, 22], vec![43, 50]];
    assert_eq!(multiply(&a, &b).unwrap().to_rows(), expected);
    assert_eq!(multiply_concurrently(&a, &b, 8).unwrap().to_rows(), expected);
}

#[test]
fn stress_hundred_square() {
    let mut rng = StdRng::seed_from_u64(100);
    let a = random_matrix(&mut rng, 100, 100);
    let b = random_matrix(&mut rng, 100, 100);
    assert_engines_agree(&a, &b, &[1, 2, 8, 100 * 100]);
}

#[test]
fn stress_rectangular_pair() {
    let mut rng = StdRng::seed_from_u64(250);
    let a = random_matrix(&mut rng, 250, 120);
    let b = random_matrix(&mut rng, 120, 180);
    assert_engines_agree(&a, &b, &[1, 2, 8]);
}

#[test]
#[ignore = "slow in debug builds; run with --release -- --ignored"]
fn stress_thousand_square() {
    let mut rng = StdRng::seed_from_u64(1000);
    let a = random_matrix(&mut rng, 1000, 1000);
    let b = random_matrix(&mut rng, 1000, 1000);
    assert_engines_agree(&a, &b, &[1, 2, 8]);
}
