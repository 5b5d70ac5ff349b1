use matcore::{multiply, validate_operands, MatrixResult, Multiplier, ParallelEngine};
use serde::Serialize;

/// Small hand-written operand pair with the outcome it should produce.
pub struct EdgeCase {
    pub name: &'static str,
    pub lhs: Vec<Vec<i64>>,
    pub rhs: Vec<Vec<i64>>,
    /// `None` when the pair must be rejected.
    pub expected: Option<Vec<Vec<i64>>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeCaseOutcome {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

pub fn standard_cases() -> Vec<EdgeCase> {
    vec![
        EdgeCase {
            name: "1x1 * 1x1",
            lhs: vec![vec![2]],
            rhs: vec![vec![3]],
            expected: Some(vec![vec![6]]),
        },
        EdgeCase {
            name: "1x2 * 2x1",
            lhs: vec![vec![1, 2]],
            rhs: vec![vec![3], vec![4]],
            expected: Some(vec![vec![11]]),
        },
        EdgeCase {
            name: "2x2 * 2x2",
            lhs: vec![vec![1, 2], vec![3, 4]],
            rhs: vec![vec![5, 6], vec![7, 8]],
            expected: Some(vec![vec![19, 22], vec![43, 50]]),
        },
        EdgeCase {
            name: "empty matrices",
            lhs: vec![],
            rhs: vec![],
            expected: None,
        },
        EdgeCase {
            name: "incompatible dimensions",
            lhs: vec![vec![1, 2, 3], vec![4, 5, 6]],
            rhs: vec![vec![7, 8], vec![9, 10]],
            expected: None,
        },
        EdgeCase {
            name: "non-rectangular A",
            lhs: vec![vec![1, 2], vec![3]],
            rhs: vec![vec![4, 5], vec![6, 7]],
            expected: None,
        },
    ]
}

fn products(
    case: &EdgeCase,
    engine: &ParallelEngine,
) -> MatrixResult<(Vec<Vec<i64>>, Vec<Vec<i64>>)> {
    let (a, b) = validate_operands(case.lhs.clone(), case.rhs.clone())?;
    let sequential = multiply(&a, &b)?;
    let concurrent = engine.multiply(&a, &b)?;
    Ok((sequential.to_rows(), concurrent.to_rows()))
}

/// Runs both engines on `case` and checks the result against expectations.
pub fn run_case(case: &EdgeCase, engine: &ParallelEngine) -> EdgeCaseOutcome {
    let (passed, detail) = match (products(case, engine), &case.expected) {
        (Ok((sequential, concurrent)), Some(expected)) => {
            let passed = sequential == concurrent && &sequential == expected;
            let detail = if passed {
                "results match".to_string()
            } else {
                format!(
                    "sequential {:?}, concurrent {:?}, expected {:?}",
                    sequential, concurrent, expected
                )
            };
            (passed, detail)
        }
        (Ok((sequential, _)), None) => (false, format!("unexpected result {:?}", sequential)),
        (Err(err), None) => (true, format!("correctly rejected: {}", err)),
        (Err(err), Some(_)) => (false, format!("unexpected error: {}", err)),
    };
    EdgeCaseOutcome {
        name: case.name.to_string(),
        passed,
        detail,
    }
}
