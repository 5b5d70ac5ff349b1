use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;

use crate::math::matrix::{Element, Matrix};
use crate::prelude::{MatrixError, Operand};

/// Failure while turning text into a matrix.
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("invalid number {token:?} on line {line}")]
    MalformedInput { line: usize, token: String },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Shape(#[from] MatrixError),
}

/// Parses whitespace-separated numbers, one matrix row per non-blank line.
///
/// Every token must parse as `T`; nothing is coerced between integer and
/// floating-point types.
pub fn parse_matrix<T>(text: &str) -> Result<Matrix<T>, ReadError>
where
    T: Element + FromStr,
{
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let row = trimmed
            .split_whitespace()
            .map(|token| {
                token.parse::<T>().map_err(|_| ReadError::MalformedInput {
                    line: index + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<T>, ReadError>>()?;
        rows.push(row);
    }
    Ok(Matrix::from_rows_labeled(rows, Operand::Matrix)?)
}

/// Reads and parses a matrix file.
pub fn read_matrix<T, P>(path: P) -> Result<Matrix<T>, ReadError>
where
    T: Element + FromStr,
    P: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref).map_err(|source| ReadError::Io {
        path: path_ref.to_path_buf(),
        source,
    })?;
    let matrix = parse_matrix(&contents)?;
    info!(
        "read {} matrix from {}",
        matrix.dims(),
        path_ref.display()
    );
    Ok(matrix)
}
