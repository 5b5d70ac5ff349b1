//! Text sources that feed already-validated matrices to the engines.

pub mod text;

pub use text::{parse_matrix, read_matrix, ReadError};
